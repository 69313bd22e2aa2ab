//! # Routes
//!
//! The boundary operations: submit a survey, fetch your own, fetch the
//! dashboard stats, and run an analytics operation by name. Handlers
//! validate input, talk to the record store, and hand pure slices to the
//! analytics engine; everything fallible funnels through
//! [`crate::error::AppError`].

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::{
    analytics::{aggregate, correlate, survey_stats},
    auth::UserId,
    error::AppError,
    models::SurveyRecord,
    schema,
    state::State as AppState,
    validate::{validate, FieldError},
};

pub const AGGREGATE_OPERATION: &str = "aggregateSurveyData";
pub const CORRELATION_OPERATION: &str = "correlationAnalysis";

pub async fn submit_survey_handler(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let answers = validate(&payload).map_err(AppError::Validation)?;

    let record = SurveyRecord {
        survey_id: Uuid::new_v4().to_string(),
        user_id,
        completed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        answers,
    };

    state.store.put(&record).await?;

    info!("Stored survey {}", record.survey_id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Survey submitted successfully",
            "surveyId": record.survey_id,
        })),
    ))
}

pub async fn user_survey_handler(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .store
        .get_by_user(&user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(record))
}

pub async fn survey_stats_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.store.scan_all(state.config.scan_limit).await?;

    Ok(Json(survey_stats(&records)))
}

/// An analytics request, dispatched by operation name. `field` rides with
/// aggregation, `field1`/`field2` with correlation.
#[derive(Deserialize)]
pub struct AnalyticsRequest {
    pub operation: String,
    pub field: Option<String>,
    pub field1: Option<String>,
    pub field2: Option<String>,
}

pub async fn analytics_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyticsRequest>,
) -> Result<Response, AppError> {
    let records = state.store.scan_all(state.config.scan_limit).await?;

    match request.operation.as_str() {
        AGGREGATE_OPERATION => {
            let field = known_field(request.field, "field")?;

            Ok(Json(aggregate(&records, &field)).into_response())
        }
        CORRELATION_OPERATION => {
            let field1 = known_field(request.field1, "field1")?;
            let field2 = known_field(request.field2, "field2")?;

            Ok(Json(correlate(&records, &field1, &field2)).into_response())
        }
        operation => Err(AppError::UnsupportedOperation(operation.to_string())),
    }
}

/// The engine itself reports empty counts for unknown fields, so the
/// boundary rejects them here instead of returning a misleading result.
fn known_field(field: Option<String>, param: &str) -> Result<String, AppError> {
    let field = field.ok_or_else(|| {
        AppError::Validation(vec![FieldError::new(
            param,
            format!("\"{param}\" is required"),
        )])
    })?;

    if !schema::is_known_field(&field) {
        return Err(AppError::Validation(vec![FieldError::new(
            param,
            format!("\"{field}\" is not a survey field"),
        )]));
    }

    Ok(field)
}
