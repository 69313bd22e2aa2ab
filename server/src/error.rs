use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::validate::FieldError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid survey data")]
    Validation(Vec<FieldError>),

    #[error("Missing user identity")]
    Unauthorized,

    #[error("No survey found for this user")]
    NotFound,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Invalid survey data",
                    "errors": errors,
                })),
            )
                .into_response(),

            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),

            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),

            AppError::UnsupportedOperation(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),

            AppError::Store(_) | AppError::Serde(_) => {
                error!("{self}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
