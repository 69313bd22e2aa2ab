//! Backend for the Cardinal survey platform.
//!
//! Users register through a managed identity provider, fill out a
//! multi-section demographic/lifestyle survey once, and browse aggregate
//! charts. This crate is the part in between: request handlers that
//! validate submissions, a thin record store over redis, and a pure
//! counting engine for the dashboard.
//!
//! # Architecture
//!
//! - The gateway terminates auth and injects the verified user id as a
//!   header ([`auth`]).
//! - [`validate`] checks a raw submission against the fixed schema in
//!   [`schema`] and collects every violation for the form UI.
//! - Accepted records go through the [`store::RecordStore`] seam; the
//!   production impl ([`database`]) keeps one hash of all records plus a
//!   per-user hash of each user's latest.
//! - [`analytics`] recomputes frequency counts, two-field co-occurrence
//!   counts, and the full stats breakdown from a full scan on every
//!   request. Fine at current volume; the scan is capped by
//!   `SCAN_LIMIT` and would need precomputation long before that cap
//!   starts truncating honest data.
//!
//! # Endpoints
//!
//! | Route | Operation |
//! |---|---|
//! | `POST /survey` | validate + store one submission |
//! | `GET /survey` | the caller's most recent submission |
//! | `GET /survey/stats` | per-category counts and percentages |
//! | `POST /analytics` | `aggregateSurveyData` / `correlationAnalysis` by name |

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, HeaderName, Method},
    routing::{get, post},
    Router,
};

use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod analytics;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod routes;
pub mod schema;
pub mod state;
pub mod store;
pub mod testing;
pub mod validate;

use routes::{
    analytics_handler, submit_survey_handler, survey_stats_handler, user_survey_handler,
};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(auth::USER_ID_HEADER)])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/survey",
            post(submit_survey_handler).get(user_survey_handler),
        )
        .route("/survey/stats", get(survey_stats_handler))
        .route("/analytics", post(analytics_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await;

    info!("Starting server...");
    let address = format!("0.0.0.0:{}", state.config.port);
    let app = app(state);

    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
