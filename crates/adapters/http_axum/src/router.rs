//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use sensorhub_app::ports::SensorRepository;
use sensorhub_domain::time::{Timestamp, now};

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: Timestamp,
}

/// Build the top-level axum [`Router`].
///
/// Serves the description document at `/`, the health probe, and the
/// sensor routes. A permissive [`CorsLayer`] lets browser dashboards on
/// any origin call the API, and a [`TraceLayer`] logs each HTTP
/// request/response using the `tracing` ecosystem.
pub fn build<SR>(state: AppState<SR>) -> Router
where
    SR: SensorRepository + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(crate::api::index::describe))
        .route("/health", get(health_check))
        .merge(crate::api::routes::<SR>())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "UP",
        timestamp: now(),
    })
}
