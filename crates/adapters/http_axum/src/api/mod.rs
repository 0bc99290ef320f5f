//! JSON API handler modules.

pub mod index;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;

use axum::Router;
use axum::routing::{get, post};

use sensorhub_app::ports::SensorRepository;

use crate::state::AppState;

/// Build the sensor sub-router.
pub fn routes<SR>() -> Router<AppState<SR>>
where
    SR: SensorRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/sensors", get(sensors::list::<SR>))
        .route("/sensors/{id}", get(sensors::get::<SR>))
        .route("/sensors/{id}/data", post(sensors::record_value::<SR>))
}
