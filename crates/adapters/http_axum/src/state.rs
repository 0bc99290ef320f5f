//! Shared application state for axum handlers.

use std::sync::Arc;

use sensorhub_app::ports::SensorRepository;
use sensorhub_app::services::sensor_service::SensorService;

/// Application state shared across all axum handlers.
///
/// Generic over the sensor repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<SR> {
    /// Sensor registry service.
    pub sensor_service: Arc<SensorService<SR>>,
}

impl<SR> Clone for AppState<SR> {
    fn clone(&self) -> Self {
        Self {
            sensor_service: Arc::clone(&self.sensor_service),
        }
    }
}

impl<SR> AppState<SR>
where
    SR: SensorRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(sensor_service: SensorService<SR>) -> Self {
        Self {
            sensor_service: Arc::new(sensor_service),
        }
    }
}
