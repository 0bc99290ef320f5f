//! [`SensorRepository`] backed by a lock-guarded vector.

use std::collections::HashSet;

use tokio::sync::RwLock;

use sensorhub_app::ports::SensorRepository;
use sensorhub_domain::error::{SensorHubError, ValidationError};
use sensorhub_domain::id::SensorId;
use sensorhub_domain::sensor::{Reading, Sensor};
use sensorhub_domain::time::Timestamp;

use crate::seed::default_sensors;

/// In-memory sensor registry.
///
/// Readers share the lock; [`record_reading`](SensorRepository::record_reading)
/// holds the write lock across lookup and mutation so concurrent updates to
/// the same sensor are applied one after the other.
#[derive(Debug)]
pub struct InMemorySensorRepository {
    sensors: RwLock<Vec<Sensor>>,
}

impl InMemorySensorRepository {
    /// Build a registry holding `sensors` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateSensorId`] if two sensors share
    /// an id, or any invariant violation reported by [`Sensor::validate`].
    pub fn new(sensors: Vec<Sensor>) -> Result<Self, SensorHubError> {
        let mut seen = HashSet::with_capacity(sensors.len());
        for sensor in &sensors {
            sensor.validate()?;
            if !seen.insert(sensor.id) {
                return Err(ValidationError::DuplicateSensorId(sensor.id).into());
            }
        }
        Ok(Self {
            sensors: RwLock::new(sensors),
        })
    }

    /// Build a registry preloaded with [`default_sensors`].
    ///
    /// # Errors
    ///
    /// Propagates any error from building the default sensors.
    pub fn seeded() -> Result<Self, SensorHubError> {
        let repo = Self::new(default_sensors()?)?;
        tracing::debug!("sensor registry seeded with default sensors");
        Ok(repo)
    }
}

impl SensorRepository for InMemorySensorRepository {
    async fn get_all(&self) -> Result<Vec<Sensor>, SensorHubError> {
        Ok(self.sensors.read().await.clone())
    }

    async fn get_by_id(&self, id: SensorId) -> Result<Option<Sensor>, SensorHubError> {
        let sensors = self.sensors.read().await;
        Ok(sensors.iter().find(|sensor| sensor.id == id).cloned())
    }

    async fn record_reading(
        &self,
        id: SensorId,
        reading: Reading,
        at: Timestamp,
    ) -> Result<Option<Sensor>, SensorHubError> {
        let mut sensors = self.sensors.write().await;
        Ok(sensors
            .iter_mut()
            .find(|sensor| sensor.id == id)
            .map(|sensor| {
                sensor.record_reading(reading, at);
                sensor.clone()
            }))
    }
}
