//! Sensor service — use-cases for reading sensors and recording values.

use sensorhub_domain::error::{NotFoundError, SensorHubError};
use sensorhub_domain::id::SensorId;
use sensorhub_domain::sensor::{Reading, Sensor};
use sensorhub_domain::time::now;

use crate::ports::SensorRepository;

/// Application service for the sensor registry.
pub struct SensorService<R> {
    repo: R,
}

impl<R: SensorRepository> SensorService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all sensors in registry order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sensors(&self) -> Result<Vec<Sensor>, SensorHubError> {
        self.repo.get_all().await
    }

    /// Look up a sensor by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::NotFound`] when no sensor with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_sensor(&self, id: SensorId) -> Result<Sensor, SensorHubError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// Record a new value submitted for sensor `id`.
    ///
    /// An unknown sensor is reported before the value is inspected, so a
    /// bad value sent to a missing sensor yields "not found".
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::NotFound`] if the sensor does not exist,
    /// [`SensorHubError::Validation`] if `value` is absent or of an
    /// unsupported shape, or a storage error from the repository.
    pub async fn record_value(
        &self,
        id: SensorId,
        value: Option<serde_json::Value>,
    ) -> Result<Sensor, SensorHubError> {
        self.get_sensor(id).await?;
        let reading = Reading::from_json(value)?;

        let updated = self
            .repo
            .record_reading(id, reading, now())
            .await?
            .ok_or(NotFoundError { id })?;

        tracing::info!(sensor_id = %id, value = %updated.value, "reading recorded");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorhub_domain::error::{StorageError, ValidationError};
    use sensorhub_domain::sensor::SensorKind;
    use sensorhub_domain::time::Timestamp;
    use serde_json::json;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemorySensorRepo {
        store: Mutex<Vec<Sensor>>,
    }

    impl InMemorySensorRepo {
        fn with(sensors: Vec<Sensor>) -> Self {
            Self {
                store: Mutex::new(sensors),
            }
        }
    }

    impl SensorRepository for InMemorySensorRepo {
        fn get_all(&self) -> impl Future<Output = Result<Vec<Sensor>, SensorHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.clone();
            async { Ok(result) }
        }

        fn get_by_id(
            &self,
            id: SensorId,
        ) -> impl Future<Output = Result<Option<Sensor>, SensorHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.iter().find(|s| s.id == id).cloned();
            async { Ok(result) }
        }

        fn record_reading(
            &self,
            id: SensorId,
            reading: Reading,
            at: Timestamp,
        ) -> impl Future<Output = Result<Option<Sensor>, SensorHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store.iter_mut().find(|s| s.id == id).map(|sensor| {
                sensor.record_reading(reading, at);
                sensor.clone()
            });
            async { Ok(result) }
        }
    }

    struct FailingRepo;

    impl SensorRepository for FailingRepo {
        async fn get_all(&self) -> Result<Vec<Sensor>, SensorHubError> {
            Err(StorageError {
                reason: "offline".to_string(),
            }
            .into())
        }

        async fn get_by_id(&self, _id: SensorId) -> Result<Option<Sensor>, SensorHubError> {
            Err(StorageError {
                reason: "offline".to_string(),
            }
            .into())
        }

        async fn record_reading(
            &self,
            _id: SensorId,
            _reading: Reading,
            _at: Timestamp,
        ) -> Result<Option<Sensor>, SensorHubError> {
            Err(StorageError {
                reason: "offline".to_string(),
            }
            .into())
        }
    }

    fn id(value: u32) -> SensorId {
        SensorId::new(value).unwrap()
    }

    fn make_service() -> SensorService<InMemorySensorRepo> {
        let thermometer = Sensor::builder(id(1), SensorKind::Temperature)
            .name("Temperature Sensor 1")
            .location("Building A")
            .value(22.5)
            .unit("\u{b0}C")
            .build()
            .unwrap();
        let co2 = Sensor::builder(id(3), SensorKind::Co2)
            .name("CO2 Sensor 1")
            .location("Building B")
            .value(415_i64)
            .unit("ppm")
            .build()
            .unwrap();
        SensorService::new(InMemorySensorRepo::with(vec![thermometer, co2]))
    }

    #[tokio::test]
    async fn should_list_sensors_in_registry_order() {
        let svc = make_service();
        let all = svc.list_sensors().await.unwrap();
        let ids: Vec<u32> = all.iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn should_get_sensor_by_id() {
        let svc = make_service();
        let sensor = svc.get_sensor(id(3)).await.unwrap();
        assert_eq!(sensor.name, "CO2 Sensor 1");
    }

    #[tokio::test]
    async fn should_return_not_found_when_sensor_missing() {
        let svc = make_service();
        let result = svc.get_sensor(id(999)).await;
        assert!(matches!(
            result,
            Err(SensorHubError::NotFound(NotFoundError { id })) if id.get() == 999
        ));
    }

    #[tokio::test]
    async fn should_record_value_and_advance_timestamp() {
        let svc = make_service();
        let before = svc.get_sensor(id(1)).await.unwrap();

        let updated = svc.record_value(id(1), Some(json!(30))).await.unwrap();
        assert_eq!(updated.value, Reading::Integer(30));
        assert!(updated.timestamp > before.timestamp);

        let fetched = svc.get_sensor(id(1)).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn should_accept_zero_value() {
        let svc = make_service();
        let updated = svc.record_value(id(1), Some(json!(0))).await.unwrap();
        assert_eq!(updated.value, Reading::Integer(0));
    }

    #[tokio::test]
    async fn should_reject_missing_value() {
        let svc = make_service();
        let result = svc.record_value(id(1), None).await;
        assert!(matches!(
            result,
            Err(SensorHubError::Validation(ValidationError::MissingValue))
        ));

        let untouched = svc.get_sensor(id(1)).await.unwrap();
        assert_eq!(untouched.value, Reading::Float(22.5));
    }

    #[tokio::test]
    async fn should_report_not_found_before_validating_value() {
        let svc = make_service();
        let result = svc.record_value(id(999), None).await;
        assert!(matches!(result, Err(SensorHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_propagate_storage_errors() {
        let svc = SensorService::new(FailingRepo);
        assert!(matches!(
            svc.list_sensors().await,
            Err(SensorHubError::Storage(_))
        ));
        assert!(matches!(
            svc.record_value(id(1), Some(json!(1))).await,
            Err(SensorHubError::Storage(_))
        ));
    }
}
