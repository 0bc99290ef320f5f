//! Storage port — repository trait for sensor records.

use std::future::Future;

use sensorhub_domain::error::SensorHubError;
use sensorhub_domain::id::SensorId;
use sensorhub_domain::sensor::{Reading, Sensor};
use sensorhub_domain::time::Timestamp;

/// Repository holding the fixed set of [`Sensor`]s.
///
/// There is no create or delete: the set of sensors is decided when the
/// repository is built and only readings change afterwards.
pub trait SensorRepository {
    /// Return every sensor in registry order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Sensor>, SensorHubError>> + Send;

    /// Get a sensor by its identifier.
    fn get_by_id(
        &self,
        id: SensorId,
    ) -> impl Future<Output = Result<Option<Sensor>, SensorHubError>> + Send;

    /// Overwrite the reading of sensor `id` and return the updated record.
    ///
    /// Lookup and mutation must happen as one atomic step so concurrent
    /// writers to the same sensor never lose an update. Returns `Ok(None)`
    /// when no sensor has that id.
    fn record_reading(
        &self,
        id: SensorId,
        reading: Reading,
        at: Timestamp,
    ) -> impl Future<Output = Result<Option<Sensor>, SensorHubError>> + Send;
}
