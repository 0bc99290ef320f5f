//! Sensor — the only record sensorhub keeps.
//!
//! A sensor has a fixed identity (`id`, `name`, `type`, `location`, `unit`)
//! and a single mutable reading stamped with the time it was recorded.
//! Recording a new reading overwrites the previous one; no history is kept.

mod kind;
mod reading;

pub use kind::SensorKind;
pub use reading::Reading;

use serde::Serialize;

use crate::error::{SensorHubError, ValidationError};
use crate::id::SensorId;
use crate::time::{self, Timestamp};

/// An environmental sensor and its latest reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sensor {
    pub id: SensorId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SensorKind,
    pub location: String,
    pub value: Reading,
    pub unit: String,
    pub timestamp: Timestamp,
}

impl Sensor {
    /// Create a builder for a sensor with the given identity and category.
    #[must_use]
    pub fn builder(id: SensorId, kind: SensorKind) -> SensorBuilder {
        SensorBuilder::new(id, kind)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), SensorHubError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Overwrite the reading and move the timestamp forward.
    ///
    /// The stored timestamp is always strictly later than the one it
    /// replaces, even if `at` is not.
    pub fn record_reading(&mut self, reading: Reading, at: Timestamp) {
        self.value = reading;
        self.timestamp = time::strictly_after(self.timestamp, at);
    }
}

/// Step-by-step builder for [`Sensor`].
#[derive(Debug)]
pub struct SensorBuilder {
    id: SensorId,
    kind: SensorKind,
    name: Option<String>,
    location: Option<String>,
    value: Option<Reading>,
    unit: Option<String>,
    timestamp: Option<Timestamp>,
}

impl SensorBuilder {
    fn new(id: SensorId, kind: SensorKind) -> Self {
        Self {
            id,
            kind,
            name: None,
            location: None,
            value: None,
            unit: None,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<Reading>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the reading time. Defaults to [`time::now`] when omitted.
    #[must_use]
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Consume the builder, validate, and return a [`Sensor`].
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Validation`] if the name is missing or
    /// blank, or if no initial reading was supplied.
    pub fn build(self) -> Result<Sensor, SensorHubError> {
        let value = self.value.ok_or(ValidationError::MissingValue)?;
        let sensor = Sensor {
            id: self.id,
            name: self.name.unwrap_or_default(),
            kind: self.kind,
            location: self.location.unwrap_or_default(),
            value,
            unit: self.unit.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_else(time::now),
        };
        sensor.validate()?;
        Ok(sensor)
    }
}
