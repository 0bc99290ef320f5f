//! Hardcoded demonstration sensors.

use sensorhub_domain::error::SensorHubError;
use sensorhub_domain::id::SensorId;
use sensorhub_domain::sensor::{Reading, Sensor, SensorKind};
use sensorhub_domain::time::{Timestamp, now};

struct SeedSensor {
    id: u32,
    name: &'static str,
    kind: SensorKind,
    location: &'static str,
    value: Reading,
    unit: &'static str,
}

const SEED: [SeedSensor; 5] = [
    SeedSensor {
        id: 1,
        name: "Temperature Sensor 1",
        kind: SensorKind::Temperature,
        location: "Building A",
        value: Reading::Float(22.5),
        unit: "\u{b0}C",
    },
    SeedSensor {
        id: 2,
        name: "Humidity Sensor 1",
        kind: SensorKind::Humidity,
        location: "Building A",
        value: Reading::Float(45.0),
        unit: "%",
    },
    SeedSensor {
        id: 3,
        name: "CO2 Sensor 1",
        kind: SensorKind::Co2,
        location: "Building B",
        value: Reading::Integer(415),
        unit: "ppm",
    },
    SeedSensor {
        id: 4,
        name: "Temperature Sensor 2",
        kind: SensorKind::Temperature,
        location: "Building B",
        value: Reading::Float(24.2),
        unit: "\u{b0}C",
    },
    SeedSensor {
        id: 5,
        name: "Light Sensor 1",
        kind: SensorKind::Light,
        location: "Building C",
        value: Reading::Integer(450),
        unit: "lux",
    },
];

/// Build the five sensors the API starts with, all stamped with the
/// current time.
///
/// # Errors
///
/// Returns [`SensorHubError::Validation`] only if the table above breaks a
/// domain invariant.
pub fn default_sensors() -> Result<Vec<Sensor>, SensorHubError> {
    seed_at(now())
}

fn seed_at(timestamp: Timestamp) -> Result<Vec<Sensor>, SensorHubError> {
    SEED.iter()
        .map(|seed| -> Result<Sensor, SensorHubError> {
            Sensor::builder(SensorId::new(seed.id)?, seed.kind)
                .name(seed.name)
                .location(seed.location)
                .value(seed.value.clone())
                .unit(seed.unit)
                .timestamp(timestamp)
                .build()
        })
        .collect()
}
