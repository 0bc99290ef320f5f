//! # sensorhub-adapter-storage-memory
//!
//! Process-lifetime storage for the sensor registry.
//!
//! ## Responsibilities
//! - Implement the `SensorRepository` port defined in `sensorhub-app::ports::storage`
//! - Provide the five demonstration sensors the API starts with
//! - Serialize writers so a reading update is one atomic lookup-and-mutate
//!
//! ## Provided sensors
//!
//! | Id | Name | Type | Location | Initial value |
//! |----|------|------|----------|---------------|
//! | 1 | Temperature Sensor 1 | `temperature` | Building A | 22.5 °C |
//! | 2 | Humidity Sensor 1 | `humidity` | Building A | 45.0 % |
//! | 3 | CO2 Sensor 1 | `co2` | Building B | 415 ppm |
//! | 4 | Temperature Sensor 2 | `temperature` | Building B | 24.2 °C |
//! | 5 | Light Sensor 1 | `light` | Building C | 450 lux |
//!
//! Nothing is persisted: every process starts from the table above.
//!
//! ## Dependency rule
//! Depends on `sensorhub-app` (for port traits) and `sensorhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod seed;
mod sensor_repo;

pub use seed::default_sensors;
pub use sensor_repo::InMemorySensorRepository;
