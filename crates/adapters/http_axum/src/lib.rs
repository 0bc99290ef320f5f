//! # sensorhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for the sensor registry
//!   (`/sensors`, `/sensors/{id}`, `/sensors/{id}/data`, `/health`, `/`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and domain errors into HTTP responses
//! - Log every request through `tower-http`'s trace layer and answer
//!   cross-origin requests from any origin
//!
//! ## Dependency rule
//! Depends on `sensorhub-app` (for port traits and services) and
//! `sensorhub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
