//! # sensorhub-domain
//!
//! Pure domain model for the sensorhub supervision API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Sensors** (identity, category, location, unit, latest reading)
//! - Define **Readings** (the numeric or textual value a sensor reports)
//! - Contain all invariant enforcement, including what counts as a
//!   present reading
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod sensor;
