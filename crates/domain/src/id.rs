//! Typed sensor identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a [`Sensor`](crate::sensor::Sensor).
///
/// Always a positive integer. Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SensorId(u32);

impl SensorId {
    /// Wrap a raw value, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSensorId`] when `value` is `0`.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::InvalidSensorId {
                raw: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Access the inner integer.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SensorId {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SensorId> for u32 {
    fn from(id: SensorId) -> Self {
        id.0
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SensorId {
    type Err = ValidationError;

    /// Parse a path segment. Only plain ASCII digits are accepted, so
    /// `"+1"`, `" 1"` and `"1abc"` are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidSensorId { raw: s.to_string() };
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u32 = s.parse().map_err(|_| invalid())?;
        Self::new(value).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_positive_integer() {
        let id: SensorId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn should_reject_zero() {
        assert!(matches!(
            SensorId::from_str("0"),
            Err(ValidationError::InvalidSensorId { .. })
        ));
        assert!(SensorId::new(0).is_err());
    }

    #[test]
    fn should_reject_non_numeric_input() {
        for raw in ["abc", "1abc", "-1", "+1", " 1", "", "1.5"] {
            let result = SensorId::from_str(raw);
            assert_eq!(
                result,
                Err(ValidationError::InvalidSensorId {
                    raw: raw.to_string()
                }),
                "input {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn should_reject_out_of_range_input() {
        assert!(SensorId::from_str("99999999999").is_err());
    }

    #[test]
    fn should_serialize_as_bare_number() {
        let id = SensorId::new(3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }

    #[test]
    fn should_reject_zero_when_deserializing() {
        let result: Result<SensorId, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
