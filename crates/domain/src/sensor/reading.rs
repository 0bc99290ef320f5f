//! Sensor readings — the single mutable field of a sensor.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The latest value reported by a sensor.
///
/// Serialized untagged so integers stay integers (`415`), floats stay
/// floats (`22.5`) and text stays text on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Reading {
    /// Interpret an optional JSON value submitted by a client.
    ///
    /// A reading is present when it is neither absent nor `null`. Zero is
    /// a legitimate reading and is accepted. A blank string carries no
    /// information and is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingValue`] for absent, `null` or
    /// blank input, and [`ValidationError::UnsupportedValue`] for booleans,
    /// arrays and objects.
    pub fn from_json(value: Option<serde_json::Value>) -> Result<Self, ValidationError> {
        use serde_json::Value;

        match value {
            None | Some(Value::Null) => Err(ValidationError::MissingValue),
            Some(Value::Number(number)) => {
                if let Some(int) = number.as_i64() {
                    Ok(Self::Integer(int))
                } else if let Some(float) = number.as_f64() {
                    Ok(Self::Float(float))
                } else {
                    Err(ValidationError::UnsupportedValue)
                }
            }
            Some(Value::String(text)) if text.trim().is_empty() => {
                Err(ValidationError::MissingValue)
            }
            Some(Value::String(text)) => Ok(Self::Text(text)),
            Some(Value::Bool(_) | Value::Array(_) | Value::Object(_)) => {
                Err(ValidationError::UnsupportedValue)
            }
        }
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => value.fmt(f),
            Self::Float(value) => value.fmt(f),
            Self::Text(value) => f.write_str(value),
        }
    }
}
