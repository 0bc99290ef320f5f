//! Common error types used across the workspace.
//!
//! Each failure family is its own typed error; [`SensorHubError`] unifies
//! them with `#[from]` conversions. Display strings are the messages the
//! API returns to clients, so they are written in French.

use crate::id::SensorId;

/// Top-level error returned by every fallible operation in sensorhub.
#[derive(Debug, thiserror::Error)]
pub enum SensorHubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Input that violates a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The update carried no value, a `null`, or a blank string.
    #[error("La valeur est requise")]
    MissingValue,

    /// The update carried a boolean, an array or an object.
    #[error("La valeur doit être un nombre ou une chaîne de caractères")]
    UnsupportedValue,

    /// A sensor identifier that is not a positive integer.
    #[error("Identifiant de capteur invalide")]
    InvalidSensorId { raw: String },

    /// A sensor was declared without a name.
    #[error("Le nom du capteur est requis")]
    EmptyName,

    /// Two sensors were declared with the same identifier.
    #[error("Identifiant de capteur dupliqué : {0}")]
    DuplicateSensorId(SensorId),
}

/// A lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Capteur non trouvé")]
pub struct NotFoundError {
    pub id: SensorId,
}

/// The backing store failed independently of the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage failure: {reason}")]
pub struct StorageError {
    pub reason: String,
}
