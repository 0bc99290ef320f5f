//! Time and timestamp helpers.

use chrono::{DateTime, TimeDelta, Utc};

/// UTC timestamp carried by every sensor reading.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Return `candidate` if it is strictly later than `previous`, otherwise
/// `previous` plus one microsecond.
///
/// Coarse or stepped-back system clocks would otherwise let an update
/// carry the same timestamp as the reading it replaced.
#[must_use]
pub fn strictly_after(previous: Timestamp, candidate: Timestamp) -> Timestamp {
    if candidate > previous {
        candidate
    } else {
        previous + TimeDelta::microseconds(1)
    }
}
