//! Shared traits and primitive aliases for tracked records.

use uuid::Uuid;

/// Milliseconds since the Unix epoch. No timezone component is stored;
/// callers agree on a reference timezone for month boundaries.
pub type TimestampMs = i64;

/// Exposes a stable identifier for records kept in the store.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Associates a record with the user that exclusively owns it.
pub trait Owned {
    fn owner(&self) -> Uuid;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Provides the ledger date of a dated entry.
pub trait Dated {
    fn date(&self) -> TimestampMs;
}
