//! Domain types for one-time purchase activation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Owned, TimestampMs};

/// Tracks a user's one-time purchase through pending and paid states.
///
/// At most one record exists per owner and the external session id is
/// unique across all payments once set. A paid record is terminal and is
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub owner: Uuid,
    pub session_id: String,
    pub amount: f64,
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<TimestampMs>,
}

impl Payment {
    /// Creates a fresh pending record for a newly initiated checkout.
    pub fn pending(owner: Uuid, session_id: impl Into<String>, amount: f64) -> Self {
        Self {
            owner,
            session_id: session_id.into(),
            amount,
            is_paid: false,
            paid_at: None,
        }
    }
}

impl Owned for Payment {
    fn owner(&self) -> Uuid {
        self.owner
    }
}
