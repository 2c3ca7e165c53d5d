//! Domain types representing income entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Amounted, Dated, Identifiable, Owned, TimestampMs};

/// A single dated income entry labelled with a free-text source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub owner: Uuid,
    pub amount: f64,
    pub source: String,
    pub date: TimestampMs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Income {
    pub fn new(
        owner: Uuid,
        amount: f64,
        source: impl Into<String>,
        date: TimestampMs,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            amount,
            source: source.into(),
            date,
            description,
        }
    }
}

impl Identifiable for Income {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for Income {
    fn owner(&self) -> Uuid {
        self.owner
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for Income {
    fn date(&self) -> TimestampMs {
        self.date
    }
}
