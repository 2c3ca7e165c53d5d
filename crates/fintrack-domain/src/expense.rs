//! Domain types representing expense entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Amounted, Dated, Identifiable, Owned, TimestampMs};

/// A single dated expense tagged with one of the owner's categories.
///
/// Expenses are created and deleted directly by the user and never mutated
/// in place. The `is_recurring` flag is stored but never expanded into
/// future entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub owner: Uuid,
    pub amount: f64,
    pub category_id: Uuid,
    pub date: TimestampMs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_recurring: bool,
}

impl Expense {
    pub fn new(
        owner: Uuid,
        amount: f64,
        category_id: Uuid,
        date: TimestampMs,
        description: Option<String>,
        is_recurring: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            amount,
            category_id,
            date,
            description,
            is_recurring,
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for Expense {
    fn owner(&self) -> Uuid {
        self.owner
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for Expense {
    fn date(&self) -> TimestampMs {
        self.date
    }
}
