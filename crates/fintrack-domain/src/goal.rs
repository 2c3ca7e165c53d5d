//! Domain types for income goals.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Owned;

/// A user's income target for a period. At most one goal exists per owner;
/// setting a new target overwrites the stored one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeGoal {
    pub owner: Uuid,
    pub target_amount: f64,
    pub period: GoalPeriod,
}

impl IncomeGoal {
    pub fn monthly(owner: Uuid, target_amount: f64) -> Self {
        Self {
            owner,
            target_amount,
            period: GoalPeriod::Monthly,
        }
    }
}

impl Owned for IncomeGoal {
    fn owner(&self) -> Uuid {
        self.owner
    }
}

/// Supported goal cadences. Only monthly goals exist today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Monthly,
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalPeriod::Monthly => f.write_str("monthly"),
        }
    }
}
