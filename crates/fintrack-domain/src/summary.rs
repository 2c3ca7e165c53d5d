//! Derived monthly summary structures.
//!
//! A summary is a pure function of one user's expense, income, and category
//! records for a single month window. It is recomputed on every request and
//! never persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One category's summed spending inside a month window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBreakdown {
    pub category_id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub value: f64,
}

/// One income source's summed earnings inside a month window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceBreakdown {
    pub name: String,
    pub value: f64,
}

/// Aggregated view of a user's ledger for one calendar month.
///
/// Breakdowns are ordered by value descending, stable with respect to first
/// occurrence in the store's return order, and their values sum exactly to
/// the corresponding totals. `net_worth` is signed and may be negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub total_expenses: f64,
    pub total_income: f64,
    pub net_worth: f64,
    pub expenses_by_category: Vec<CategoryBreakdown>,
    pub income_by_source: Vec<SourceBreakdown>,
}

impl MonthlySummary {
    /// An all-zero summary for a month with no recorded activity.
    pub fn empty() -> Self {
        Self {
            total_expenses: 0.0,
            total_income: 0.0,
            net_worth: 0.0,
            expenses_by_category: Vec::new(),
            income_by_source: Vec::new(),
        }
    }
}
