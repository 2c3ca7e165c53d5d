//! Monthly ledger aggregation.

use std::cmp::Ordering;

use fintrack_domain::{
    Category, CategoryBreakdown, Expense, Income, MonthWindow, MonthlySummary, SourceBreakdown,
};

use crate::{CoreResult, RequestContext};

/// Display name substituted when an expense references a category that can
/// no longer be resolved. Display-only degradation; totals stay correct.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Turns one month of raw records into totals and ranked breakdowns.
///
/// Aggregation accumulates in the store's return order so identical input
/// always reproduces identical floating-point results, and breakdown values
/// sum exactly to the matching totals.
pub struct SummaryService;

impl SummaryService {
    /// Computes the caller's summary for a zero-based month and year.
    ///
    /// The three reads (windowed expenses, windowed income, full category
    /// set) are independent; the combination is pure and never fails once
    /// the window resolves.
    pub fn monthly_summary(
        ctx: &RequestContext<'_>,
        month: u32,
        year: i32,
    ) -> CoreResult<MonthlySummary> {
        let window = MonthWindow::resolve(month, year)?;
        let owner = ctx.user_id();
        let expenses = ctx.store().expenses_in_window(owner, &window)?;
        let income = ctx.store().income_in_window(owner, &window)?;
        let categories = ctx.store().categories_by_owner(owner)?;
        tracing::debug!(
            user = %owner,
            month,
            year,
            expenses = expenses.len(),
            income = income.len(),
            "computing monthly summary"
        );
        Ok(Self::aggregate(&expenses, &income, &categories))
    }

    /// Pure aggregation over pre-fetched record sets.
    ///
    /// Totals are the sums of the grouped values, so each breakdown sums to
    /// its total exactly rather than merely up to float reordering.
    pub fn aggregate(
        expenses: &[Expense],
        income: &[Income],
        categories: &[Category],
    ) -> MonthlySummary {
        // Group in first-occurrence order; the later sort is stable, so ties
        // keep this order.
        let mut expense_groups: Vec<(uuid::Uuid, f64)> = Vec::new();
        for expense in expenses {
            match expense_groups
                .iter_mut()
                .find(|(id, _)| *id == expense.category_id)
            {
                Some((_, value)) => *value += expense.amount,
                None => expense_groups.push((expense.category_id, expense.amount)),
            }
        }
        let total_expenses: f64 = expense_groups.iter().map(|(_, value)| value).sum();
        let mut expenses_by_category: Vec<CategoryBreakdown> = expense_groups
            .into_iter()
            .map(|(category_id, value)| {
                match categories.iter().find(|category| category.id == category_id) {
                    Some(category) => CategoryBreakdown {
                        category_id,
                        name: category.name.clone(),
                        icon: category.icon.clone(),
                        value,
                    },
                    None => {
                        tracing::warn!(%category_id, "expense references unresolvable category");
                        CategoryBreakdown {
                            category_id,
                            name: UNKNOWN_CATEGORY.into(),
                            icon: None,
                            value,
                        }
                    }
                }
            })
            .collect();
        expenses_by_category.sort_by(|a, b| descending(a.value, b.value));

        let mut source_groups: Vec<SourceBreakdown> = Vec::new();
        for entry in income {
            match source_groups
                .iter_mut()
                .find(|group| group.name == entry.source)
            {
                Some(group) => group.value += entry.amount,
                None => source_groups.push(SourceBreakdown {
                    name: entry.source.clone(),
                    value: entry.amount,
                }),
            }
        }
        let total_income: f64 = source_groups.iter().map(|group| group.value).sum();
        source_groups.sort_by(|a, b| descending(a.value, b.value));

        MonthlySummary {
            total_expenses,
            total_income,
            net_worth: total_income - total_expenses,
            expenses_by_category,
            income_by_source: source_groups,
        }
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
