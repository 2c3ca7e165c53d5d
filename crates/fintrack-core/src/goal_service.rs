//! Income goal progress tracking.

use fintrack_domain::{IncomeGoal, MonthlySummary};

use crate::{CoreResult, RequestContext};

/// Compares aggregated income against the stored monthly target.
pub struct GoalService;

impl GoalService {
    /// Progress toward the goal as a percentage clamped to `[0, 100]`.
    ///
    /// No goal, or a non-positive target, reads as zero progress. Whether
    /// "no goal" and "goal met" are shown differently is a presentation
    /// concern, not decided here.
    pub fn progress_percent(total_income: f64, goal: Option<&IncomeGoal>) -> f64 {
        let target = match goal {
            Some(goal) if goal.target_amount > 0.0 => goal.target_amount,
            _ => return 0.0,
        };
        let ratio = (total_income / target).max(0.0);
        (ratio * 100.0).min(100.0)
    }

    /// Fetches the caller's stored goal and scores the summary against it.
    pub fn progress_for(ctx: &RequestContext<'_>, summary: &MonthlySummary) -> CoreResult<f64> {
        let goal = ctx.store().income_goal(ctx.user_id())?;
        Ok(Self::progress_percent(summary.total_income, goal.as_ref()))
    }
}
