//! Rule-driven savings tips.
//!
//! Each rule independently inspects a [`MonthlySummary`] and optionally emits
//! one tip. Rules run in a fixed priority order; the result is truncated to
//! [`MAX_TIPS`] without reordering, so the unconditional fillers only show
//! when fewer data-driven tips fired.

use fintrack_domain::MonthlySummary;

/// Upper bound on tips returned per summary.
pub const MAX_TIPS: usize = 3;

/// Top category counts as dominant above this share of income.
const DOMINANCE_RATIO: f64 = 0.3;
/// Absolute spend considered significant when income gives no baseline.
const SIGNIFICANT_SPEND: f64 = 500.0;
/// Dining tips fire strictly above this amount.
const DINING_THRESHOLD: f64 = 150.0;

type TipRule = fn(&MonthlySummary) -> Option<String>;

/// Data-driven rules in evaluation order.
const RULES: &[(&str, TipRule)] = &[
    ("top-category-dominance", top_category_tip),
    ("income-vs-expenses", balance_tip),
    ("dining-check", dining_tip),
];

/// Generic tips appended after the data-driven rules.
const FILLER_TIPS: &[&str] = &[
    "Review recurring subscriptions. Are there any you no longer need?",
    "Try the '50/30/20' budget rule: 50% Needs, 30% Wants, 20% Savings.",
];

const KEEP_TRACKING_TIP: &str = "Keep tracking your finances to get personalized tips!";

/// Produces a short, ordered list of natural-language tips for a summary.
pub struct InsightService;

impl InsightService {
    pub fn generate(summary: &MonthlySummary) -> Vec<String> {
        let mut tips = Vec::new();
        for &(name, rule) in RULES {
            if let Some(tip) = rule(summary) {
                tracing::debug!(rule = name, "tip rule fired");
                tips.push(tip);
            }
        }
        for filler in FILLER_TIPS {
            tips.push((*filler).to_string());
        }
        // Unreachable while fillers are unconditional; kept so an empty rule
        // table still yields something useful.
        if tips.is_empty() {
            tips.push(KEEP_TRACKING_TIP.to_string());
        }
        tips.truncate(MAX_TIPS);
        tips
    }
}

fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Rule 1: the largest expense category, judged against income when income
/// exists, or against an absolute threshold otherwise. First matching branch
/// wins; at most one tip.
fn top_category_tip(summary: &MonthlySummary) -> Option<String> {
    let top = summary.expenses_by_category.first()?;
    if summary.total_income > 0.0 && top.value > summary.total_income * DOMINANCE_RATIO {
        Some(format!(
            "Your spending on \"{}\" ({}) seems high this month compared to your income. Look for ways to cut back.",
            top.name,
            format_amount(top.value)
        ))
    } else if summary.total_income == 0.0 && top.value > 0.0 {
        Some(format!(
            "You had expenses in \"{}\" but no income logged this month. Ensure income is tracked.",
            top.name
        ))
    } else if top.value > SIGNIFICANT_SPEND {
        Some(format!(
            "Spending on \"{}\" ({}) is significant. Review these expenses.",
            top.name,
            format_amount(top.value)
        ))
    } else {
        None
    }
}

/// Rule 2: overspend, surplus, or missing income. Mutually exclusive
/// branches evaluated in this order.
fn balance_tip(summary: &MonthlySummary) -> Option<String> {
    if summary.total_expenses > summary.total_income && summary.total_income > 0.0 {
        Some(format!(
            "You spent {} more than you earned this month. Review your budget.",
            format_amount(summary.total_expenses - summary.total_income)
        ))
    } else if summary.total_income > summary.total_expenses {
        Some(format!(
            "Great job saving {} this month! Consider allocating it towards goals.",
            format_amount(summary.total_income - summary.total_expenses)
        ))
    } else if summary.total_income == 0.0 && summary.total_expenses > 0.0 {
        Some(
            "You have expenses logged but no income this month. Make sure to log your income sources."
                .to_string(),
        )
    } else {
        None
    }
}

/// Rule 3: case-insensitive scan for a "dining" category above the
/// threshold.
fn dining_tip(summary: &MonthlySummary) -> Option<String> {
    let dining = summary
        .expenses_by_category
        .iter()
        .find(|entry| entry.name.to_lowercase().contains("dining"))?;
    if dining.value > DINING_THRESHOLD {
        Some(format!(
            "Dining out cost {} this month. Cooking at home could offer savings.",
            format_amount(dining.value)
        ))
    } else {
        None
    }
}
