//! Validated CRUD operations for categories, expenses, income, and goals.

use fintrack_domain::{Category, Expense, Income, IncomeGoal, TimestampMs};
use uuid::Uuid;

use crate::{CoreError, CoreResult, RequestContext};

/// Starter categories seeded for brand-new users.
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Groceries", "\u{1F6D2}"),
    ("Utilities", "\u{1F4A1}"),
    ("Rent/Mortgage", "\u{1F3E0}"),
    ("Transportation", "\u{1F697}"),
    ("Dining Out", "\u{1F37D}\u{FE0F}"),
    ("Entertainment", "\u{1F3AC}"),
    ("Shopping", "\u{1F6CD}\u{FE0F}"),
    ("Health", "\u{2764}\u{FE0F}"),
    ("Insurance", "\u{1F6E1}\u{FE0F}"),
    ("Debt Payment", "\u{1F4B3}"),
    ("Personal Care", "\u{1F9F4}"),
    ("Gifts/Donations", "\u{1F381}"),
    ("Other", "\u{2753}"),
];

/// An expense joined with the display data of its category.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseView {
    pub expense: Expense,
    pub category_name: String,
    pub category_icon: Option<String>,
}

/// Pass-through record operations with ownership and input validation.
///
/// Every mutation validates before touching the store and is all-or-nothing;
/// records belonging to other users are reported as not found rather than
/// revealed.
pub struct LedgerService;

impl LedgerService {
    /// Adds a category and returns its id.
    pub fn add_category(
        ctx: &RequestContext<'_>,
        name: &str,
        icon: Option<String>,
    ) -> CoreResult<Uuid> {
        if name.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "category name must not be empty".into(),
            ));
        }
        let category = Category::new(ctx.user_id(), name, icon);
        let id = category.id;
        ctx.store().insert_category(category)?;
        Ok(id)
    }

    /// Seeds the starter category set for a user with no categories yet.
    /// A user who already has any category is left untouched.
    pub fn add_default_categories(ctx: &RequestContext<'_>) -> CoreResult<()> {
        if !ctx.store().categories_by_owner(ctx.user_id())?.is_empty() {
            tracing::debug!(user = %ctx.user_id(), "categories exist, skipping default setup");
            return Ok(());
        }
        for (name, icon) in DEFAULT_CATEGORIES {
            let category = Category::new(ctx.user_id(), *name, Some((*icon).to_string()));
            ctx.store().insert_category(category)?;
        }
        Ok(())
    }

    pub fn list_categories(ctx: &RequestContext<'_>) -> CoreResult<Vec<Category>> {
        ctx.store().categories_by_owner(ctx.user_id())
    }

    /// Deletes a category, refusing while any owned expense references it.
    pub fn delete_category(ctx: &RequestContext<'_>, id: Uuid) -> CoreResult<()> {
        let category = ctx
            .store()
            .category(id)?
            .filter(|category| category.owner == ctx.user_id())
            .ok_or_else(|| CoreError::NotFound(format!("category {}", id)))?;
        if ctx
            .store()
            .expense_references_category(ctx.user_id(), category.id)?
        {
            return Err(CoreError::Conflict(
                "cannot delete a category with associated expenses".into(),
            ));
        }
        ctx.store().delete_category(id)
    }

    /// Records an expense against one of the caller's categories.
    pub fn add_expense(
        ctx: &RequestContext<'_>,
        amount: f64,
        category_id: Uuid,
        date: TimestampMs,
        description: Option<String>,
        is_recurring: bool,
    ) -> CoreResult<Uuid> {
        if amount <= 0.0 {
            return Err(CoreError::InvalidArgument(
                "expense amount must be positive".into(),
            ));
        }
        let owned = ctx
            .store()
            .category(category_id)?
            .is_some_and(|category| category.owner == ctx.user_id());
        if !owned {
            return Err(CoreError::NotFound(format!("category {}", category_id)));
        }
        let expense = Expense::new(
            ctx.user_id(),
            amount,
            category_id,
            date,
            description,
            is_recurring,
        );
        let id = expense.id;
        ctx.store().insert_expense(expense)?;
        Ok(id)
    }

    /// Lists the caller's expenses newest first, each joined with its
    /// category's display data. Unresolvable categories surface as "Unknown".
    pub fn list_expenses(ctx: &RequestContext<'_>) -> CoreResult<Vec<ExpenseView>> {
        let categories = ctx.store().categories_by_owner(ctx.user_id())?;
        let mut expenses = ctx.store().expenses_by_owner(ctx.user_id())?;
        expenses.sort_by_key(|expense| std::cmp::Reverse(expense.date));
        Ok(expenses
            .into_iter()
            .map(|expense| {
                let category = categories
                    .iter()
                    .find(|category| category.id == expense.category_id);
                ExpenseView {
                    category_name: category
                        .map(|category| category.name.clone())
                        .unwrap_or_else(|| crate::summary_service::UNKNOWN_CATEGORY.into()),
                    category_icon: category.and_then(|category| category.icon.clone()),
                    expense,
                }
            })
            .collect())
    }

    pub fn delete_expense(ctx: &RequestContext<'_>, id: Uuid) -> CoreResult<()> {
        let owned = ctx
            .store()
            .expense(id)?
            .is_some_and(|expense| expense.owner == ctx.user_id());
        if !owned {
            return Err(CoreError::NotFound(format!("expense {}", id)));
        }
        ctx.store().delete_expense(id)
    }

    /// Records an income entry.
    pub fn add_income(
        ctx: &RequestContext<'_>,
        amount: f64,
        source: &str,
        date: TimestampMs,
        description: Option<String>,
    ) -> CoreResult<Uuid> {
        if amount <= 0.0 {
            return Err(CoreError::InvalidArgument(
                "income amount must be positive".into(),
            ));
        }
        if source.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "income source must not be empty".into(),
            ));
        }
        let income = Income::new(ctx.user_id(), amount, source, date, description);
        let id = income.id;
        ctx.store().insert_income(income)?;
        Ok(id)
    }

    /// Lists the caller's income entries newest first.
    pub fn list_income(ctx: &RequestContext<'_>) -> CoreResult<Vec<Income>> {
        let mut income = ctx.store().income_by_owner(ctx.user_id())?;
        income.sort_by_key(|entry| std::cmp::Reverse(entry.date));
        Ok(income)
    }

    pub fn delete_income(ctx: &RequestContext<'_>, id: Uuid) -> CoreResult<()> {
        let owned = ctx
            .store()
            .income(id)?
            .is_some_and(|income| income.owner == ctx.user_id());
        if !owned {
            return Err(CoreError::NotFound(format!("income {}", id)));
        }
        ctx.store().delete_income(id)
    }

    /// Sets the caller's monthly income goal, overwriting any existing one.
    pub fn set_income_goal(ctx: &RequestContext<'_>, target_amount: f64) -> CoreResult<()> {
        if target_amount <= 0.0 {
            return Err(CoreError::InvalidArgument(
                "goal target must be positive".into(),
            ));
        }
        ctx.store()
            .upsert_income_goal(IncomeGoal::monthly(ctx.user_id(), target_amount))
    }

    pub fn income_goal(ctx: &RequestContext<'_>) -> CoreResult<Option<IncomeGoal>> {
        ctx.store().income_goal(ctx.user_id())
    }
}
