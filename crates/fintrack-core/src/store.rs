//! Abstraction over the record store backing all services.

use fintrack_domain::{Category, Expense, Income, IncomeGoal, MonthWindow, Payment};
use uuid::Uuid;

use crate::CoreResult;

/// Read and write access to a user's financial records.
///
/// List methods return records in the store's native order, which services
/// treat as stable for tie-breaking in breakdowns. Implementations are
/// expected to serialize point writes per key (user id for goals and
/// payments, record id elsewhere); the service layer performs read-then-write
/// transitions without any locking of its own.
pub trait RecordStore: Send + Sync {
    // Categories
    fn insert_category(&self, category: Category) -> CoreResult<()>;
    fn category(&self, id: Uuid) -> CoreResult<Option<Category>>;
    fn categories_by_owner(&self, owner: Uuid) -> CoreResult<Vec<Category>>;
    fn delete_category(&self, id: Uuid) -> CoreResult<()>;

    // Expenses
    fn insert_expense(&self, expense: Expense) -> CoreResult<()>;
    fn expense(&self, id: Uuid) -> CoreResult<Option<Expense>>;
    fn expenses_by_owner(&self, owner: Uuid) -> CoreResult<Vec<Expense>>;
    fn expenses_in_window(&self, owner: Uuid, window: &MonthWindow) -> CoreResult<Vec<Expense>>;
    /// Returns `true` when at least one of the owner's expenses references
    /// the category. Used to guard category deletion.
    fn expense_references_category(&self, owner: Uuid, category_id: Uuid) -> CoreResult<bool>;
    fn delete_expense(&self, id: Uuid) -> CoreResult<()>;

    // Income
    fn insert_income(&self, income: Income) -> CoreResult<()>;
    fn income(&self, id: Uuid) -> CoreResult<Option<Income>>;
    fn income_by_owner(&self, owner: Uuid) -> CoreResult<Vec<Income>>;
    fn income_in_window(&self, owner: Uuid, window: &MonthWindow) -> CoreResult<Vec<Income>>;
    fn delete_income(&self, id: Uuid) -> CoreResult<()>;

    // Income goals (at most one per owner)
    fn income_goal(&self, owner: Uuid) -> CoreResult<Option<IncomeGoal>>;
    fn upsert_income_goal(&self, goal: IncomeGoal) -> CoreResult<()>;

    // Payments (at most one per owner, session id unique across users)
    fn payment_by_owner(&self, owner: Uuid) -> CoreResult<Option<Payment>>;
    fn payment_by_session(&self, session_id: &str) -> CoreResult<Option<Payment>>;
    fn upsert_payment(&self, payment: Payment) -> CoreResult<()>;
}
