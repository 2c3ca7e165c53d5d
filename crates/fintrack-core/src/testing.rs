//! In-memory fixtures shared by the unit tests in this crate.

use std::sync::Mutex;

use fintrack_domain::{Category, Expense, Income, IncomeGoal, MonthWindow, Payment, TimestampMs};
use uuid::Uuid;

use crate::{Clock, CoreError, CoreResult, RecordStore};

/// Minimal vector-backed store. Lists return insertion order, matching the
/// "native return order" contract services rely on.
#[derive(Default)]
pub(crate) struct MemoryStore {
    categories: Mutex<Vec<Category>>,
    expenses: Mutex<Vec<Expense>>,
    income: Mutex<Vec<Income>>,
    goals: Mutex<Vec<IncomeGoal>>,
    payments: Mutex<Vec<Payment>>,
}

fn poisoned() -> CoreError {
    CoreError::Storage("store mutex poisoned".into())
}

impl RecordStore for MemoryStore {
    fn insert_category(&self, category: Category) -> CoreResult<()> {
        self.categories.lock().map_err(|_| poisoned())?.push(category);
        Ok(())
    }

    fn category(&self, id: Uuid) -> CoreResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    fn categories_by_owner(&self, owner: Uuid) -> CoreResult<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .filter(|category| category.owner == owner)
            .cloned()
            .collect())
    }

    fn delete_category(&self, id: Uuid) -> CoreResult<()> {
        self.categories
            .lock()
            .map_err(|_| poisoned())?
            .retain(|category| category.id != id);
        Ok(())
    }

    fn insert_expense(&self, expense: Expense) -> CoreResult<()> {
        self.expenses.lock().map_err(|_| poisoned())?.push(expense);
        Ok(())
    }

    fn expense(&self, id: Uuid) -> CoreResult<Option<Expense>> {
        Ok(self
            .expenses
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .find(|expense| expense.id == id)
            .cloned())
    }

    fn expenses_by_owner(&self, owner: Uuid) -> CoreResult<Vec<Expense>> {
        Ok(self
            .expenses
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .filter(|expense| expense.owner == owner)
            .cloned()
            .collect())
    }

    fn expenses_in_window(&self, owner: Uuid, window: &MonthWindow) -> CoreResult<Vec<Expense>> {
        Ok(self
            .expenses
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .filter(|expense| expense.owner == owner && window.contains(expense.date))
            .cloned()
            .collect())
    }

    fn expense_references_category(&self, owner: Uuid, category_id: Uuid) -> CoreResult<bool> {
        Ok(self
            .expenses
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .any(|expense| expense.owner == owner && expense.category_id == category_id))
    }

    fn delete_expense(&self, id: Uuid) -> CoreResult<()> {
        self.expenses
            .lock()
            .map_err(|_| poisoned())?
            .retain(|expense| expense.id != id);
        Ok(())
    }

    fn insert_income(&self, income: Income) -> CoreResult<()> {
        self.income.lock().map_err(|_| poisoned())?.push(income);
        Ok(())
    }

    fn income(&self, id: Uuid) -> CoreResult<Option<Income>> {
        Ok(self
            .income
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .find(|income| income.id == id)
            .cloned())
    }

    fn income_by_owner(&self, owner: Uuid) -> CoreResult<Vec<Income>> {
        Ok(self
            .income
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .filter(|income| income.owner == owner)
            .cloned()
            .collect())
    }

    fn income_in_window(&self, owner: Uuid, window: &MonthWindow) -> CoreResult<Vec<Income>> {
        Ok(self
            .income
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .filter(|income| income.owner == owner && window.contains(income.date))
            .cloned()
            .collect())
    }

    fn delete_income(&self, id: Uuid) -> CoreResult<()> {
        self.income
            .lock()
            .map_err(|_| poisoned())?
            .retain(|income| income.id != id);
        Ok(())
    }

    fn income_goal(&self, owner: Uuid) -> CoreResult<Option<IncomeGoal>> {
        Ok(self
            .goals
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .find(|goal| goal.owner == owner)
            .cloned())
    }

    fn upsert_income_goal(&self, goal: IncomeGoal) -> CoreResult<()> {
        let mut goals = self.goals.lock().map_err(|_| poisoned())?;
        goals.retain(|existing| existing.owner != goal.owner);
        goals.push(goal);
        Ok(())
    }

    fn payment_by_owner(&self, owner: Uuid) -> CoreResult<Option<Payment>> {
        Ok(self
            .payments
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .find(|payment| payment.owner == owner)
            .cloned())
    }

    fn payment_by_session(&self, session_id: &str) -> CoreResult<Option<Payment>> {
        Ok(self
            .payments
            .lock()
            .map_err(|_| poisoned())?
            .iter()
            .find(|payment| payment.session_id == session_id)
            .cloned())
    }

    fn upsert_payment(&self, payment: Payment) -> CoreResult<()> {
        let mut payments = self.payments.lock().map_err(|_| poisoned())?;
        payments.retain(|existing| existing.owner != payment.owner);
        payments.push(payment);
        Ok(())
    }
}

/// Clock pinned to a fixed instant.
pub(crate) struct FixedClock(pub TimestampMs);

impl Clock for FixedClock {
    fn now_ms(&self) -> TimestampMs {
        self.0
    }
}
