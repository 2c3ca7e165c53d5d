//! JSON-file-backed reference implementation of the record store.
//!
//! State lives in memory behind a mutex; every mutation rewrites the full
//! snapshot through a temp file and an atomic rename. The mutex gives the
//! per-key write serialization the service layer's read-then-write
//! transitions assume. Lists return insertion order, which services treat as
//! the store's stable native order.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fintrack_core::{CoreError, CoreResult, RecordStore};
use fintrack_domain::{Category, Expense, Income, IncomeGoal, MonthWindow, Payment};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    expenses: Vec<Expense>,
    #[serde(default)]
    income: Vec<Income>,
    #[serde(default)]
    goals: Vec<IncomeGoal>,
    #[serde(default)]
    payments: Vec<Payment>,
}

/// Record store holding all tables in memory with optional JSON persistence.
pub struct JsonRecordStore {
    path: Option<PathBuf>,
    state: Mutex<StoreState>,
}

impl JsonRecordStore {
    /// A store with no backing file. Used by tests and embedded callers.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Opens a store backed by `path`, loading the existing snapshot when
    /// the file is present and starting empty otherwise.
    pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let state = if path.exists() {
            let data = fs::read_to_string(&path).map_err(storage_err)?;
            serde_json::from_str(&data).map_err(storage_err)?
        } else {
            StoreState::default()
        };
        Ok(Self {
            path: Some(path),
            state: Mutex::new(state),
        })
    }

    fn locked(&self) -> CoreResult<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|_| CoreError::Storage("record store mutex poisoned".into()))
    }

    fn persist(&self, state: &StoreState) -> CoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = serde_json::to_string_pretty(state).map_err(storage_err)?;
        let tmp = tmp_path(path);
        write_atomic(&tmp, &data)?;
        fs::rename(&tmp, path).map_err(storage_err)?;
        Ok(())
    }
}

fn storage_err(err: impl std::fmt::Display) -> CoreError {
    CoreError::Storage(err.to_string())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(storage_err)?;
        }
    }
    let mut file = File::create(path).map_err(storage_err)?;
    file.write_all(data.as_bytes()).map_err(storage_err)?;
    file.flush().map_err(storage_err)?;
    Ok(())
}

impl RecordStore for JsonRecordStore {
    fn insert_category(&self, category: Category) -> CoreResult<()> {
        let mut state = self.locked()?;
        state.categories.push(category);
        self.persist(&state)
    }

    fn category(&self, id: Uuid) -> CoreResult<Option<Category>> {
        Ok(self
            .locked()?
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    fn categories_by_owner(&self, owner: Uuid) -> CoreResult<Vec<Category>> {
        Ok(self
            .locked()?
            .categories
            .iter()
            .filter(|category| category.owner == owner)
            .cloned()
            .collect())
    }

    fn delete_category(&self, id: Uuid) -> CoreResult<()> {
        let mut state = self.locked()?;
        state.categories.retain(|category| category.id != id);
        self.persist(&state)
    }

    fn insert_expense(&self, expense: Expense) -> CoreResult<()> {
        let mut state = self.locked()?;
        state.expenses.push(expense);
        self.persist(&state)
    }

    fn expense(&self, id: Uuid) -> CoreResult<Option<Expense>> {
        Ok(self
            .locked()?
            .expenses
            .iter()
            .find(|expense| expense.id == id)
            .cloned())
    }

    fn expenses_by_owner(&self, owner: Uuid) -> CoreResult<Vec<Expense>> {
        Ok(self
            .locked()?
            .expenses
            .iter()
            .filter(|expense| expense.owner == owner)
            .cloned()
            .collect())
    }

    fn expenses_in_window(&self, owner: Uuid, window: &MonthWindow) -> CoreResult<Vec<Expense>> {
        Ok(self
            .locked()?
            .expenses
            .iter()
            .filter(|expense| expense.owner == owner && window.contains(expense.date))
            .cloned()
            .collect())
    }

    fn expense_references_category(&self, owner: Uuid, category_id: Uuid) -> CoreResult<bool> {
        Ok(self
            .locked()?
            .expenses
            .iter()
            .any(|expense| expense.owner == owner && expense.category_id == category_id))
    }

    fn delete_expense(&self, id: Uuid) -> CoreResult<()> {
        let mut state = self.locked()?;
        state.expenses.retain(|expense| expense.id != id);
        self.persist(&state)
    }

    fn insert_income(&self, income: Income) -> CoreResult<()> {
        let mut state = self.locked()?;
        state.income.push(income);
        self.persist(&state)
    }

    fn income(&self, id: Uuid) -> CoreResult<Option<Income>> {
        Ok(self
            .locked()?
            .income
            .iter()
            .find(|income| income.id == id)
            .cloned())
    }

    fn income_by_owner(&self, owner: Uuid) -> CoreResult<Vec<Income>> {
        Ok(self
            .locked()?
            .income
            .iter()
            .filter(|income| income.owner == owner)
            .cloned()
            .collect())
    }

    fn income_in_window(&self, owner: Uuid, window: &MonthWindow) -> CoreResult<Vec<Income>> {
        Ok(self
            .locked()?
            .income
            .iter()
            .filter(|income| income.owner == owner && window.contains(income.date))
            .cloned()
            .collect())
    }

    fn delete_income(&self, id: Uuid) -> CoreResult<()> {
        let mut state = self.locked()?;
        state.income.retain(|income| income.id != id);
        self.persist(&state)
    }

    fn income_goal(&self, owner: Uuid) -> CoreResult<Option<IncomeGoal>> {
        Ok(self
            .locked()?
            .goals
            .iter()
            .find(|goal| goal.owner == owner)
            .cloned())
    }

    fn upsert_income_goal(&self, goal: IncomeGoal) -> CoreResult<()> {
        let mut state = self.locked()?;
        state.goals.retain(|existing| existing.owner != goal.owner);
        state.goals.push(goal);
        self.persist(&state)
    }

    fn payment_by_owner(&self, owner: Uuid) -> CoreResult<Option<Payment>> {
        Ok(self
            .locked()?
            .payments
            .iter()
            .find(|payment| payment.owner == owner)
            .cloned())
    }

    fn payment_by_session(&self, session_id: &str) -> CoreResult<Option<Payment>> {
        Ok(self
            .locked()?
            .payments
            .iter()
            .find(|payment| payment.session_id == session_id)
            .cloned())
    }

    fn upsert_payment(&self, payment: Payment) -> CoreResult<()> {
        let mut state = self.locked()?;
        state
            .payments
            .retain(|existing| existing.owner != payment.owner);
        state.payments.push(payment);
        self.persist(&state)
    }
}
