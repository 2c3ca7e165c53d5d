//! fintrack-domain
//!
//! Pure domain models (Category, Expense, Income, IncomeGoal, Payment,
//! MonthlySummary) and the month window resolver.
//! No I/O, no storage. Only data types and calendar math.

pub mod category;
pub mod common;
pub mod expense;
pub mod goal;
pub mod income;
pub mod payment;
pub mod summary;
pub mod window;

pub use category::*;
pub use common::*;
pub use expense::*;
pub use goal::*;
pub use income::*;
pub use payment::*;
pub use summary::*;
pub use window::*;
