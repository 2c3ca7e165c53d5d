//! fintrack-core
//!
//! Business rules and services for fintrack. Depends on fintrack-domain.
//! No UI and no direct persistence; all storage goes through
//! [`store::RecordStore`], and every operation runs inside an authenticated
//! [`context::RequestContext`].

pub mod context;
pub mod error;
pub mod goal_service;
pub mod insight_service;
pub mod ledger_service;
pub mod payment_service;
pub mod store;
pub mod summary_service;
pub mod time;

pub use context::{IdentityProvider, RequestContext};
pub use error::{CoreError, CoreResult};
pub use goal_service::GoalService;
pub use insight_service::InsightService;
pub use ledger_service::{ExpenseView, LedgerService};
pub use payment_service::{PaymentService, PaymentStatus};
pub use store::RecordStore;
pub use summary_service::SummaryService;
pub use time::{Clock, SystemClock};

#[cfg(test)]
pub(crate) mod testing;
