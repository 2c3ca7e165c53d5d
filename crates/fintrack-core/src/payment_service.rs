//! One-time purchase activation state machine.
//!
//! A user's payment record moves `NONE -> PENDING -> PAID`; paid is
//! terminal. Read-then-write transitions rely on the store serializing point
//! writes per user/session key — no locking happens here.

use fintrack_domain::{Payment, TimestampMs};
use uuid::Uuid;

use crate::{Clock, CoreError, CoreResult, RecordStore, RequestContext};

/// Read-only view of a user's activation state.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentStatus {
    pub exists: bool,
    pub is_paid: bool,
    pub paid_at: Option<TimestampMs>,
    pub session_id: Option<String>,
}

impl PaymentStatus {
    fn none() -> Self {
        Self {
            exists: false,
            is_paid: false,
            paid_at: None,
            session_id: None,
        }
    }
}

/// Drives checkout initiation, confirmation, and the access gate.
pub struct PaymentService;

impl PaymentService {
    /// Starts (or restarts) a checkout for the caller.
    ///
    /// Creates the record in pending state, or overwrites the session id and
    /// amount of an existing pending record — re-initiating over a stale
    /// checkout is allowed and idempotent in effect. A paid record is
    /// terminal and refuses re-initiation.
    pub fn initiate_checkout(
        ctx: &RequestContext<'_>,
        session_id: &str,
        amount: f64,
    ) -> CoreResult<()> {
        if session_id.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "checkout session id must not be empty".into(),
            ));
        }
        if amount <= 0.0 {
            return Err(CoreError::InvalidArgument(
                "charge amount must be positive".into(),
            ));
        }
        let store = ctx.store();
        if let Some(holder) = store.payment_by_session(session_id)? {
            if holder.owner != ctx.user_id() {
                return Err(CoreError::Conflict(format!(
                    "checkout session `{}` belongs to another user",
                    session_id
                )));
            }
        }
        let payment = match store.payment_by_owner(ctx.user_id())? {
            Some(existing) if existing.is_paid => {
                return Err(CoreError::Conflict(
                    "payment already completed; paid state is terminal".into(),
                ))
            }
            Some(mut existing) => {
                existing.session_id = session_id.to_string();
                existing.amount = amount;
                existing.is_paid = false;
                existing.paid_at = None;
                existing
            }
            None => Payment::pending(ctx.user_id(), session_id, amount),
        };
        store.upsert_payment(payment)?;
        tracing::info!(user = %ctx.user_id(), session = session_id, "checkout initiated");
        Ok(())
    }

    /// Marks the payment matching `session_id` as paid and returns its owner.
    ///
    /// Keyed by session id alone because the confirming caller (a provider
    /// callback) may not know the user yet. Confirming an already-paid
    /// session is a no-op success returning the same owner, so retried
    /// callbacks stay harmless.
    pub fn confirm_payment(
        store: &dyn RecordStore,
        clock: &dyn Clock,
        session_id: &str,
    ) -> CoreResult<Uuid> {
        let mut payment = store
            .payment_by_session(session_id)?
            .ok_or_else(|| CoreError::NotFound(format!("payment session `{}`", session_id)))?;
        if payment.is_paid {
            tracing::warn!(session = session_id, "repeated confirmation for paid session");
            return Ok(payment.owner);
        }
        payment.is_paid = true;
        payment.paid_at = Some(clock.now_ms());
        let owner = payment.owner;
        store.upsert_payment(payment)?;
        tracing::info!(user = %owner, session = session_id, "payment confirmed");
        Ok(owner)
    }

    /// Reports the caller's activation state without mutating anything.
    pub fn payment_status(ctx: &RequestContext<'_>) -> CoreResult<PaymentStatus> {
        Ok(match ctx.store().payment_by_owner(ctx.user_id())? {
            Some(payment) => PaymentStatus {
                exists: true,
                is_paid: payment.is_paid,
                paid_at: payment.paid_at,
                session_id: Some(payment.session_id),
            },
            None => PaymentStatus::none(),
        })
    }

    /// Whether a status passes the gate under the given enforcement setting.
    pub fn gate_decision(status: &PaymentStatus, enforce: bool) -> bool {
        !enforce || status.is_paid
    }

    /// Whether the caller may use gated features.
    ///
    /// Without the `payment-gate` feature this always grants access, which
    /// matches deployments that have no checkout integration wired up yet.
    pub fn has_access(ctx: &RequestContext<'_>) -> CoreResult<bool> {
        let status = Self::payment_status(ctx)?;
        Ok(Self::gate_decision(
            &status,
            cfg!(feature = "payment-gate"),
        ))
    }
}
