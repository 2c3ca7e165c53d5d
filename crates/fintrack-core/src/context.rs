//! Typed per-request context.
//!
//! Every operation runs on behalf of exactly one resolved user against one
//! store handle. The context is built once at the boundary and passed down,
//! never re-derived inside a service.

use uuid::Uuid;

use crate::{CoreError, CoreResult, RecordStore};

/// Yields the identity of the calling user, if any.
///
/// This is the seam to the external authentication collaborator; a `None`
/// refuses every operation with [`CoreError::Unauthenticated`].
pub trait IdentityProvider {
    fn current_user(&self) -> Option<Uuid>;
}

/// Carries the resolved user identity and the store handle for one request.
pub struct RequestContext<'a> {
    user_id: Uuid,
    store: &'a dyn RecordStore,
}

impl<'a> RequestContext<'a> {
    /// Builds a context for an already-resolved user identity.
    pub fn new(store: &'a dyn RecordStore, user_id: Uuid) -> Self {
        Self { user_id, store }
    }

    /// Resolves the caller through the identity provider, refusing
    /// unauthenticated callers before any store access.
    pub fn authenticate(
        store: &'a dyn RecordStore,
        identity: &dyn IdentityProvider,
    ) -> CoreResult<Self> {
        let user_id = identity.current_user().ok_or(CoreError::Unauthenticated)?;
        Ok(Self { user_id, store })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn store(&self) -> &'a dyn RecordStore {
        self.store
    }
}
