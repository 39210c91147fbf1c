// --- File: crates/services/farelane_backend/src/session.rs ---
//! In-process session store backing the [`IdentityProvider`] contract.
//!
//! The wider user-authentication subsystem lives elsewhere; this service
//! only needs to know who the current user is and how to force
//! re-authentication.

use farelane_common::services::IdentityProvider;
use farelane_common::UserId;
use std::sync::RwLock;
use tracing::info;

pub struct SessionIdentityProvider {
    user: RwLock<Option<UserId>>,
}

impl SessionIdentityProvider {
    pub fn new(user: Option<UserId>) -> Self {
        Self {
            user: RwLock::new(user),
        }
    }
}

impl IdentityProvider for SessionIdentityProvider {
    fn current_user_id(&self) -> Option<UserId> {
        self.user.read().expect("session lock poisoned").clone()
    }

    fn terminate_session(&self) {
        info!("Session terminated, re-authentication required");
        self.user.write().expect("session lock poisoned").take();
    }
}
