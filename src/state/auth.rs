//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by identity-dependent controls (the toolbar login affordance) to pick
//! between authenticated and anonymous rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Whether a user identity is currently attached to the session.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
