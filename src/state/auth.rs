//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<AuthState>` as context. Login and signup write
//! it through `UserSession`; the rest of the application reads it to decide
//! what the current user may see.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::types::UserRecord;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserRecord>,
    /// `true` while a stored token is being exchanged for a user record.
    pub loading: bool,
}

impl AuthState {
    /// Initial state while a stored session is being restored.
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }
}

/// Shared current-user slot handed to the submission flow.
pub trait UserSession {
    fn current_user(&self) -> Option<UserRecord>;
    fn set_current_user(&self, user: UserRecord);
    /// Drop the user and mark the session as settled.
    fn clear_user(&self);
}

impl UserSession for RwSignal<AuthState> {
    fn current_user(&self) -> Option<UserRecord> {
        self.with_untracked(|state| state.user.clone())
    }

    fn set_current_user(&self, user: UserRecord) {
        self.update(|state| {
            state.user = Some(user);
            state.loading = false;
        });
    }

    fn clear_user(&self) {
        self.update(|state| {
            state.user = None;
            state.loading = false;
        });
    }
}

/// Plain, non-reactive session used by native callers and tests.
#[derive(Debug, Default)]
pub struct LocalSession {
    state: RefCell<AuthState>,
    updates: RefCell<usize>,
}

impl LocalSession {
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Number of `set_current_user` calls so far.
    pub fn updates(&self) -> usize {
        *self.updates.borrow()
    }
}

impl UserSession for LocalSession {
    fn current_user(&self) -> Option<UserRecord> {
        self.state.borrow().user.clone()
    }

    fn set_current_user(&self, user: UserRecord) {
        let mut state = self.state.borrow_mut();
        state.user = Some(user);
        state.loading = false;
        *self.updates.borrow_mut() += 1;
    }

    fn clear_user(&self) {
        let mut state = self.state.borrow_mut();
        state.user = None;
        state.loading = false;
    }
}
