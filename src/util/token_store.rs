//! Session token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token written here after login/signup is what `HttpAuthApi` attaches
//! to later requests. Browser storage is hydrate-only; SSR paths no-op so
//! server rendering never sees a session.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;

/// Durable key-value slot for the auth token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Token kept in `window.localStorage` under a fixed key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageTokenStore {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(&self.key).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; session token not persisted");
                return;
            };
            if storage.set_item(&self.key, token).is_err() {
                leptos::logging::warn!("failed to persist session token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// In-process token slot for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
    writes: RefCell<usize>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RefCell::new(Some(token.into())), writes: RefCell::new(0) }
    }

    /// Number of `store` calls so far.
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
        *self.writes.borrow_mut() += 1;
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
