//! # localStorage session store — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the bearer token under a single `localStorage` key so a
//! signed-in user survives reloads and new tabs.
//!
//! ## Error handling
//!
//! Every method silently swallows storage errors (returning `None` for reads,
//! doing nothing for writes). `localStorage` can be unavailable (private
//! browsing, storage permissions) or full; in all of those cases the app
//! degrades to "signed out" instead of crashing. The authoritative session
//! state always lives on the backend.

use crate::session::SessionStore;

const TOKEN_KEY: &str = "backcheck_token";

/// localStorage-backed SessionStore for the web platform.
///
/// Zero-size; `web_sys::Storage` is not `Send`, so the handle is looked up
/// per operation instead of being held.
#[derive(Clone, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn set_token(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
