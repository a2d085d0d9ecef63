//! # SessionStore — durable home for the auth token
//!
//! The client keeps exactly one piece of durable state: the bearer token the
//! backend hands out at login. [`SessionStore`] abstracts over where that token
//! lives so the same session logic runs against browser storage in production
//! and an in-memory slot in tests.
//!
//! | Implementation | Target | Backing |
//! |----------------|--------|---------|
//! | [`crate::MemoryStore`] | any | `Arc<Mutex<Option<String>>>` |
//! | [`crate::LocalStore`] | wasm32 + `web` feature | `window.localStorage`, key `"backcheck_token"` |
//!
//! The store holds the token verbatim. There is no client-side expiry and no
//! validation here; a stale token is discovered when the next profile request
//! comes back rejected, at which point the caller clears the slot.

/// A single-slot store for the session token.
pub trait SessionStore {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;
    /// Store a token, replacing any previous one.
    fn set_token(&self, token: &str);
    /// Remove the stored token. A no-op when the slot is already empty.
    fn clear_token(&self);
}
