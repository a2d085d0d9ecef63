//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] sits at the root of the app and owns three pieces of
//! shared state, each reachable through a hook:
//!
//! - [`use_session`] — the [`SessionState`] signal (profile + initial-load flag),
//! - [`use_busy`] — the single in-flight guard shared by every mutating action
//!   (login, register, search, purchase),
//! - [`use_api`] — the shared [`ApiClient`].
//!
//! On mount the provider restores the previous session: if the platform store
//! holds a token it fetches the profile, and on any failure it clears the
//! token so the next load starts signed out.

use api::{ApiClient, LoginResponse, User};
use dioxus::prelude::*;
use store::SessionStore;

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True until the restore-on-mount profile fetch has settled.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn credits(&self) -> u32 {
        self.user.as_ref().map(|user| user.credits).unwrap_or(0)
    }

    /// Optimistic local debit after a successful search. The backend already
    /// charged the credit; the next profile fetch replaces the whole user and
    /// corrects any drift.
    pub fn debit_credit(&mut self) {
        if let Some(user) = self.user.as_mut() {
            user.credits = user.credits.saturating_sub(1);
        }
    }
}

/// Apply a successful login: persist the token, swap in the profile.
pub fn establish<S: SessionStore>(store: &S, state: &mut SessionState, login: LoginResponse) {
    store.set_token(&login.token);
    state.user = Some(login.user);
    state.loading = false;
}

/// Sign out: drop the token and the profile.
pub fn terminate<S: SessionStore>(store: &S, state: &mut SessionState) {
    store.clear_token();
    state.user = None;
    state.loading = false;
}

/// Create the platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
/// - **Everything else**: a process-wide [`store::MemoryStore`], so the token
///   survives across call sites but not across restarts
pub fn make_session_store() -> impl SessionStore + Clone {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static STORE: std::sync::OnceLock<store::MemoryStore> = std::sync::OnceLock::new();
        STORE.get_or_init(store::MemoryStore::new).clone()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The shared mutation guard. At most one of the four mutating actions may be
/// in flight; the others bounce off [`Busy::begin`] until it ends.
#[derive(Clone, Copy)]
pub struct Busy(Signal<bool>);

impl Busy {
    pub fn active(&self) -> bool {
        (self.0)()
    }

    /// Try to claim the guard. Returns false when another action holds it.
    pub fn begin(&mut self) -> bool {
        if (self.0)() {
            return false;
        }
        self.0.set(true);
        true
    }

    pub fn end(&mut self) {
        self.0.set(false);
    }
}

pub fn use_busy() -> Busy {
    use_context::<Busy>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that manages session state.
/// Wrap your app with this component to enable the session hooks.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);
    let busy = use_signal(|| false);
    let client = use_hook(ApiClient::new);

    // Restore the previous session on mount
    let restore_client = client.clone();
    let _ = use_resource(move || {
        let client = restore_client.clone();
        async move {
            let store = make_session_store();
            let Some(token) = store.token() else {
                session.set(SessionState {
                    user: None,
                    loading: false,
                });
                return;
            };
            match client.fetch_profile(&token).await {
                Ok(user) => {
                    session.set(SessionState {
                        user: Some(user),
                        loading: false,
                    });
                }
                Err(err) => {
                    tracing::warn!("stored session rejected, clearing token: {err}");
                    store.clear_token();
                    session.set(SessionState {
                        user: None,
                        loading: false,
                    });
                }
            }
        }
    });

    use_context_provider(|| session);
    use_context_provider(|| Busy(busy));
    use_context_provider(|| client.clone());

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn login_fixture() -> LoginResponse {
        LoginResponse {
            token: "jwt-abc".to_string(),
            user: User {
                id: "u1".to_string(),
                email: "ana@example.com".to_string(),
                credits: 3,
                created_at: None,
            },
        }
    }

    #[test]
    fn test_establish_persists_token_and_user() {
        let store = MemoryStore::new();
        let mut state = SessionState::default();

        establish(&store, &mut state, login_fixture());

        assert_eq!(store.token().as_deref(), Some("jwt-abc"));
        assert!(state.signed_in());
        assert_eq!(state.credits(), 3);
        assert!(!state.loading);
    }

    #[test]
    fn test_terminate_clears_everything() {
        let store = MemoryStore::new();
        let mut state = SessionState::default();
        establish(&store, &mut state, login_fixture());

        terminate(&store, &mut state);

        assert!(store.token().is_none());
        assert!(!state.signed_in());
        assert_eq!(state.credits(), 0);
    }

    #[test]
    fn test_debit_credit_saturates_at_zero() {
        let mut state = SessionState::default();
        establish(&MemoryStore::new(), &mut state, login_fixture());

        state.debit_credit();
        assert_eq!(state.credits(), 2);
        state.debit_credit();
        state.debit_credit();
        state.debit_credit();
        assert_eq!(state.credits(), 0);
    }

    #[test]
    fn test_debit_without_user_is_noop() {
        let mut state = SessionState::default();
        state.debit_credit();
        assert_eq!(state.credits(), 0);
        assert!(!state.signed_in());
    }

    #[test]
    fn test_failed_login_leaves_store_untouched() {
        // The rejected-login path never reaches establish; the store state is
        // exactly what it was before the attempt.
        let store = MemoryStore::new();
        let state = SessionState {
            user: None,
            loading: false,
        };
        assert!(store.token().is_none());
        assert!(!state.signed_in());
    }
}
