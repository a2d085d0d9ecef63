//! Name search: hero section, preflight checks, and the search call itself.

use api::SearchReport;
use dioxus::prelude::*;
use store::SessionStore;

use crate::browser::{blocking_alert, scroll_into_view};
use crate::components::{Button, ButtonVariant, Input};
use crate::icons::FaMagnifyingGlass;
use crate::notice::{use_notice, NoticeView};
use crate::progress::SearchPhase;
use crate::session::{make_session_store, use_api, use_busy, use_session, SessionState};
use crate::Icon;

/// What stands between the user and a search, checked in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchGate {
    Ready,
    EmptyQuery,
    NeedsLogin,
    NeedsCredits,
}

/// Decide whether a search may start. `query` is checked as-typed; callers
/// trim before sending.
pub fn search_preflight(query: &str, session: &SessionState) -> SearchGate {
    if query.trim().is_empty() {
        return SearchGate::EmptyQuery;
    }
    if !session.signed_in() {
        return SearchGate::NeedsLogin;
    }
    if session.credits() == 0 {
        return SearchGate::NeedsCredits;
    }
    SearchGate::Ready
}

/// Landing hero with the search form.
///
/// Owns the whole search flow: preflight, the busy guard, driving `phase`,
/// and the optimistic credit debit. The parent decides what a finished
/// report or a login request looks like.
#[component]
pub fn SearchSection(
    phase: Signal<SearchPhase>,
    on_report: EventHandler<SearchReport>,
    on_request_login: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut busy = use_busy();
    let mut inline = use_notice();

    let mut query = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let name = query().trim().to_string();

            match search_preflight(&name, &session()) {
                SearchGate::EmptyQuery => {
                    inline.show_error("Enter a name to search");
                    return;
                }
                SearchGate::NeedsLogin => {
                    on_request_login.call(());
                    return;
                }
                SearchGate::NeedsCredits => {
                    inline.show_error("You are out of credits. Pick a package below to keep searching.");
                    scroll_into_view("pricing");
                    return;
                }
                SearchGate::Ready => {}
            }

            if !busy.begin() {
                return;
            }
            // The session said signed-in; if the store disagrees the token is
            // gone and only a fresh login can fix it.
            let Some(token) = make_session_store().token() else {
                busy.end();
                on_request_login.call(());
                return;
            };

            phase.set(SearchPhase::begin());
            match api.search(&token, &name).await {
                Ok(report) => {
                    let mut current = phase();
                    current.complete();
                    phase.set(current);

                    let mut state = session();
                    state.debit_credit();
                    session.set(state);

                    busy.end();
                    on_report.call(report);
                }
                Err(err) => {
                    tracing::error!("search failed: {err}");
                    let mut current = phase();
                    current.fail();
                    phase.set(current);
                    busy.end();

                    blocking_alert(&err.user_message());

                    let mut current = phase();
                    current.reset();
                    phase.set(current);
                }
            }
        });
    };

    rsx! {
        section {
            class: "hero",
            h1 { class: "hero-title", "Search public records by name" }
            p {
                class: "hero-subtitle",
                "Court cases, company ties, social profiles and more, compiled into one report."
            }

            form {
                class: "search-form",
                onsubmit: handle_submit,

                Input {
                    id: "search-name",
                    class: "search-input",
                    placeholder: "Full name, e.g. Maria da Silva",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: busy.active(),
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    if busy.active() { "Searching..." } else { "Search" }
                }
            }

            if let Some(current) = inline.read() {
                NoticeView { notice: current }
            }

            p {
                class: "hero-note",
                "Each search uses one credit. Results come from public sources only."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::User;

    fn signed_in(credits: u32) -> SessionState {
        SessionState {
            user: Some(User {
                id: "u1".into(),
                email: "ana@example.com".into(),
                credits,
                created_at: None,
            }),
            loading: false,
        }
    }

    fn signed_out() -> SessionState {
        SessionState {
            user: None,
            loading: false,
        }
    }

    #[test]
    fn blank_query_is_rejected_first() {
        // Even a signed-out, creditless visitor gets the empty-query message.
        assert_eq!(search_preflight("", &signed_out()), SearchGate::EmptyQuery);
        assert_eq!(
            search_preflight("   ", &signed_in(5)),
            SearchGate::EmptyQuery
        );
    }

    #[test]
    fn anonymous_visitors_are_sent_to_login() {
        assert_eq!(
            search_preflight("Maria da Silva", &signed_out()),
            SearchGate::NeedsLogin
        );
    }

    #[test]
    fn zero_credits_blocks_the_search() {
        assert_eq!(
            search_preflight("Maria da Silva", &signed_in(0)),
            SearchGate::NeedsCredits
        );
    }

    #[test]
    fn signed_in_with_credits_may_search() {
        assert_eq!(
            search_preflight("Maria da Silva", &signed_in(1)),
            SearchGate::Ready
        );
    }
}
