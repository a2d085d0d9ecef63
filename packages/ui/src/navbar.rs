use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::session::{make_session_store, terminate, use_session};

/// Top bar: brand, and either the signed-in account summary or a sign-in
/// button. Nothing renders in the session slot while the restore-on-mount
/// fetch is still settling.
#[component]
pub fn Navbar(on_sign_in: EventHandler<()>) -> Element {
    let mut session = use_session();
    let state = session();

    let handle_sign_out = move |_| {
        let store = make_session_store();
        let mut state = session();
        terminate(&store, &mut state);
        session.set(state);
    };

    rsx! {
        header {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "backcheck" }

            div {
                class: "navbar-session",
                if !state.loading {
                    if let Some(user) = state.user {
                        span { class: "navbar-email", "{user.email}" }
                        span {
                            class: "credit-badge",
                            if user.credits == 1 {
                                "1 credit"
                            } else {
                                "{user.credits} credits"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: handle_sign_out,
                            "Sign out"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_sign_in.call(()),
                            "Sign in"
                        }
                    }
                }
            }
        }
    }
}
