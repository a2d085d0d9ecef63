//! Sign-in and registration modals.
//!
//! Both validate locally before touching the network, claim the shared
//! [`Busy`](crate::Busy) guard for the duration of the call, and surface
//! backend rejections as inline notices. Registration does not sign the user
//! in; on success it hands the backend's acknowledgement to the caller, which
//! reopens the sign-in modal with that message.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::notice::{use_notice, Notice, NoticeKind, NoticeView};
use crate::session::{establish, make_session_store, use_api, use_busy, use_session};
use crate::views::ModalOverlay;

/// Check login form input. Returns the message to show on failure.
pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

/// Check registration form input. Rules apply in order: email shape, password
/// length, confirmation match, terms acceptance.
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm: &str,
    accepted_terms: bool,
) -> Result<(), &'static str> {
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    if !accepted_terms {
        return Err("You must accept the terms of use");
    }
    Ok(())
}

/// Sign-in modal. `notice` carries a one-off success message, e.g. the
/// registration acknowledgement.
#[component]
pub fn LoginModal(
    #[props(!optional)] notice: Option<String>,
    on_close: EventHandler<()>,
    on_switch_register: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut busy = use_busy();
    let mut inline = use_notice();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let e = email().trim().to_string();
            let p = password();

            if let Err(message) = validate_login(&e, &p) {
                inline.show_error(message);
                return;
            }
            if !busy.begin() {
                return;
            }

            match api.login(&e, &p).await {
                Ok(login) => {
                    let store = make_session_store();
                    let mut state = session();
                    establish(&store, &mut state, login);
                    session.set(state);
                    busy.end();
                    on_close.call(());
                }
                Err(err) => {
                    busy.end();
                    inline.show_error(err.user_message());
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),

            button {
                class: "modal-close",
                onclick: move |_| on_close.call(()),
                "×"
            }

            h2 { class: "modal-title", "Sign in" }

            if let Some(text) = notice {
                NoticeView {
                    notice: Notice { text, kind: NoticeKind::Success },
                }
            }
            if let Some(current) = inline.read() {
                NoticeView { notice: current }
            }

            form {
                class: "modal-form",
                onsubmit: handle_submit,

                Label { html_for: "login-email", "Email" }
                Input {
                    id: "login-email",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Label { html_for: "login-password", "Password" }
                Input {
                    id: "login-password",
                    r#type: "password",
                    placeholder: "Your password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "modal-submit",
                    r#type: "submit",
                    disabled: busy.active(),
                    if busy.active() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "modal-switch",
                "No account yet? "
                button {
                    class: "link-button",
                    onclick: move |_| on_switch_register.call(()),
                    "Create one"
                }
            }
        }
    }
}

/// Registration modal. On success calls `on_registered` with the backend's
/// acknowledgement message.
#[component]
pub fn RegisterModal(
    on_close: EventHandler<()>,
    on_registered: EventHandler<String>,
    on_switch_login: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut busy = use_busy();
    let mut inline = use_notice();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut accepted = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let e = email().trim().to_string();
            let p = password();

            if let Err(message) = validate_registration(&e, &p, &confirm(), accepted()) {
                inline.show_error(message);
                return;
            }
            if !busy.begin() {
                return;
            }

            match api.register(&e, &p).await {
                Ok(ack) => {
                    busy.end();
                    on_registered.call(ack.message);
                }
                Err(err) => {
                    busy.end();
                    inline.show_error(err.user_message());
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),

            button {
                class: "modal-close",
                onclick: move |_| on_close.call(()),
                "×"
            }

            h2 { class: "modal-title", "Create account" }

            if let Some(current) = inline.read() {
                NoticeView { notice: current }
            }

            form {
                class: "modal-form",
                onsubmit: handle_submit,

                Label { html_for: "register-email", "Email" }
                Input {
                    id: "register-email",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Label { html_for: "register-password", "Password" }
                Input {
                    id: "register-password",
                    r#type: "password",
                    placeholder: "At least 8 characters",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Label { html_for: "register-confirm", "Confirm password" }
                Input {
                    id: "register-confirm",
                    r#type: "password",
                    placeholder: "Repeat the password",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }

                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: accepted(),
                        oninput: move |evt: FormEvent| accepted.set(evt.checked()),
                    }
                    span {
                        "I have read and accept the "
                        a { href: "/terms", target: "_blank", "terms of use" }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "modal-submit",
                    r#type: "submit",
                    disabled: busy.active(),
                    if busy.active() { "Creating account..." } else { "Create account" }
                }
            }

            p {
                class: "modal-switch",
                "Already have an account? "
                button {
                    class: "link-button",
                    onclick: move |_| on_switch_login.call(()),
                    "Sign in"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_accepts_complete_credentials() {
        assert_eq!(validate_login("ana@example.com", "hunter2!"), Ok(()));
    }

    #[test]
    fn login_rejects_malformed_email() {
        assert_eq!(
            validate_login("not-an-email", "hunter2!"),
            Err("Please enter a valid email")
        );
        assert_eq!(
            validate_login("", "hunter2!"),
            Err("Please enter a valid email")
        );
    }

    #[test]
    fn login_requires_password() {
        assert_eq!(
            validate_login("ana@example.com", ""),
            Err("Password is required")
        );
    }

    #[test]
    fn registration_accepts_complete_input() {
        assert_eq!(
            validate_registration("ana@example.com", "longenough", "longenough", true),
            Ok(())
        );
    }

    #[test]
    fn registration_checks_email_before_password() {
        // Both fields are bad; the email message wins.
        assert_eq!(
            validate_registration("nope", "short", "short", true),
            Err("Please enter a valid email")
        );
    }

    #[test]
    fn registration_rejects_short_password() {
        assert_eq!(
            validate_registration("ana@example.com", "seven77", "seven77", true),
            Err("Password must be at least 8 characters")
        );
    }

    #[test]
    fn registration_rejects_mismatched_confirmation() {
        assert_eq!(
            validate_registration("ana@example.com", "longenough", "different!", true),
            Err("Passwords do not match")
        );
    }

    #[test]
    fn registration_requires_terms() {
        assert_eq!(
            validate_registration("ana@example.com", "longenough", "longenough", false),
            Err("You must accept the terms of use")
        );
    }
}
