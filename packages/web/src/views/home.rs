//! Landing page: search hero, pricing, and every modal the flows open.

use api::{CreditPackage, PurchaseOrder, SearchReport};
use dioxus::prelude::*;
use store::SessionStore;
use ui::{
    blocking_alert, make_session_store, use_api, use_busy, use_session, LoginModal, Navbar,
    PaymentModal, PricingSection, ProgressModal, RegisterModal, ReportModal, SearchPhase,
    SearchSection,
};

/// Which modal is on screen. One at a time; `None` is the bare page.
#[derive(Debug, Clone, PartialEq)]
enum Overlay {
    None,
    Login { notice: Option<String> },
    Register,
    Report(SearchReport),
    Payment(PurchaseOrder),
}

/// Landing page component.
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let session = use_session();
    let mut busy = use_busy();

    let mut overlay = use_signal(|| Overlay::None);
    let mut phase = use_signal(SearchPhase::default);

    let handle_purchase = move |package: CreditPackage| {
        let api = api.clone();
        spawn(async move {
            if !session().signed_in() {
                overlay.set(Overlay::Login { notice: None });
                return;
            }
            if !busy.begin() {
                return;
            }
            let Some(token) = make_session_store().token() else {
                busy.end();
                overlay.set(Overlay::Login { notice: None });
                return;
            };

            match api.purchase(&token, package).await {
                Ok(receipt) => {
                    busy.end();
                    overlay.set(Overlay::Payment(PurchaseOrder { receipt, package }));
                }
                Err(err) => {
                    tracing::error!("purchase failed: {err}");
                    busy.end();
                    blocking_alert(&err.user_message());
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",

            Navbar {
                on_sign_in: move |_| overlay.set(Overlay::Login { notice: None }),
            }

            main {
                class: "page-main",
                SearchSection {
                    phase,
                    on_report: move |report| overlay.set(Overlay::Report(report)),
                    on_request_login: move |_| overlay.set(Overlay::Login { notice: None }),
                }
                PricingSection { on_select: handle_purchase }
            }

            footer {
                class: "page-footer",
                p { "backcheck compiles public sources only." }
                p {
                    a { href: "/terms", "Terms of use" }
                }
                p { class: "page-footer-rights", "© backcheck. All rights reserved." }
            }

            if phase().is_searching() {
                ProgressModal { phase }
            }

            {match overlay() {
                Overlay::None => rsx! {},
                Overlay::Login { notice } => rsx! {
                    LoginModal {
                        notice,
                        on_close: move |_| overlay.set(Overlay::None),
                        on_switch_register: move |_| overlay.set(Overlay::Register),
                    }
                },
                Overlay::Register => rsx! {
                    RegisterModal {
                        on_close: move |_| overlay.set(Overlay::None),
                        on_registered: move |message: String| {
                            overlay.set(Overlay::Login { notice: Some(message) })
                        },
                        on_switch_login: move |_| overlay.set(Overlay::Login { notice: None }),
                    }
                },
                Overlay::Report(report) => rsx! {
                    ReportModal {
                        report,
                        on_close: move |_| {
                            let mut current = phase();
                            current.reset();
                            phase.set(current);
                            overlay.set(Overlay::None);
                        },
                    }
                },
                Overlay::Payment(order) => rsx! {
                    PaymentModal {
                        order,
                        on_close: move |_| overlay.set(Overlay::None),
                    }
                },
            }}
        }
    }
}
