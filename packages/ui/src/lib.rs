//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    establish, make_session_store, terminate, use_api, use_busy, use_session, Busy, SessionProvider,
    SessionState,
};

pub mod views;

mod browser;
pub use browser::{blocking_alert, copy_text, scroll_into_view};

mod notice;
pub use notice::{use_notice, Notice, NoticeHandle, NoticeKind, NoticeView};

mod navbar;
pub use navbar::Navbar;

mod auth_modals;
pub use auth_modals::{validate_login, validate_registration, LoginModal, RegisterModal};

mod progress;
pub use progress::{ProgressModal, SearchPhase, SEARCH_STEPS};

mod search;
pub use search::{search_preflight, SearchGate, SearchSection};

pub mod report;
pub use report::ReportModal;

mod pricing;
pub use pricing::{PaymentModal, PricingSection};

mod markdown;
pub use markdown::markdown_to_html;
