//! Transient inline notices for forms.
//!
//! Validation and backend-rejection messages show next to the form that
//! caused them and clear themselves after [`NOTICE_TTL_SECS`]. Every `show`
//! bumps an epoch counter and the dismiss task only clears the notice if the
//! epoch still matches, so a newer message is never wiped by an older timer.

use dioxus::prelude::*;
use std::time::Duration;

pub const NOTICE_TTL_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

/// Handle to one notice slot. Copy it into event handlers freely.
#[derive(Clone, Copy)]
pub struct NoticeHandle {
    current: Signal<Option<Notice>>,
    epoch: Signal<u32>,
}

impl NoticeHandle {
    pub fn read(&self) -> Option<Notice> {
        (self.current)()
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.show(Notice {
            text: text.into(),
            kind: NoticeKind::Error,
        });
    }

    pub fn show_success(&mut self, text: impl Into<String>) {
        self.show(Notice {
            text: text.into(),
            kind: NoticeKind::Success,
        });
    }

    pub fn clear(&mut self) {
        self.epoch += 1;
        self.current.set(None);
    }

    fn show(&mut self, notice: Notice) {
        let stamp = (self.epoch)() + 1;
        self.epoch.set(stamp);
        self.current.set(Some(notice));

        let mut current = self.current;
        let epoch = self.epoch;
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(Duration::from_secs(NOTICE_TTL_SECS)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(Duration::from_secs(NOTICE_TTL_SECS)).await;

            if epoch() == stamp {
                current.set(None);
            }
        });
    }
}

/// One notice slot per calling component.
pub fn use_notice() -> NoticeHandle {
    let current = use_signal(|| None);
    let epoch = use_signal(|| 0);
    NoticeHandle { current, epoch }
}

#[component]
pub fn NoticeView(notice: Notice) -> Element {
    let class = match notice.kind {
        NoticeKind::Error => "notice notice-error",
        NoticeKind::Success => "notice notice-success",
    };
    rsx! {
        div {
            class: "{class}",
            "{notice.text}"
        }
    }
}
