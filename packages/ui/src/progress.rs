//! Search progress state machine and its modal.
//!
//! The phase signal is owned by the page so the search flow and the modal see
//! the same state. While a search is in flight the modal shows the current
//! step label and a ticker advances it every [`STEP_INTERVAL_SECS`] seconds;
//! the steps are presentation only and hold on the last entry until the
//! request settles. Unmounting the modal cancels the ticker.

use dioxus::prelude::*;
use std::time::Duration;

/// Step labels shown while a search runs, in display order.
pub const SEARCH_STEPS: [&str; 6] = [
    "Starting search...",
    "Searching court records...",
    "Checking company registries...",
    "Scanning public portals...",
    "Analyzing social networks...",
    "Finalizing report...",
];

const STEP_INTERVAL_SECS: u64 = 2;

/// Where the current search stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching {
        step: usize,
    },
    Done,
    Failed,
}

impl SearchPhase {
    /// Start a fresh search on the first step.
    pub fn begin() -> Self {
        Self::Searching { step: 0 }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, Self::Searching { .. })
    }

    /// Move to the next step label, holding on the last one.
    /// Outside `Searching` this does nothing.
    pub fn advance(&mut self) {
        if let Self::Searching { step } = self {
            *step = (*step + 1).min(SEARCH_STEPS.len() - 1);
        }
    }

    /// Mark the search finished. Only a running search can complete.
    pub fn complete(&mut self) {
        if self.is_searching() {
            *self = Self::Done;
        }
    }

    /// Mark the search failed. Only a running search can fail.
    pub fn fail(&mut self) {
        if self.is_searching() {
            *self = Self::Failed;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// The label for the current step, while searching.
    pub fn step_label(&self) -> Option<&'static str> {
        match self {
            Self::Searching { step } => SEARCH_STEPS.get(*step).copied(),
            _ => None,
        }
    }
}

/// Blocking overlay shown while a search runs. Not dismissable; it leaves the
/// screen when the phase moves past `Searching`.
#[component]
pub fn ProgressModal(phase: Signal<SearchPhase>) -> Element {
    use_future(move || async move {
        loop {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(Duration::from_secs(STEP_INTERVAL_SECS)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(Duration::from_secs(STEP_INTERVAL_SECS)).await;

            let mut current = phase();
            if !current.is_searching() {
                break;
            }
            current.advance();
            phase.set(current);
        }
    });

    let Some(label) = phase().step_label() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal-card progress-card",
                div { class: "spinner" }
                h3 { class: "progress-title", "Searching public records" }
                p { class: "progress-step", "{label}" }
                p { class: "progress-hint", "This can take a few moments." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_starts_on_first_step() {
        let phase = SearchPhase::begin();
        assert_eq!(phase, SearchPhase::Searching { step: 0 });
        assert_eq!(phase.step_label(), Some(SEARCH_STEPS[0]));
    }

    #[test]
    fn advance_holds_on_last_step() {
        let mut phase = SearchPhase::begin();
        for _ in 0..SEARCH_STEPS.len() * 2 {
            phase.advance();
        }
        assert_eq!(
            phase,
            SearchPhase::Searching {
                step: SEARCH_STEPS.len() - 1
            }
        );
        assert_eq!(phase.step_label(), Some(SEARCH_STEPS[SEARCH_STEPS.len() - 1]));
    }

    #[test]
    fn advance_outside_searching_is_a_noop() {
        let mut phase = SearchPhase::Done;
        phase.advance();
        assert_eq!(phase, SearchPhase::Done);

        let mut phase = SearchPhase::Idle;
        phase.advance();
        assert_eq!(phase, SearchPhase::Idle);
    }

    #[test]
    fn complete_and_fail_only_apply_to_a_running_search() {
        let mut phase = SearchPhase::begin();
        phase.complete();
        assert_eq!(phase, SearchPhase::Done);

        // Already settled; a late fail must not rewrite history.
        phase.fail();
        assert_eq!(phase, SearchPhase::Done);

        let mut phase = SearchPhase::begin();
        phase.fail();
        assert_eq!(phase, SearchPhase::Failed);
        phase.complete();
        assert_eq!(phase, SearchPhase::Failed);
    }

    #[test]
    fn reset_returns_to_idle_from_anywhere_and_stays_there() {
        for mut phase in [
            SearchPhase::Idle,
            SearchPhase::begin(),
            SearchPhase::Done,
            SearchPhase::Failed,
        ] {
            phase.reset();
            assert_eq!(phase, SearchPhase::Idle);
            phase.reset();
            assert_eq!(phase, SearchPhase::Idle);
            assert!(!phase.is_searching());
        }
    }

    #[test]
    fn idle_has_no_step_label() {
        assert_eq!(SearchPhase::Idle.step_label(), None);
        assert_eq!(SearchPhase::Done.step_label(), None);
    }
}
