//! Report presentation: the live modal plus print, HTML and PDF export.
//!
//! The modal and the exported document render from the same
//! [`SearchReport::sections`] view-model, so what the user downloads is what
//! they saw on screen.

mod export;
pub use export::{download_report, report_filename, save_as_pdf, standalone_html};

use api::SearchReport;
use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;

use crate::browser::open_print_dialog;
use crate::components::{Button, ButtonVariant};
use crate::icons::{FaDownload, FaFilePdf, FaPrint};
use crate::views::ModalOverlay;
use crate::Icon;

/// Shown under every report, on screen and in the export.
const VERIFICATION_WARNING: &str = "Automated name matching can pick up namesakes. \
Confirm every finding against the official source before acting on it.";

/// Report date in the viewer's wall-clock time. Falls back to now when the
/// backend sent no timestamp.
fn display_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|ts| ts.with_timezone(&Local))
        .unwrap_or_else(Local::now)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// Only plain web links make it into rendered output, as text or as `href`.
fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Full-screen report view with export actions.
#[component]
pub fn ReportModal(report: SearchReport, on_close: EventHandler<()>) -> Element {
    let sections = report.sections();
    let generated = display_timestamp(report.timestamp);
    let download_source = report.clone();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),

            div {
                class: "report-modal",

                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }

                header {
                    class: "report-header",
                    p { class: "report-kicker", "INVESTIGATION REPORT" }
                    h2 { class: "report-name", "{report.name}" }
                    p { class: "report-date", "Generated {generated}" }
                }

                if !report.disclaimer.is_empty() {
                    div { class: "disclaimer-box", "{report.disclaimer}" }
                }

                div {
                    class: "summary-box",
                    div {
                        class: "summary-line",
                        span { "Sources searched" }
                        span { "{report.sources_searched}" }
                    }
                    div {
                        class: "summary-line",
                        span { "Profiles found" }
                        span { "{report.profiles_found}" }
                    }
                    if let Some(score) = report.confidence_score {
                        div {
                            class: "summary-line",
                            span { "Confidence" }
                            span { "{score}%" }
                        }
                    }
                    if let Some(risk) = &report.risk_assessment {
                        div {
                            class: "summary-line",
                            span { "Risk assessment" }
                            span { "{risk}" }
                        }
                    }
                }

                div {
                    class: "report-body",
                    for section in sections {
                        div {
                            class: "result-section section-{section.category.css_class()}",
                            h3 { class: "result-heading", "{section.category.label()}" }
                            for item in section.items {
                                div {
                                    class: "result-item",
                                    h4 { class: "result-title", "{item.title}" }
                                    p { class: "result-detail", "{item.detail}" }
                                    if let Some(source) = &item.source {
                                        p { class: "result-source", "Source: {source}" }
                                    }
                                    if let Some(url) = item.url.as_deref().filter(|u| is_http_url(u)) {
                                        a {
                                            class: "result-link",
                                            href: "{url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "{url}"
                                        }
                                    }
                                    if let Some(note) = &item.note {
                                        p { class: "result-note", "{note}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "important-notice",
                    strong { "Important: " }
                    "{VERIFICATION_WARNING}"
                    " "
                    a { href: "/terms", target: "_blank", "Terms of use" }
                }

                div {
                    class: "report-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| open_print_dialog(),
                        Icon { icon: FaPrint, width: 13, height: 13 }
                        "Print"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| download_report(&download_source),
                        Icon { icon: FaDownload, width: 13, height: 13 }
                        "Download HTML"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| save_as_pdf(),
                        Icon { icon: FaFilePdf, width: 13, height: 13 }
                        "Save as PDF"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_renders_as_day_month_year() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).single();
        let shown = display_timestamp(ts);
        // Local offset varies by machine; check the shape, not the digits.
        assert_eq!(shown.len(), 16);
        assert_eq!(&shown[2..3], "/");
        assert_eq!(&shown[5..6], "/");
        assert_eq!(&shown[10..11], " ");
        assert_eq!(&shown[13..14], ":");
    }

    #[test]
    fn missing_timestamp_still_renders_a_date() {
        let shown = display_timestamp(None);
        assert_eq!(shown.len(), 16);
    }

    #[test]
    fn only_web_urls_pass_the_filter() {
        assert!(is_http_url("https://instagram.com/someone"));
        assert!(is_http_url("http://example.com"));
        assert!(!is_http_url("javascript:alert(1)"));
        assert!(!is_http_url("data:text/html,hi"));
        assert!(!is_http_url("ftp://example.com"));
    }
}
