//! Standalone HTML export and the browser download plumbing.

use api::SearchReport;

use crate::browser::{blocking_alert, open_print_dialog};

use super::{display_timestamp, is_http_url, VERIFICATION_WARNING};

/// Render `report` as a self-contained HTML document in the product's dark
/// theme, section for section the same as the live modal.
///
/// Every backend-provided string is escaped. Links survive only as plain
/// `http(s)` URLs.
pub fn standalone_html(report: &SearchReport) -> String {
    let name = escape_html(&report.name);
    let generated = display_timestamp(report.timestamp);

    let mut summary = String::new();
    summary.push_str(&format!(
        "<p>Sources searched: <strong>{}</strong></p>\n",
        report.sources_searched
    ));
    summary.push_str(&format!(
        "<p>Profiles found: <strong>{}</strong></p>\n",
        report.profiles_found
    ));
    if let Some(score) = report.confidence_score {
        summary.push_str(&format!(
            "<p>Confidence score: <strong>{score}%</strong></p>\n"
        ));
    }
    if let Some(risk) = &report.risk_assessment {
        summary.push_str(&format!(
            "<p>Risk assessment: <strong>{}</strong></p>\n",
            escape_html(risk)
        ));
    }

    let disclaimer = if report.disclaimer.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"disclaimer\">{}</div>\n",
            escape_html(&report.disclaimer)
        )
    };

    let mut sections = String::new();
    for section in report.sections() {
        let accent = section.category.accent();
        sections.push_str(&format!(
            "<div class=\"section\" style=\"border-left-color: {accent}\">\n<h2 style=\"color: {accent}\">{}</h2>\n",
            escape_html(section.category.label())
        ));
        for item in &section.items {
            sections.push_str("<div class=\"item\">\n");
            sections.push_str(&format!("<h3>{}</h3>\n", escape_html(&item.title)));
            sections.push_str(&format!("<p>{}</p>\n", escape_html(&item.detail)));
            if let Some(source) = &item.source {
                sections.push_str(&format!(
                    "<p class=\"meta\">Source: {}</p>\n",
                    escape_html(source)
                ));
            }
            if let Some(url) = item.url.as_deref().filter(|u| is_http_url(u)) {
                let url = escape_html(url);
                sections.push_str(&format!(
                    "<p class=\"meta\"><a href=\"{url}\">{url}</a></p>\n"
                ));
            }
            if let Some(note) = &item.note {
                sections.push_str(&format!("<p class=\"note\">{}</p>\n", escape_html(note)));
            }
            sections.push_str("</div>\n");
        }
        sections.push_str("</div>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Investigation report: {name}</title>
<style>
body {{ background: #0a0a0a; color: #e0e0e0; font-family: 'Segoe UI', Arial, sans-serif; max-width: 860px; margin: 0 auto; padding: 40px 24px; }}
.kicker {{ color: #4ade80; letter-spacing: 3px; font-size: 13px; margin: 0; }}
h1 {{ margin: 4px 0 2px; font-size: 30px; }}
.date {{ color: #888; margin-top: 0; }}
.summary {{ background: #1a1a1a; border: 1px solid #2a2a2a; border-radius: 8px; padding: 14px 18px; margin: 18px 0; }}
.summary p {{ margin: 4px 0; }}
.disclaimer {{ background: #241a00; border: 1px solid #6b5b00; border-radius: 8px; padding: 12px 16px; color: #e8d48b; font-size: 14px; margin: 18px 0; }}
.section {{ background: #151515; border-left: 4px solid #4ade80; border-radius: 0 8px 8px 0; padding: 14px 18px; margin: 18px 0; }}
.section h2 {{ margin: 0 0 10px; font-size: 20px; }}
.item {{ border-top: 1px solid #2a2a2a; padding: 10px 0; }}
.item:first-of-type {{ border-top: none; }}
.item h3 {{ margin: 0 0 4px; font-size: 16px; }}
.item p {{ margin: 3px 0; font-size: 14px; }}
.meta {{ color: #9a9a9a; }}
.note {{ color: #e8d48b; font-size: 13px; }}
a {{ color: #4ade80; }}
.warning {{ background: #2a1515; border: 1px solid #703030; border-radius: 8px; padding: 12px 16px; font-size: 14px; margin: 24px 0; }}
footer {{ color: #777; font-size: 13px; border-top: 1px solid #2a2a2a; padding-top: 14px; margin-top: 28px; }}
</style>
</head>
<body>
<header>
<p class="kicker">INVESTIGATION REPORT</p>
<h1>{name}</h1>
<p class="date">Generated {generated}</p>
</header>
<div class="summary">
{summary}</div>
{disclaimer}{sections}<div class="warning"><strong>Important:</strong> {warning}</div>
<footer>
<p>Generated by backcheck on {generated}.</p>
<p>© backcheck. All rights reserved.</p>
</footer>
</body>
</html>
"#,
        warning = escape_html(VERIFICATION_WARNING),
    )
}

/// `report-<name>-<ms>.html`, with whitespace runs collapsed to single
/// dashes and path-hostile characters removed.
pub fn report_filename(name: &str, timestamp_ms: i64) -> String {
    let slug: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect();
    if slug.is_empty() {
        format!("report-{timestamp_ms}.html")
    } else {
        format!("report-{slug}-{timestamp_ms}.html")
    }
}

/// Offer the report as an HTML file download.
pub fn download_report(report: &SearchReport) {
    let html = standalone_html(report);
    let filename = report_filename(&report.name, chrono::Utc::now().timestamp_millis());
    deliver(&html, &filename);
}

/// There is no real PDF pipeline; the print dialog's "Save as PDF"
/// destination stands in for one.
pub fn save_as_pdf() {
    blocking_alert(
        "Your browser's print dialog will open. Choose 'Save as PDF' as the destination to keep a PDF copy.",
    );
    open_print_dialog();
}

#[cfg(target_arch = "wasm32")]
fn deliver(html: &str, filename: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(html));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/html");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        tracing::warn!("report download: blob creation failed");
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        tracing::warn!("report download: object URL creation failed");
        return;
    };

    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
    if let Some(anchor) = anchor {
        anchor.set_href(&url);
        anchor.set_download(filename);
        if let Some(body) = document.body() {
            let _ = body.append_child(&anchor);
        }
        anchor.click();
        anchor.remove();
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(not(target_arch = "wasm32"))]
fn deliver(html: &str, filename: &str) {
    tracing::info!(filename, bytes = html.len(), "report download skipped off-web");
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::{LegalEntry, RecordEntry, SocialEntry};

    fn sample_report() -> SearchReport {
        SearchReport {
            name: "Maria da Silva".into(),
            timestamp: None,
            sources_searched: 12,
            profiles_found: 3,
            social_media: vec![SocialEntry {
                platform: Some("Instagram".into()),
                profile: Some("@maria".into()),
                status: Some("Public profile".into()),
                url: Some("https://instagram.com/maria".into()),
                note: None,
            }],
            legal_records: vec![LegalEntry {
                kind: Some("Civil suit".into()),
                title: Some("Case 0001234-56.2020".into()),
                description: Some("Consumer dispute, closed in 2021".into()),
                source: Some("TJSP".into()),
                note: Some("Manual verification recommended".into()),
            }],
            professional: vec![],
            family_info: vec![],
            public_records: vec![RecordEntry {
                title: Some("Transparency portal entry".into()),
                snippet: Some("Listed in a municipal supplier registry".into()),
                source: Some("portaltransparencia.gov.br".into()),
            }],
            confidence_score: Some(72),
            risk_assessment: Some("Low".into()),
            disclaimer: "Aggregated from public sources.".into(),
        }
    }

    #[test]
    fn export_carries_every_section_and_item() {
        let report = sample_report();
        let html = standalone_html(&report);

        let sections = report.sections();
        for section in &sections {
            assert!(html.contains(section.category.label()));
            for item in &section.items {
                assert!(html.contains(&escape_html(&item.title)), "{}", item.title);
                assert!(html.contains(&escape_html(&item.detail)), "{}", item.detail);
            }
        }

        let total_items: usize = sections.iter().map(|s| s.items.len()).sum();
        assert_eq!(html.matches("<div class=\"section\"").count(), sections.len());
        assert_eq!(html.matches("<div class=\"item\">").count(), total_items);

        // Empty categories get no heading.
        assert!(!html.contains("Business affiliations"));
        assert!(!html.contains("Family information"));
    }

    #[test]
    fn export_includes_summary_disclaimer_and_footer() {
        let html = standalone_html(&sample_report());
        assert!(html.contains("Sources searched: <strong>12</strong>"));
        assert!(html.contains("Profiles found: <strong>3</strong>"));
        assert!(html.contains("Confidence score: <strong>72%</strong>"));
        assert!(html.contains("Risk assessment: <strong>Low</strong>"));
        assert!(html.contains("Aggregated from public sources."));
        assert!(html.contains(VERIFICATION_WARNING));
        assert!(html.contains("© backcheck. All rights reserved."));
    }

    #[test]
    fn backend_markup_is_escaped() {
        let mut report = sample_report();
        report.name = "<script>alert(1)</script>".into();
        report.legal_records[0].description = Some("a < b & \"c\"".into());

        let html = standalone_html(&report);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &lt; b &amp; &quot;c&quot;"));
    }

    #[test]
    fn non_web_urls_are_dropped_from_the_export() {
        let mut report = sample_report();
        report.social_media[0].url = Some("javascript:alert(1)".into());

        let html = standalone_html(&report);
        assert!(!html.contains("javascript:alert(1)"));
        assert!(!html.contains("href=\"javascript:"));

        report.social_media[0].url = Some("https://instagram.com/maria".into());
        let html = standalone_html(&report);
        assert!(html.contains("href=\"https://instagram.com/maria\""));
    }

    #[test]
    fn filename_slugs_the_name() {
        assert_eq!(
            report_filename("Maria da Silva", 1700000000000),
            "report-Maria-da-Silva-1700000000000.html"
        );
        assert_eq!(
            report_filename("  spaced   out  ", 7),
            "report-spaced-out-7.html"
        );
        assert_eq!(report_filename("a/b\\c:d", 7), "report-abcd-7.html");
        assert_eq!(report_filename("", 7), "report-7.html");
        assert_eq!(report_filename("///", 7), "report-7.html");
    }
}
