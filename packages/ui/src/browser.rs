//! Thin browser glue: alerts, clipboard, scrolling.
//!
//! Everything here is fire-and-forget and tolerates a missing `window` or a
//! denied API. On non-web targets the functions log instead, which keeps the
//! calling code free of `cfg` blocks.

#[cfg(target_arch = "wasm32")]
use dioxus::document;

/// Serialize a Rust string into a quoted JS string literal.
#[cfg(target_arch = "wasm32")]
fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `window.alert`. Used for the failures the product surfaces as a hard stop
/// (search and purchase request errors).
pub fn blocking_alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::error!("{message}");
    }
}

/// Copy text to the clipboard. The promise is dropped; the browser completes
/// the write regardless and callers show their own confirmation.
pub fn copy_text(text: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("clipboard copy: {text}");
    }
}

/// Smooth-scroll the element with `id` into view. A missing element is fine;
/// the optional chaining makes the snippet a no-op then.
pub fn scroll_into_view(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let js = format!(
            "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth' }});",
            js_string_escape(id)
        );
        document::eval(&js);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("scroll to #{id}");
    }
}

/// Open the browser print dialog.
pub fn open_print_dialog() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("print dialog requested");
    }
}
