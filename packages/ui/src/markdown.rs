//! Markdown rendering for static content pages.

use pulldown_cmark::{html, Options, Parser};

/// Convert markdown to an HTML fragment. Tables and strikethrough are
/// enabled; everything else stays at CommonMark defaults.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = markdown_to_html("# Terms of use\n\nRead before searching.");
        assert!(html.contains("<h1>Terms of use</h1>"));
        assert!(html.contains("<p>Read before searching.</p>"));
    }

    #[test]
    fn renders_lists() {
        let html = markdown_to_html("- public sources only\n- no guarantees\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>public sources only</li>"));
    }
}
