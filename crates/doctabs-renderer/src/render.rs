//! HTML rendering for tab blocks.
//!
//! Produces the fixed markup contract the client controller binds to:
//!
//! ```html
//! <div class="code-tabs-container" id="code-tabs-0">
//!   <div class="code-tabs-header" role="tablist">
//!     <button class="code-tab active" role="tab" data-index="0"
//!             data-lang="bash" aria-selected="true" tabindex="0">curl</button>
//!     <button class="code-tab" role="tab" data-index="1"
//!             data-lang="php" aria-selected="false" tabindex="-1">PHP</button>
//!     <div class="code-tabs-actions">...</div>
//!   </div>
//!   <div class="tab-content active" data-index="0"><!-- code --></div>
//!   <div class="tab-content" data-index="1" hidden><!-- code --></div>
//!   <div class="description-panel" hidden></div>
//! </div>
//! ```
//!
//! The action buttons (copy, playground, description) carry no index: they
//! act on whichever pane is active when clicked. The renderer runs at build
//! time and performs no DOM wiring.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::extract::TabEntry;
use crate::highlight::FenceRenderer;
use crate::language::language_for_label;

// Action icons (GitHub Octicons-style, 16x16)
const SVG_COPY: &str = r#"<svg class="action-icon" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M0 6.75C0 5.784.784 5 1.75 5h1.5a.75.75 0 0 1 0 1.5h-1.5a.25.25 0 0 0-.25.25v7.5c0 .138.112.25.25.25h7.5a.25.25 0 0 0 .25-.25v-1.5a.75.75 0 0 1 1.5 0v1.5A1.75 1.75 0 0 1 9.25 16h-7.5A1.75 1.75 0 0 1 0 14.25Z"></path><path d="M5 1.75C5 .784 5.784 0 6.75 0h7.5C15.216 0 16 .784 16 1.75v7.5A1.75 1.75 0 0 1 14.25 11h-7.5A1.75 1.75 0 0 1 5 9.25Zm1.75-.25a.25.25 0 0 0-.25.25v7.5c0 .138.112.25.25.25h7.5a.25.25 0 0 0 .25-.25v-7.5a.25.25 0 0 0-.25-.25Z"></path></svg>"#;
const SVG_PLAY: &str = r#"<svg class="action-icon" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M8 0a8 8 0 1 1 0 16A8 8 0 0 1 8 0ZM1.5 8a6.5 6.5 0 1 0 13 0 6.5 6.5 0 0 0-13 0Zm4.879-2.773 4.264 2.559a.25.25 0 0 1 0 .428l-4.264 2.559A.25.25 0 0 1 6 10.559V5.442a.25.25 0 0 1 .379-.215Z"></path></svg>"#;
const SVG_INFO: &str = r#"<svg class="action-icon" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M0 8a8 8 0 1 1 16 0A8 8 0 0 1 0 8Zm8-6.5a6.5 6.5 0 1 0 0 13 6.5 6.5 0 0 0 0-13ZM6.5 7.75A.75.75 0 0 1 7.25 7h1a.75.75 0 0 1 .75.75v2.75h.25a.75.75 0 0 1 0 1.5h-2a.75.75 0 0 1 0-1.5h.25v-2h-.25a.75.75 0 0 1-.75-.75ZM8 6a1 1 0 1 1 0-2 1 1 0 0 1 0 2Z"></path></svg>"#;

/// Build-time renderer for one tab block.
///
/// Highlighting is delegated to the injected [`FenceRenderer`]; a failing
/// delegate degrades that pane to escaped plain text.
pub struct TabBlockRenderer<'a> {
    fence: &'a dyn FenceRenderer,
}

impl<'a> TabBlockRenderer<'a> {
    /// Create a renderer delegating code highlighting to `fence`.
    #[must_use]
    pub fn new(fence: &'a dyn FenceRenderer) -> Self {
        Self { fence }
    }

    /// Render `entries` as one self-contained fragment.
    ///
    /// `group_id` distinguishes multiple tab blocks on the same page; index 0
    /// is marked active in both the button row and the panes.
    #[must_use]
    pub fn render(&self, entries: &[TabEntry], group_id: usize) -> String {
        let mut out = String::with_capacity(entries.iter().map(|e| e.code.len()).sum::<usize>() + 1024);

        let _ = write!(
            out,
            r#"<div class="code-tabs-container" id="code-tabs-{group_id}">"#
        );

        // Header: selector buttons, then the shared action buttons
        out.push_str(r#"<div class="code-tabs-header" role="tablist">"#);
        for (idx, entry) in entries.iter().enumerate() {
            let active = idx == 0;
            let _ = write!(
                out,
                r#"<button class="code-tab{}" role="tab" data-index="{idx}" data-lang="{}" aria-selected="{active}" tabindex="{}">{}</button>"#,
                if active { " active" } else { "" },
                escape_html(&language_for_label(&entry.label)),
                if active { "0" } else { "-1" },
                escape_html(&entry.label)
            );
        }
        out.push_str(r#"<div class="code-tabs-actions">"#);
        let _ = write!(
            out,
            r#"<button class="btn-copy" type="button" title="Copy to clipboard" aria-label="Copy to clipboard">{SVG_COPY}</button>"#
        );
        let _ = write!(
            out,
            r#"<button class="btn-playground" type="button" title="Open in playground" aria-label="Open in playground">{SVG_PLAY}</button>"#
        );
        let _ = write!(
            out,
            r#"<button class="btn-description" type="button" title="Toggle description" aria-label="Toggle description">{SVG_INFO}</button>"#
        );
        out.push_str("</div></div>");

        // One pane per entry; index 0 visible, the rest hidden
        for (idx, entry) in entries.iter().enumerate() {
            let active = idx == 0;
            let _ = write!(
                out,
                r#"<div class="tab-content{}" data-index="{idx}"{}>"#,
                if active { " active" } else { "" },
                if active { "" } else { " hidden" }
            );
            out.push_str(&self.render_code(&entry.label, &entry.code));
            out.push_str("</div>");
        }

        out.push_str(r#"<div class="description-panel" hidden></div>"#);
        out.push_str("</div>");
        out
    }

    /// Render one pane's code, falling back to escaped text when the
    /// delegate errors so the page build never aborts.
    fn render_code(&self, label: &str, code: &str) -> String {
        let lang = language_for_label(label);
        self.fence
            .render_fence(&lang, code)
            .unwrap_or_else(|_| format!("<pre><code>{}</code></pre>", escape_html(code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{FenceError, HtmlFence};

    fn entry(label: &str, code: &str) -> TabEntry {
        TabEntry {
            label: label.to_owned(),
            code: code.to_owned(),
        }
    }

    fn render(entries: &[TabEntry]) -> String {
        TabBlockRenderer::new(&HtmlFence).render(entries, 0)
    }

    #[test]
    fn test_container_and_group_id() {
        let html = TabBlockRenderer::new(&HtmlFence).render(&[entry("curl", "GET /x")], 7);
        assert!(html.starts_with(r#"<div class="code-tabs-container" id="code-tabs-7">"#));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_button_and_pane_counts() {
        let entries = vec![entry("curl", "a"), entry("PHP", "b"), entry("Python", "c")];
        let html = render(&entries);
        assert_eq!(html.matches(r#"<button class="code-tab"#).count(), 3);
        assert_eq!(html.matches(r#"<div class="tab-content"#).count(), 3);
    }

    #[test]
    fn test_first_index_active() {
        let html = render(&[entry("curl", "a"), entry("PHP", "b")]);
        assert!(html.contains(
            r#"<button class="code-tab active" role="tab" data-index="0" data-lang="bash" aria-selected="true" tabindex="0">curl</button>"#
        ));
        assert!(html.contains(
            r#"<button class="code-tab" role="tab" data-index="1" data-lang="php" aria-selected="false" tabindex="-1">PHP</button>"#
        ));
        assert!(html.contains(r#"<div class="tab-content active" data-index="0">"#));
        assert!(html.contains(r#"<div class="tab-content" data-index="1" hidden>"#));
    }

    #[test]
    fn test_highlighting_delegated() {
        let html = render(&[entry("curl", "GET /products")]);
        assert!(html.contains(r#"<pre><code class="language-bash">GET /products</code></pre>"#));
    }

    #[test]
    fn test_action_buttons_present_once() {
        let html = render(&[entry("curl", "a"), entry("PHP", "b")]);
        assert_eq!(html.matches(r#"class="btn-copy""#).count(), 1);
        assert_eq!(html.matches(r#"class="btn-playground""#).count(), 1);
        assert_eq!(html.matches(r#"class="btn-description""#).count(), 1);
        assert!(html.contains(r#"<div class="description-panel" hidden></div>"#));
    }

    #[test]
    fn test_label_escaped() {
        let html = render(&[entry("<script>", "x")]);
        assert!(html.contains("&lt;script&gt;</button>"));
        assert!(!html.contains("><script></button>"));
    }

    struct FailingFence;

    impl FenceRenderer for FailingFence {
        fn render_fence(&self, lang: &str, _code: &str) -> Result<String, FenceError> {
            Err(FenceError::UnsupportedLanguage(lang.to_owned()))
        }
    }

    #[test]
    fn test_fallback_on_delegate_error() {
        let html = TabBlockRenderer::new(&FailingFence).render(&[entry("curl", "a < b")], 0);
        assert!(html.contains("<pre><code>a &lt; b</code></pre>"));
        assert!(!html.contains("language-"));
    }
}
