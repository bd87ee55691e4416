//! Code-fence rendering delegation.
//!
//! The tab renderer does not highlight code itself: each pane is rendered
//! through the host processor's code-fence renderer, injected as a
//! [`FenceRenderer`]. The default [`HtmlFence`] produces the same
//! `<pre><code class="language-...">` markup the host uses for ordinary
//! fenced blocks, so tab panes and standalone fences stay visually identical.

use std::fmt::Write;

use crate::escape::escape_html;

/// Error raised by a fence-renderer delegate.
///
/// The tab renderer catches these and falls back to an unhighlighted escaped
/// rendering; a failing highlighter never fails a page build.
#[derive(Debug, thiserror::Error)]
pub enum FenceError {
    /// The delegate does not handle this language.
    #[error("unsupported highlight language: {0}")]
    UnsupportedLanguage(String),
    /// The underlying highlighter failed.
    #[error("highlighter error: {0}")]
    Highlighter(String),
}

/// Capability for rendering one fenced code block with a language tag.
pub trait FenceRenderer {
    /// Render `code` as an HTML code block highlighted as `lang`.
    fn render_fence(&self, lang: &str, code: &str) -> Result<String, FenceError>;
}

/// Default fence renderer producing semantic HTML5 code blocks.
pub struct HtmlFence;

impl FenceRenderer for HtmlFence {
    fn render_fence(&self, lang: &str, code: &str) -> Result<String, FenceError> {
        let mut out = String::with_capacity(code.len() + 64);
        if lang.is_empty() {
            let _ = write!(out, "<pre><code>{}</code></pre>", escape_html(code));
        } else {
            let _ = write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(code)
            );
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_fence_with_language() {
        let html = HtmlFence.render_fence("bash", "GET /products").unwrap();
        assert_eq!(
            html,
            r#"<pre><code class="language-bash">GET /products</code></pre>"#
        );
    }

    #[test]
    fn test_html_fence_without_language() {
        let html = HtmlFence.render_fence("", "plain").unwrap();
        assert_eq!(html, "<pre><code>plain</code></pre>");
    }

    #[test]
    fn test_html_fence_escapes_code() {
        let html = HtmlFence.render_fence("php", "<?php echo 1 && 2;").unwrap();
        assert!(html.contains("&lt;?php echo 1 &amp;&amp; 2;"));
        assert!(!html.contains("<?php"));
    }

    #[test]
    fn test_html_fence_escapes_language() {
        let html = HtmlFence.render_fence("a<b", "x").unwrap();
        assert!(html.contains(r#"class="language-a&lt;b""#));
    }
}
