//! Fragment discovery.
//!
//! [`FragmentSource`] abstracts "what tab fragments are mounted right now";
//! [`HtmlSource`] implements it over a rendered page string by parsing the
//! fixed markup contract the build-time renderer emits (container class,
//! indexed buttons and panes, code text).

use crate::fragment::{Pane, TabFragment};

/// Yields the tab fragments currently mounted on the page.
pub trait FragmentSource {
    /// Scan for fragments. Called repeatedly; each call reflects what is
    /// mounted at that moment.
    fn fragments(&mut self) -> Vec<TabFragment>;
}

const CONTAINER_OPEN: &str = r#"<div class="code-tabs-container""#;
const BUTTON_OPEN: &str = r#"<button class="code-tab"#;
const PANE_OPEN: &str = r#"<div class="tab-content"#;
const ID_PREFIX: &str = "code-tabs-";

/// Fragment source over a rendered HTML page.
///
/// Containers without a parsable id or without any complete button/pane pair
/// are skipped; discovery never fails, it just finds fewer fragments.
pub struct HtmlSource<'a> {
    html: &'a str,
}

impl<'a> HtmlSource<'a> {
    /// Create a source scanning `html`.
    #[must_use]
    pub fn new(html: &'a str) -> Self {
        Self { html }
    }
}

impl FragmentSource for HtmlSource<'_> {
    fn fragments(&mut self) -> Vec<TabFragment> {
        let mut fragments = Vec::new();
        let mut remaining = self.html;

        while let Some(start) = remaining.find(CONTAINER_OPEN) {
            let container = &remaining[start..];
            // A container's markup runs until the next container (or the end
            // of the page); the matching close tag is not tracked.
            let end = container[CONTAINER_OPEN.len()..]
                .find(CONTAINER_OPEN)
                .map_or(container.len(), |idx| CONTAINER_OPEN.len() + idx);

            if let Some(fragment) = parse_container(&container[..end]) {
                fragments.push(fragment);
            }
            remaining = &container[end..];
        }

        fragments
    }
}

/// Parse one container slice into a fragment descriptor.
fn parse_container(slice: &str) -> Option<TabFragment> {
    let open_tag = &slice[..=slice.find('>')?];
    let id = attr_value(open_tag, "id")?
        .strip_prefix(ID_PREFIX)?
        .parse()
        .ok()?;

    let buttons = parse_buttons(slice);
    let mut panes = Vec::with_capacity(buttons.len());
    for (index, label, language) in buttons {
        let Some(code) = pane_code(slice, index) else {
            tracing::debug!(id, index, "button without matching pane, skipping");
            continue;
        };
        panes.push(Pane {
            label,
            language,
            code,
        });
    }

    if panes.is_empty() {
        return None;
    }
    Some(TabFragment { id, panes })
}

/// Collect `(index, label, language)` for each selector button, in order.
fn parse_buttons(slice: &str) -> Vec<(usize, String, String)> {
    let mut buttons = Vec::new();
    let mut remaining = slice;

    while let Some(start) = remaining.find(BUTTON_OPEN) {
        let button = &remaining[start..];
        let Some(tag_end) = button.find('>') else {
            break;
        };
        let tag = &button[..=tag_end];

        // Only selector buttons carry an index
        if let Some(index) = attr_value(tag, "data-index").and_then(|v| v.parse().ok()) {
            let language = attr_value(tag, "data-lang").unwrap_or_default().to_owned();
            let label = button[tag_end + 1..]
                .find("</button>")
                .map(|end| unescape_html(&button[tag_end + 1..tag_end + 1 + end]));
            if let Some(label) = label {
                buttons.push((index, label, language));
            }
        }

        remaining = &button[tag_end + 1..];
    }

    buttons
}

/// Extract the unescaped code text of the pane at `index`.
fn pane_code(slice: &str, index: usize) -> Option<String> {
    let mut remaining = slice;

    while let Some(start) = remaining.find(PANE_OPEN) {
        let pane = &remaining[start..];
        let tag_end = pane.find('>')?;
        let tag = &pane[..=tag_end];

        if attr_value(tag, "data-index").and_then(|v| v.parse::<usize>().ok()) == Some(index) {
            let body = &pane[tag_end + 1..];
            let code_start = body.find("<code")?;
            let code_open_end = body[code_start..].find('>')? + code_start;
            let code_close = body[code_open_end..].find("</code>")? + code_open_end;
            return Some(unescape_html(&body[code_open_end + 1..code_close]));
        }

        remaining = &pane[tag_end + 1..];
    }

    None
}

/// Extract an attribute value from an opening tag.
fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(r#"{name}=""#);
    let value_start = tag.find(&needle)? + needle.len();
    let value_end = tag[value_start..].find('"')? + value_start;
    Some(&tag[value_start..value_end])
}

/// Reverse the renderer's HTML escaping of text content.
fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let entity = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
        ]
        .into_iter()
        .find_map(|(entity, ch)| rest.strip_prefix(entity).map(|r| (r, ch)));

        match entity {
            Some((after, ch)) => {
                out.push(ch);
                rest = after;
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
