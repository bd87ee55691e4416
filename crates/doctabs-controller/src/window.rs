//! Playground window opening.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters percent-encoded in the query parameter.
///
/// Matches `encodeURIComponent`: everything except ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Name of the playground window; reusing it keeps one playground tab open.
pub(crate) const PLAYGROUND_WINDOW_NAME: &str = "playground";

/// Window features for the playground popup.
pub(crate) const PLAYGROUND_WINDOW_FEATURES: &str = "width=1200,height=800";

/// Capability for opening a named browser window.
pub trait WindowOpener {
    /// Open `url` in a window named `name` with the given feature string.
    fn open(&mut self, url: &str, name: &str, features: &str);
}

/// Build the playground link carrying `code` as its `query` parameter.
#[must_use]
pub fn playground_href(playground_url: &str, code: &str) -> String {
    format!(
        "{playground_url}?query={}",
        utf8_percent_encode(code, QUERY_COMPONENT)
    )
}
