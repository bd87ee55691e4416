//! Headless controller for rendered code-tab fragments.
//!
//! The build step ships tab blocks as static HTML; this crate is the
//! behavior bound to them after page load. It is written against
//! capabilities, not a concrete DOM:
//!
//! - [`FragmentSource`] yields the tab fragments currently mounted
//!   ([`HtmlSource`] parses them out of a rendered page string),
//! - [`Clipboard`] performs clipboard writes (primary and fallback),
//! - [`WindowOpener`] opens the playground window.
//!
//! [`TabController`] owns all per-fragment state in a [`BindingRegistry`]
//! keyed by fragment identity. Binding is idempotent; per-element
//! "already initialized" flags do not exist in this design. Each bound
//! fragment holds exactly one active pane index at all times, starting at 0,
//! transitioning only on explicit click/keyboard events.
//!
//! Discovery tolerates asynchronously mounted content with a bounded retry:
//! a scan that finds nothing asks the host to try again after a fixed delay,
//! up to a small attempt ceiling, then gives up silently — absence of tab
//! fragments on a page is a normal condition.

mod clipboard;
mod controller;
mod discover;
mod events;
mod fragment;
mod registry;
mod window;

pub use clipboard::{Clipboard, ClipboardError, NoClipboard};
pub use controller::{
    COPY_FEEDBACK_MS, DISCOVERY_RETRY_DELAY, Discovery, MAX_DISCOVERY_ATTEMPTS, TabController,
};
pub use discover::{FragmentSource, HtmlSource};
pub use events::Key;
pub use fragment::{FragmentState, Pane, TabFragment};
pub use registry::BindingRegistry;
pub use window::{WindowOpener, playground_href};
