//! The tab controller: discovery, event dispatch, actions.

use std::collections::HashMap;
use std::time::Duration;

use crate::clipboard::Clipboard;
use crate::discover::FragmentSource;
use crate::events::{Key, target_index};
use crate::fragment::{FragmentState, TabFragment};
use crate::registry::BindingRegistry;
use crate::window::{PLAYGROUND_WINDOW_FEATURES, PLAYGROUND_WINDOW_NAME, WindowOpener, playground_href};

/// Fixed delay the host should wait before re-running discovery.
pub const DISCOVERY_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Retry ceiling for empty discovery scans.
pub const MAX_DISCOVERY_ATTEMPTS: u32 = 5;

/// How long the copy acknowledgement stays visible.
pub const COPY_FEEDBACK_MS: u64 = 1500;

/// Result of one discovery scan.
#[derive(Debug, PartialEq, Eq)]
pub enum Discovery {
    /// Fragments are mounted; `newly_bound` of them were bound by this scan.
    Bound {
        /// Fragments bound for the first time by this scan.
        newly_bound: usize,
    },
    /// Nothing mounted yet; scan again after the given delay.
    RetryAfter(Duration),
    /// Retry budget exhausted; the page simply has no tab fragments.
    Exhausted,
}

/// Controller owning the state of every bound tab fragment on a page.
///
/// All methods are synchronous and non-blocking; the host event loop drives
/// them. Fragment lookups for ids that were never bound return `None` and
/// change nothing.
pub struct TabController {
    registry: BindingRegistry,
    fragments: HashMap<usize, TabFragment>,
    playground_url: String,
    empty_scans: u32,
}

impl TabController {
    /// Create a controller; `playground_url` is where the open-in-playground
    /// action points (configured, e.g. `{graphql_base}/graphql`).
    #[must_use]
    pub fn new(playground_url: impl Into<String>) -> Self {
        Self {
            registry: BindingRegistry::new(),
            fragments: HashMap::new(),
            playground_url: playground_url.into(),
            empty_scans: 0,
        }
    }

    /// Run one discovery scan over `source`, binding every fragment not yet
    /// bound. Safe to call repeatedly; already-bound fragments are skipped.
    pub fn discover(&mut self, source: &mut dyn FragmentSource) -> Discovery {
        let found = source.fragments();

        if found.is_empty() {
            self.empty_scans += 1;
            if self.empty_scans >= MAX_DISCOVERY_ATTEMPTS {
                tracing::debug!(
                    attempts = self.empty_scans,
                    "no tab fragments found, giving up"
                );
                return Discovery::Exhausted;
            }
            tracing::debug!(attempts = self.empty_scans, "no tab fragments yet, retrying");
            return Discovery::RetryAfter(DISCOVERY_RETRY_DELAY);
        }

        self.empty_scans = 0;
        let mut newly_bound = 0;
        for fragment in found {
            if self.registry.bind(&fragment) {
                tracing::debug!(id = fragment.id, panes = fragment.pane_count(), "bound tab fragment");
                self.fragments.insert(fragment.id, fragment);
                newly_bound += 1;
            }
        }
        Discovery::Bound { newly_bound }
    }

    /// Reset bookkeeping after navigation replaced the page content.
    pub fn on_navigate(&mut self) {
        self.registry.clear();
        self.fragments.clear();
        self.empty_scans = 0;
    }

    /// Handle a click on selector button `index`. Returns the new active
    /// index, or `None` for unbound fragments and out-of-range indices.
    pub fn click(&mut self, fragment: usize, index: usize) -> Option<usize> {
        let state = self.registry.state_mut(fragment)?;
        state.activate(index).then_some(index)
    }

    /// Handle `key` pressed on the selector button at `source_index`.
    /// Arrow keys wrap; Enter/Space re-activate the source button.
    pub fn key(&mut self, fragment: usize, source_index: usize, key: Key) -> Option<usize> {
        let state = self.registry.state_mut(fragment)?;
        let count = state.pane_count();
        if source_index >= count || count == 0 {
            return None;
        }
        let target = target_index(key, source_index, count);
        state.activate(target).then_some(target)
    }

    /// Active pane index of a bound fragment.
    #[must_use]
    pub fn active_index(&self, fragment: usize) -> Option<usize> {
        self.registry.state(fragment).map(FragmentState::active)
    }

    /// Code text of the active pane.
    #[must_use]
    pub fn active_code(&self, fragment: usize) -> Option<&str> {
        let active = self.active_index(fragment)?;
        let pane = self.fragments.get(&fragment)?.panes.get(active)?;
        Some(&pane.code)
    }

    /// Copy the active pane's code.
    ///
    /// Tries `primary` first, then `fallback`; both failing is swallowed.
    /// On success the copy acknowledgement shows until
    /// `now_ms + COPY_FEEDBACK_MS`. Returns whether a write succeeded.
    pub fn copy_active(
        &mut self,
        fragment: usize,
        primary: &mut dyn Clipboard,
        fallback: &mut dyn Clipboard,
        now_ms: u64,
    ) -> bool {
        let Some(code) = self.active_code(fragment).map(str::to_owned) else {
            return false;
        };

        let copied = match primary.write_text(&code) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "primary clipboard failed, trying fallback");
                match fallback.write_text(&code) {
                    Ok(()) => true,
                    Err(err) => {
                        tracing::debug!(%err, "fallback copy failed");
                        false
                    }
                }
            }
        };

        if copied && let Some(state) = self.registry.state_mut(fragment) {
            state.set_copy_feedback(now_ms + COPY_FEEDBACK_MS);
        }
        copied
    }

    /// Whether the copy acknowledgement is showing for a fragment.
    #[must_use]
    pub fn copy_feedback_active(&self, fragment: usize, now_ms: u64) -> bool {
        self.registry
            .state(fragment)
            .is_some_and(|state| state.copy_feedback_active(now_ms))
    }

    /// Clear expired copy acknowledgements. The host calls this from its
    /// timer; feedback toggling is the only time-driven transition.
    pub fn tick(&mut self, now_ms: u64) {
        for state in self.registry.states_mut() {
            state.clear_expired_feedback(now_ms);
        }
    }

    /// Open the active pane's code in the playground window. Returns the
    /// opened URL.
    pub fn open_playground(
        &mut self,
        fragment: usize,
        opener: &mut dyn WindowOpener,
    ) -> Option<String> {
        let code = self.active_code(fragment)?;
        let url = playground_href(&self.playground_url, code);
        opener.open(&url, PLAYGROUND_WINDOW_NAME, PLAYGROUND_WINDOW_FEATURES);
        Some(url)
    }

    /// Toggle the description panel. Returns the new visibility.
    pub fn toggle_description(&mut self, fragment: usize) -> Option<bool> {
        Some(self.registry.state_mut(fragment)?.toggle_description())
    }

    /// Whether the description panel is currently shown.
    #[must_use]
    pub fn description_visible(&self, fragment: usize) -> Option<bool> {
        self.registry
            .state(fragment)
            .map(FragmentState::description_visible)
    }

    /// Whether a fragment is bound.
    #[must_use]
    pub fn is_bound(&self, fragment: usize) -> bool {
        self.registry.is_bound(fragment)
    }

    /// Number of bound fragments.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.registry.bound_count()
    }
}
