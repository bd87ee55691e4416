//! Bound-fragment bookkeeping.

use std::collections::HashMap;

use crate::fragment::{FragmentState, TabFragment};

/// Maps fragment identity to its bound state.
///
/// This is the explicit replacement for stashing an "already initialized"
/// flag on the element itself: the controller owns the registry, binding is
/// idempotent, and navigation clears it wholesale.
#[derive(Debug, Default)]
pub struct BindingRegistry {
    states: HashMap<usize, FragmentState>,
}

impl BindingRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a fragment, creating its initial state.
    ///
    /// Idempotent: returns `false` and leaves existing state untouched when
    /// the fragment is already bound.
    pub(crate) fn bind(&mut self, fragment: &TabFragment) -> bool {
        if self.states.contains_key(&fragment.id) {
            return false;
        }
        self.states
            .insert(fragment.id, FragmentState::new(fragment.pane_count()));
        true
    }

    /// Whether the fragment is bound.
    #[must_use]
    pub fn is_bound(&self, id: usize) -> bool {
        self.states.contains_key(&id)
    }

    /// Number of bound fragments.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn state(&self, id: usize) -> Option<&FragmentState> {
        self.states.get(&id)
    }

    pub(crate) fn state_mut(&mut self, id: usize) -> Option<&mut FragmentState> {
        self.states.get_mut(&id)
    }

    pub(crate) fn states_mut(&mut self) -> impl Iterator<Item = &mut FragmentState> {
        self.states.values_mut()
    }

    pub(crate) fn clear(&mut self) {
        self.states.clear();
    }
}
