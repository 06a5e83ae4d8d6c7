//! Transition records.

use super::state::{StateId, TransitionName};
use serde::{Deserialize, Serialize};

/// A named, directed edge between two declared states.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub name: TransitionName,
    pub from: StateId,
    pub to: StateId,
}

impl Transition {
    pub fn new(
        name: impl Into<TransitionName>,
        from: impl Into<StateId>,
        to: impl Into<StateId>,
    ) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Check if this edge is the one selected by invoking `name` while in
    /// `current` (pure). The label alone is not enough: the same label may
    /// leave from several states.
    pub fn matches(&self, name: &str, current: &StateId) -> bool {
        self.name == name && self.from == *current
    }

    /// Check if this edge leaves from `state`.
    pub fn leaves(&self, state: &StateId) -> bool {
        self.from == *state
    }
}
