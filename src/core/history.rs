//! Instance transition history.
//!
//! Provides immutable tracking of the transitions a machine instance has
//! performed, in the order they happened.

use super::state::{StateId, TransitionName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful invocation.
///
/// # Example
///
/// ```rust
/// use statecraft::core::StateTransition;
/// use chrono::Utc;
///
/// let step = StateTransition {
///     transition: "get_inspired".into(),
///     from: "no_idea".into(),
///     to: "idea".into(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(step.to, "idea");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The transition that was invoked
    pub transition: TransitionName,
    /// The state being transitioned from
    pub from: StateId,
    /// The state being transitioned to
    pub to: StateId,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     transition: "get_inspired".into(),
///     from: "no_idea".into(),
///     to: "idea".into(),
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     transition: "get_motivated".into(),
///     from: "idea".into(),
///     to: "working".into(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // no_idea -> idea -> working
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history but returns a new one
    /// with the transition added.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to`
    /// state of each transition. An empty history has an empty path.
    pub fn get_path(&self) -> Vec<&StateId> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Names of the invoked transitions, oldest first.
    pub fn invoked(&self) -> Vec<&TransitionName> {
        self.transitions.iter().map(|t| &t.transition).collect()
    }

    /// Time between the first and the last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
