//! Machine instances.

use crate::core::{StateHistory, StateId, StateTransition, TransitionName};
use crate::machine::definition::MachineDefinition;
use crate::machine::error::MachineError;
use chrono::Utc;
use std::sync::Arc;

/// A single machine: a shared definition plus its own current state.
#[derive(Clone, Debug)]
pub struct Machine {
    definition: Arc<MachineDefinition>,
    current: StateId,
    history: StateHistory,
}

impl Machine {
    /// Create a machine in the definition's initial state.
    pub fn new(definition: Arc<MachineDefinition>) -> Result<Self, MachineError> {
        let current = definition
            .initial_state()
            .cloned()
            .ok_or(MachineError::NoStates)?;

        Ok(Self {
            definition,
            current,
            history: StateHistory::new(),
        })
    }

    /// Get current state (pure)
    pub fn state(&self) -> &StateId {
        &self.current
    }

    pub fn definition(&self) -> &Arc<MachineDefinition> {
        &self.definition
    }

    /// Get history of successful invocations (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Hand back the recorded history and start a fresh one.
    ///
    /// The current state is kept.
    pub fn take_history(&mut self) -> StateHistory {
        std::mem::take(&mut self.history)
    }

    /// Check if no transition leaves the current state (pure)
    pub fn is_terminal(&self) -> bool {
        self.definition.is_terminal(&self.current)
    }

    /// Check if `name` can be invoked from the current state (pure)
    pub fn can_invoke(&self, name: &str) -> bool {
        self.definition.find_transition(name, &self.current).is_some()
    }

    /// Distinct transition names that can be invoked from the current state.
    pub fn available_transitions(&self) -> Vec<&TransitionName> {
        let mut names: Vec<&TransitionName> = Vec::new();
        for transition in self.definition.outgoing(&self.current) {
            if !names.contains(&&transition.name) {
                names.push(&transition.name);
            }
        }
        names
    }

    /// Invoke the transition called `name`.
    ///
    /// The first declared edge with this name leaving the current state is
    /// taken. Without one, [`MachineError::BadTransition`] is returned and
    /// the machine stays where it is.
    pub fn invoke(&mut self, name: &str) -> Result<&StateId, MachineError> {
        let transition = self
            .definition
            .find_transition(name, &self.current)
            .cloned()
            .ok_or_else(|| MachineError::BadTransition {
                transition: name.into(),
                state: self.current.clone(),
            })?;

        tracing::debug!(
            transition = %transition.name,
            from = %transition.from,
            to = %transition.to,
            "transition invoked"
        );

        self.history.push(StateTransition {
            transition: transition.name,
            from: transition.from,
            to: transition.to.clone(),
            timestamp: Utc::now(),
        });
        self.current = transition.to;
        Ok(&self.current)
    }
}
