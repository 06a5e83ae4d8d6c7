//! The state and transition tables shared by every instance of a machine.

use crate::builder::Scope;
use crate::core::{StateId, Transition, TransitionName};
use crate::machine::error::MachineError;
use crate::machine::instance::Machine;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::sync::Arc;

/// Ordered states and transitions of a machine type.
///
/// The first declared state is the initial state of every instance.
/// A definition is mutable while it is being built. Once it is shared
/// with instances through an `Arc` it is only read.
///
/// # Example
///
/// ```rust
/// use statecraft::{MachineDefinition, MachineError};
///
/// let definition = MachineDefinition::define(|m| {
///     let working = m.state("working")?;
///     let success = m.state("success")?;
///     working.leads_to(&success, "just_do_it")?;
///     Ok(())
/// })?;
///
/// assert_eq!(definition.states(), ["working", "success"]);
/// assert_eq!(definition.initial_state().unwrap(), "working");
/// # Ok::<(), MachineError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DefinitionTable")]
pub struct MachineDefinition {
    states: Vec<StateId>,
    transitions: Vec<Transition>,
}

/// Unvalidated wire form, replayed through `add_state`/`add_transition`.
#[derive(Deserialize)]
struct DefinitionTable {
    #[serde(default)]
    states: Vec<StateId>,
    #[serde(default)]
    transitions: Vec<Transition>,
}

impl TryFrom<DefinitionTable> for MachineDefinition {
    type Error = MachineError;

    fn try_from(table: DefinitionTable) -> Result<Self, Self::Error> {
        let mut definition = Self::new();
        for state in table.states {
            definition.add_state(state);
        }
        for transition in table.transitions {
            definition.add_transition(transition.name, transition.from, transition.to)?;
        }
        Ok(definition)
    }
}

impl MachineDefinition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a definition by running `block` against a fresh builder scope.
    pub fn define<F>(block: F) -> Result<Self, MachineError>
    where
        F: for<'d> FnOnce(&mut Scope<'d>) -> Result<(), MachineError>,
    {
        let mut definition = Self::new();
        definition.extend(block)?;
        Ok(definition)
    }

    /// Run `block` against a top-level builder scope bound to this
    /// definition.
    ///
    /// Declarations made before a failing one stay registered. They also
    /// stay when `block` panics.
    pub fn extend<F>(&mut self, block: F) -> Result<(), MachineError>
    where
        F: for<'d> FnOnce(&mut Scope<'d>) -> Result<(), MachineError>,
    {
        let building = RefCell::new(std::mem::take(self));
        let guard = Restore {
            target: self,
            building,
        };
        let result = block(&mut Scope::new(&guard.building));
        result
    }

    /// Declare a state. Declaring a known state again is a no-op.
    pub fn add_state(&mut self, name: impl Into<StateId>) -> StateId {
        let name = name.into();
        if !self.has_state(name.as_str()) {
            tracing::debug!(state = %name, "registered state");
            self.states.push(name.clone());
        }
        name
    }

    /// Declare a transition between two declared states.
    ///
    /// Fails with [`MachineError::InvalidNode`] without touching the table
    /// when either endpoint is unknown. An edge with the same name and
    /// source as an earlier one is kept but can never be selected.
    pub fn add_transition(
        &mut self,
        name: impl Into<TransitionName>,
        from: impl Into<StateId>,
        to: impl Into<StateId>,
    ) -> Result<TransitionName, MachineError> {
        let transition = Transition::new(name, from, to);
        self.check_endpoints(&transition)?;

        if let Some(earlier) = self.find_transition(transition.name.as_str(), &transition.from) {
            tracing::warn!(
                transition = %transition.name,
                from = %transition.from,
                to = %transition.to,
                earlier_to = %earlier.to,
                "transition is shadowed by an earlier declaration"
            );
        }

        tracing::debug!(
            transition = %transition.name,
            from = %transition.from,
            to = %transition.to,
            "registered transition"
        );
        let name = transition.name.clone();
        self.transitions.push(transition);
        Ok(name)
    }

    pub(crate) fn check_endpoints(&self, transition: &Transition) -> Result<(), MachineError> {
        for state in [&transition.from, &transition.to] {
            if !self.has_state(state.as_str()) {
                return Err(MachineError::InvalidNode {
                    transition: transition.name.clone(),
                    state: state.clone(),
                });
            }
        }
        Ok(())
    }

    /// Declared states in declaration order.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    /// Declared transitions in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Distinct transition names in first-declaration order. These are the
    /// names [`Machine::invoke`] accepts from at least one state.
    pub fn transition_names(&self) -> Vec<&TransitionName> {
        let mut names: Vec<&TransitionName> = Vec::new();
        for transition in &self.transitions {
            if !names.contains(&&transition.name) {
                names.push(&transition.name);
            }
        }
        names
    }

    pub fn initial_state(&self) -> Option<&StateId> {
        self.states.first()
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }

    /// The edge selected by invoking `name` from `from`: the first match in
    /// declaration order.
    pub fn find_transition(&self, name: &str, from: &StateId) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.matches(name, from))
    }

    /// Transitions leaving `state`, in declaration order.
    pub fn outgoing<'a>(&'a self, state: &'a StateId) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions.iter().filter(move |t| t.leaves(state))
    }

    /// A state is terminal when no transition leaves it under any name.
    pub fn is_terminal(&self, state: &StateId) -> bool {
        self.outgoing(state).next().is_none()
    }

    /// Create an instance positioned at the initial state.
    pub fn instantiate(self: &Arc<Self>) -> Result<Machine, MachineError> {
        Machine::new(Arc::clone(self))
    }
}

/// Puts the definition under construction back into its owner when
/// dropped, including while unwinding.
struct Restore<'a> {
    target: &'a mut MachineDefinition,
    building: RefCell<MachineDefinition>,
}

impl Drop for Restore<'_> {
    fn drop(&mut self) {
        *self.target = std::mem::take(self.building.get_mut());
    }
}
