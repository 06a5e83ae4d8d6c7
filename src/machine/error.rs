//! Errors raised while defining or running a machine.

use crate::core::{StateId, TransitionName};
use thiserror::Error;

/// Errors that can occur when declaring a machine or invoking a transition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    /// A transition declaration referenced a state that is not declared.
    #[error("Transition '{transition}' references undeclared state '{state}'")]
    InvalidNode {
        transition: TransitionName,
        state: StateId,
    },

    /// No transition with this name leaves the instance's current state.
    #[error("Transition '{transition}' is not available from state '{state}'")]
    BadTransition {
        transition: TransitionName,
        state: StateId,
    },

    #[error("Machine has no states. Declare at least one state before creating an instance")]
    NoStates,

    /// A builder name bound to a group was used where a state is required.
    #[error("'{name}' names a group, not a state")]
    NotAState { name: String },

    /// A builder name bound to a state was used to declare a group.
    #[error("'{name}' names a state, not a group")]
    NotAGroup { name: String },
}
