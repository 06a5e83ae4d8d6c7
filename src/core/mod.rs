//! Core machine vocabulary.
//!
//! This module contains the plain data the rest of the crate works on:
//! - State and transition identifiers
//! - Transition records
//! - Immutable per-instance history

mod history;
mod state;
mod transition;

pub use history::{StateHistory, StateTransition};
pub use state::{StateId, TransitionName};
pub use transition::Transition;
