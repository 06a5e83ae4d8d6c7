//! Machine definitions and the instances that run them.
//!
//! A [`MachineDefinition`] holds the validated state and transition tables.
//! A [`Machine`] holds a shared reference to one definition and its own
//! current state, which only [`Machine::invoke`] changes.

mod definition;
mod error;
mod instance;

pub use definition::MachineDefinition;
pub use error::MachineError;
pub use instance::Machine;
