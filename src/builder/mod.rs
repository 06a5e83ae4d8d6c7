//! Builder API for declaring machines.
//!
//! A definition block receives a [`Scope`]. Naming a state through the
//! scope declares it the first time and returns the same [`StateHandle`]
//! afterwards. [`Scope::group`] collects the states declared in a nested
//! block into a [`GroupHandle`], whose `leads_to` declares one transition
//! per member.
//!
//! # Example
//!
//! ```rust
//! use statecraft::{MachineDefinition, MachineError};
//!
//! let definition = MachineDefinition::define(|m| {
//!     let creative_process = m.group("creative_process", |g| {
//!         let no_idea = g.state("no_idea")?;
//!         let idea = g.state("idea")?;
//!         no_idea.leads_to(&idea, "get_inspired")?;
//!         Ok(())
//!     })?;
//!     let failure = m.state("failure")?;
//!     creative_process.leads_to(&failure, "give_up")?;
//!     Ok(())
//! })?;
//!
//! assert_eq!(definition.states(), ["no_idea", "idea", "failure"]);
//! assert_eq!(definition.transitions().len(), 3);
//! # Ok::<(), MachineError>(())
//! ```

mod handle;
pub mod macros;
mod scope;

pub use handle::{GroupHandle, StateHandle};
pub use scope::{Binding, Scope};
