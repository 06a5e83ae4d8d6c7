//! Statecraft: declarative finite state machines
//!
//! A machine is described once, as a graph of named states and named
//! transitions, and then run by any number of instances that each track
//! their own current state.
//!
//! # Core Concepts
//!
//! - **Definition**: Ordered states and transitions, validated as they are declared
//! - **Builder**: A scope where naming a state declares it, with groups for fan-out
//! - **Machine**: An instance holding a shared definition and its current state
//! - **Diagram**: DOT export of a definition
//!
//! # Example
//!
//! ```rust
//! use statecraft::{define_machine, MachineError};
//! use std::sync::Arc;
//!
//! let definition = Arc::new(define_machine! {
//!     group creative_process {
//!         no_idea => idea: get_inspired;
//!         idea => working: get_motivated;
//!         idea => panic: procrastinate;
//!     }
//!     working => success: just_do_it;
//!     panic => success: crunch_it;
//!     creative_process => failure: give_up;
//! }?);
//!
//! let mut machine = definition.instantiate()?;
//! assert_eq!(machine.state(), "no_idea");
//!
//! machine.invoke("get_inspired")?;
//! machine.invoke("procrastinate")?;
//! machine.invoke("give_up")?;
//! assert_eq!(machine.state(), "failure");
//! assert!(machine.is_terminal());
//!
//! assert!(matches!(
//!     machine.invoke("crunch_it"),
//!     Err(MachineError::BadTransition { .. })
//! ));
//! # Ok::<(), MachineError>(())
//! ```

pub mod builder;
pub mod core;
pub mod diagram;
pub mod machine;

// Re-export commonly used types
pub use self::builder::{GroupHandle, Scope, StateHandle};
pub use self::core::{StateId, Transition, TransitionName};
pub use self::machine::{Machine, MachineDefinition, MachineError};
