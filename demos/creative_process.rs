//! Creative Process State Machine
//!
//! This example declares a machine with the bare-identifier macro, walks
//! an instance through it, and prints the Graphviz description.
//!
//! Key concepts:
//! - States are declared by naming them
//! - A group fans one transition out to all of its members
//! - Invalid transitions are reported without changing state
//!
//! Run with: cargo run --example creative_process

use statecraft::diagram::{to_dot, DiagramOptions, RankDir};
use statecraft::{define_machine, MachineError};
use std::sync::Arc;

fn main() -> Result<(), MachineError> {
    println!("=== Creative Process State Machine ===\n");

    let definition = Arc::new(define_machine! {
        group creative_process {
            no_idea => idea: get_inspired;
            idea => working: get_motivated;
            idea => panic: procrastinate;
        }
        working => success: just_do_it;
        panic => success: crunch_it;
        creative_process => failure: give_up;
    }?);

    println!("States: {:?}", definition.states());
    println!("Transitions: {:?}\n", definition.transition_names());

    let mut machine = definition.instantiate()?;
    println!("Initial state: {}", machine.state());

    for step in ["get_inspired", "procrastinate", "just_do_it", "crunch_it"] {
        match machine.invoke(step) {
            Ok(state) => println!("  {step:<14} -> {state}"),
            Err(err) => println!("  {step:<14} !! {err}"),
        }
    }

    println!("\nFinal state: {}", machine.state());
    println!("Terminal: {}", machine.is_terminal());

    let options = DiagramOptions {
        rank_dir: RankDir::LeftToRight,
        ..DiagramOptions::default()
    };
    println!("\n{}", to_dot(&definition, &options));

    println!("=== Example Complete ===");
    Ok(())
}
