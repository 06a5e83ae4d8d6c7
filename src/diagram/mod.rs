//! Graphviz export of machine definitions.
//!
//! Each state becomes a node and each transition a directed edge labelled
//! with the transition name. The output is DOT text; rendering it to an
//! image is left to Graphviz or any other DOT consumer.
//!
//! # Example
//!
//! ```rust
//! use statecraft::diagram::{to_dot, DiagramOptions};
//! use statecraft::MachineDefinition;
//!
//! let mut definition = MachineDefinition::new();
//! definition.add_state("start");
//! definition.add_state("end");
//! definition.add_transition("do_stuff", "start", "end").unwrap();
//!
//! let dot = to_dot(&definition, &DiagramOptions::default());
//! assert!(dot.contains("\"start\" -> \"end\" [label=\"do_stuff\"];"));
//! ```

mod options;

pub use options::{DiagramOptions, RankDir};

use crate::machine::MachineDefinition;
use std::fmt::Write;

/// Render `definition` as a DOT digraph.
pub fn to_dot(definition: &MachineDefinition, options: &DiagramOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "digraph {} {{", quote(&options.graph_name));
    let _ = writeln!(out, "    rankdir={};", options.rank_dir.as_str());

    let initial = definition.initial_state();
    for state in definition.states() {
        if options.mark_initial && Some(state) == initial {
            let _ = writeln!(out, "    {} [shape=doublecircle];", quote(state.as_str()));
        } else {
            let _ = writeln!(out, "    {};", quote(state.as_str()));
        }
    }

    for transition in definition.transitions() {
        let _ = write!(
            out,
            "    {} -> {}",
            quote(transition.from.as_str()),
            quote(transition.to.as_str())
        );
        if options.label_edges {
            let _ = write!(out, " [label={}]", quote(transition.name.as_str()));
        }
        out.push_str(";\n");
    }

    out.push_str("}\n");
    out
}

fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
