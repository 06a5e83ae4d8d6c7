//! Property-based tests for machine definitions and instances.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use statecraft::{MachineDefinition, MachineError, StateId};
use std::sync::Arc;

const NAMES: [&str; 6] = ["start", "end", "idea", "panic", "working", "failure"];
const LABELS: [&str; 3] = ["go", "stop", "give_up"];

prop_compose! {
    fn arbitrary_name()(index in 0..NAMES.len()) -> &'static str {
        NAMES[index]
    }
}

prop_compose! {
    fn arbitrary_label()(index in 0..LABELS.len()) -> &'static str {
        LABELS[index]
    }
}

prop_compose! {
    fn arbitrary_edge()(
        label in arbitrary_label(),
        from in arbitrary_name(),
        to in arbitrary_name(),
    ) -> (&'static str, &'static str, &'static str) {
        (label, from, to)
    }
}

fn first_occurrences(names: &[&'static str]) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for name in names {
        if !seen.contains(name) {
            seen.push(*name);
        }
    }
    seen
}

fn fully_connected(edges: &[(&'static str, &'static str, &'static str)]) -> MachineDefinition {
    let mut definition = MachineDefinition::new();
    for name in NAMES {
        definition.add_state(name);
    }
    for (label, from, to) in edges {
        definition.add_transition(*label, *from, *to).unwrap();
    }
    definition
}

proptest! {
    #[test]
    fn states_keep_first_declaration_order(
        names in prop::collection::vec(arbitrary_name(), 0..20)
    ) {
        let mut definition = MachineDefinition::new();
        for name in &names {
            definition.add_state(*name);
        }

        let expected = first_occurrences(&names);
        prop_assert_eq!(definition.states(), expected.as_slice());
    }

    #[test]
    fn builder_references_never_duplicate_states(
        names in prop::collection::vec(arbitrary_name(), 1..20)
    ) {
        let definition = MachineDefinition::define(|m| {
            for name in &names {
                m.state(name)?;
            }
            Ok(())
        }).unwrap();

        let expected = first_occurrences(&names);
        prop_assert_eq!(definition.states(), expected.as_slice());
        prop_assert_eq!(definition.initial_state().unwrap(), names[0]);
    }

    #[test]
    fn invalid_endpoints_never_mutate_the_table(
        declared in prop::collection::vec(arbitrary_name(), 0..6),
        edge in arbitrary_edge(),
    ) {
        let mut definition = MachineDefinition::new();
        for name in &declared {
            definition.add_state(*name);
        }
        let (label, from, to) = edge;
        let before = definition.transitions().len();

        let result = definition.add_transition(label, from, to);

        let valid = declared.contains(&from) && declared.contains(&to);
        prop_assert_eq!(result.is_ok(), valid);
        if valid {
            prop_assert_eq!(definition.transitions().len(), before + 1);
        } else {
            let is_invalid_node = matches!(result, Err(MachineError::InvalidNode { .. }));
            prop_assert!(is_invalid_node);
            prop_assert_eq!(definition.transitions().len(), before);
        }
    }

    #[test]
    fn invoke_follows_first_matching_edge(
        edges in prop::collection::vec(arbitrary_edge(), 0..12),
        calls in prop::collection::vec(arbitrary_label(), 0..12),
    ) {
        let definition = Arc::new(fully_connected(&edges));
        let mut machine = definition.instantiate().unwrap();

        for label in calls {
            let before = machine.state().clone();
            let expected = edges
                .iter()
                .find(|(l, from, _)| *l == label && before == *from)
                .map(|(_, _, to)| StateId::from(*to));

            match machine.invoke(label) {
                Ok(state) => {
                    prop_assert_eq!(Some(state.clone()), expected);
                }
                Err(err) => {
                    prop_assert!(expected.is_none());
                    prop_assert_eq!(
                        err,
                        MachineError::BadTransition {
                            transition: label.into(),
                            state: before.clone(),
                        }
                    );
                    prop_assert_eq!(machine.state(), &before);
                }
            }
        }
    }

    #[test]
    fn history_path_matches_successful_invocations(
        edges in prop::collection::vec(arbitrary_edge(), 1..12),
        calls in prop::collection::vec(arbitrary_label(), 0..12),
    ) {
        let definition = Arc::new(fully_connected(&edges));
        let mut machine = definition.instantiate().unwrap();
        let mut successes = 0;

        for label in calls {
            if machine.invoke(label).is_ok() {
                successes += 1;
            }
        }

        let history = machine.history();
        prop_assert_eq!(history.len(), successes);
        if successes > 0 {
            let path = history.get_path();
            prop_assert_eq!(path.len(), successes + 1);
            prop_assert_eq!(path[0], "start");
            prop_assert_eq!(*path.last().unwrap(), machine.state());
        }
    }

    #[test]
    fn group_fan_out_declares_one_edge_per_member(
        members in prop::collection::vec(arbitrary_name(), 0..10)
    ) {
        let definition = MachineDefinition::define(|m| {
            let group = m.group("cluster", |g| {
                for member in &members {
                    g.state(member)?;
                }
                Ok(())
            })?;
            let sink = m.state("sink")?;
            group.leads_to(&sink, "give_up")?;
            Ok(())
        }).unwrap();

        let expected = first_occurrences(&members);
        let sources: Vec<&StateId> = definition
            .transitions()
            .iter()
            .filter(|t| t.name == "give_up")
            .map(|t| &t.from)
            .collect();
        prop_assert_eq!(sources, expected);
    }

    #[test]
    fn definition_roundtrip_serialization(
        edges in prop::collection::vec(arbitrary_edge(), 0..8)
    ) {
        let definition = fully_connected(&edges);

        let json = serde_json::to_string(&definition).unwrap();
        let back: MachineDefinition = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(back, definition);
    }
}
