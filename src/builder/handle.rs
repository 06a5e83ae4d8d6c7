//! Handles returned by a builder scope.

use crate::core::{StateId, Transition, TransitionName};
use crate::machine::{MachineDefinition, MachineError};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A declared state, used to attach outgoing transitions.
#[derive(Clone)]
pub struct StateHandle<'d> {
    id: StateId,
    definition: &'d RefCell<MachineDefinition>,
}

impl<'d> StateHandle<'d> {
    pub(crate) fn new(id: StateId, definition: &'d RefCell<MachineDefinition>) -> Self {
        Self { id, definition }
    }

    pub fn id(&self) -> &StateId {
        &self.id
    }

    /// Declare a transition called `with` from this state to `target`.
    pub fn leads_to(
        &self,
        target: &StateHandle<'_>,
        with: impl Into<TransitionName>,
    ) -> Result<TransitionName, MachineError> {
        self.definition
            .borrow_mut()
            .add_transition(with, self.id.clone(), target.id.clone())
    }
}

impl fmt::Debug for StateHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateHandle").field(&self.id).finish()
    }
}

/// A named set of states declared together.
///
/// A transition declared on the group is declared once for every member.
/// Clones share one member list, so a handle taken before the group is
/// re-opened sees the members added later.
#[derive(Clone)]
pub struct GroupHandle<'d> {
    name: String,
    members: Rc<RefCell<Vec<StateId>>>,
    definition: &'d RefCell<MachineDefinition>,
}

impl<'d> GroupHandle<'d> {
    pub(crate) fn new(name: &str, definition: &'d RefCell<MachineDefinition>) -> Self {
        Self {
            name: name.to_string(),
            members: Rc::new(RefCell::new(Vec::new())),
            definition,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member states in declaration order.
    pub fn members(&self) -> Vec<StateId> {
        self.members.borrow().clone()
    }

    pub fn contains(&self, state: &str) -> bool {
        self.members.borrow().iter().any(|m| m == state)
    }

    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    pub(crate) fn absorb<'a>(&self, states: impl IntoIterator<Item = &'a StateId>) {
        let mut members = self.members.borrow_mut();
        for state in states {
            if !members.contains(state) {
                members.push(state.clone());
            }
        }
    }

    /// Declare a transition called `with` from every member to `target`.
    ///
    /// Returns one name per declared transition, in member order. All
    /// endpoints are checked first, so a failure declares nothing.
    pub fn leads_to(
        &self,
        target: &StateHandle<'_>,
        with: impl Into<TransitionName>,
    ) -> Result<Vec<TransitionName>, MachineError> {
        let name = with.into();
        let fan_out: Vec<Transition> = self
            .members
            .borrow()
            .iter()
            .map(|member| Transition::new(name.clone(), member, target.id()))
            .collect();

        let mut definition = self.definition.borrow_mut();
        for transition in &fan_out {
            definition.check_endpoints(transition)?;
        }
        fan_out
            .into_iter()
            .map(|t| definition.add_transition(t.name, t.from, t.to))
            .collect()
    }
}

impl fmt::Debug for GroupHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupHandle")
            .field("name", &self.name)
            .field("members", &*self.members.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition_with(states: &[&str]) -> RefCell<MachineDefinition> {
        let mut definition = MachineDefinition::new();
        for state in states {
            definition.add_state(*state);
        }
        RefCell::new(definition)
    }

    #[test]
    fn leads_to_registers_transition() {
        let cell = definition_with(&["working", "success"]);
        let working = StateHandle::new("working".into(), &cell);
        let success = StateHandle::new("success".into(), &cell);

        let name = working.leads_to(&success, "just_do_it").unwrap();

        assert_eq!(name, "just_do_it");
        assert_eq!(
            cell.borrow().transitions(),
            [Transition::new("just_do_it", "working", "success")]
        );
    }

    #[test]
    fn handle_to_undeclared_state_is_rejected() {
        let cell = definition_with(&["working"]);
        let working = StateHandle::new("working".into(), &cell);
        let ghost = StateHandle::new("ghost".into(), &cell);

        let result = working.leads_to(&ghost, "haunt");

        assert!(matches!(
            result,
            Err(MachineError::InvalidNode { ref state, .. }) if state == "ghost"
        ));
        assert!(cell.borrow().transitions().is_empty());
    }

    #[test]
    fn group_fans_out_in_member_order() {
        let cell = definition_with(&["idea", "panic", "failure"]);
        let group = GroupHandle::new("creative_process", &cell);
        group.absorb(&[StateId::from("idea"), StateId::from("panic")]);
        let failure = StateHandle::new("failure".into(), &cell);

        let names = group.leads_to(&failure, "give_up").unwrap();

        assert_eq!(names, vec!["give_up", "give_up"]);
        assert_eq!(
            cell.borrow().transitions(),
            [
                Transition::new("give_up", "idea", "failure"),
                Transition::new("give_up", "panic", "failure"),
            ]
        );
    }

    #[test]
    fn failing_fan_out_declares_nothing() {
        let cell = definition_with(&["idea", "panic"]);
        let group = GroupHandle::new("creative_process", &cell);
        group.absorb(&[StateId::from("idea"), StateId::from("panic")]);
        let failure = StateHandle::new("failure".into(), &cell);

        assert!(group.leads_to(&failure, "give_up").is_err());
        assert!(cell.borrow().transitions().is_empty());
    }

    #[test]
    fn absorb_skips_known_members() {
        let cell = definition_with(&["a", "b"]);
        let group = GroupHandle::new("g", &cell);
        group.absorb(&[StateId::from("a"), StateId::from("b")]);
        group.absorb(&[StateId::from("b"), StateId::from("a")]);

        assert_eq!(group.members(), ["a", "b"]);
        assert!(group.contains("a"));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn empty_group_declares_no_transitions() {
        let cell = definition_with(&["failure"]);
        let group = GroupHandle::new("nobody", &cell);
        let failure = StateHandle::new("failure".into(), &cell);

        assert!(group.is_empty());
        assert!(group.leads_to(&failure, "give_up").unwrap().is_empty());
    }

    #[test]
    fn clones_see_members_absorbed_later() {
        let cell = definition_with(&["working", "panic", "failure"]);
        let first = GroupHandle::new("busy", &cell);
        first.absorb(&[StateId::from("working")]);
        let second = first.clone();
        second.absorb(&[StateId::from("panic")]);
        let failure = StateHandle::new("failure".into(), &cell);

        assert_eq!(first.members(), ["working", "panic"]);
        assert_eq!(first.leads_to(&failure, "give_up").unwrap().len(), 2);
    }
}
