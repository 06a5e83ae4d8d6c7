//! Builder scopes: the aliasing table a definition block works against.

use crate::builder::handle::{GroupHandle, StateHandle};
use crate::core::{StateId, TransitionName};
use crate::machine::{MachineDefinition, MachineError};
use std::cell::RefCell;
use std::collections::HashMap;

/// What a local name is bound to inside a scope.
#[derive(Clone, Debug)]
pub enum Binding<'d> {
    State(StateHandle<'d>),
    Group(GroupHandle<'d>),
}

/// Construction surface handed to a definition block.
///
/// Referencing a name through [`Scope::state`] declares it on first use.
/// Nested scopes opened by [`Scope::group`] share the definition and can
/// see every name bound by the scopes around them. The names a nested
/// scope binds join the enclosing scope when the group closes.
pub struct Scope<'d> {
    definition: &'d RefCell<MachineDefinition>,
    bindings: HashMap<String, Binding<'d>>,
    /// Names in `bindings`, in the order they were first bound.
    order: Vec<String>,
    /// Bindings of the enclosing scopes.
    enclosing: HashMap<String, Binding<'d>>,
    members: Vec<StateId>,
}

impl<'d> Scope<'d> {
    pub(crate) fn new(definition: &'d RefCell<MachineDefinition>) -> Self {
        Self {
            definition,
            bindings: HashMap::new(),
            order: Vec::new(),
            enclosing: HashMap::new(),
            members: Vec::new(),
        }
    }

    /// Resolve `name` to a state handle, declaring the state on first
    /// reference.
    ///
    /// A name bound to a group, here or in an enclosing scope, fails with
    /// [`MachineError::NotAState`] before anything is declared.
    pub fn state(&mut self, name: &str) -> Result<StateHandle<'d>, MachineError> {
        let handle = match self.resolve(name) {
            Some(Binding::State(handle)) => handle.clone(),
            Some(Binding::Group(_)) => {
                return Err(MachineError::NotAState {
                    name: name.to_string(),
                })
            }
            None => {
                let id = self.definition.borrow_mut().add_state(name);
                StateHandle::new(id, self.definition)
            }
        };

        self.remember(handle.id());
        if !self.bindings.contains_key(name) {
            self.bind(name.to_string(), Binding::State(handle.clone()));
        }
        Ok(handle)
    }

    /// Run `block` in a nested scope and bind every state it declares to
    /// a group called `name`.
    ///
    /// Opening a group that already exists adds the new members to it, and
    /// every handle to that group sees them. Inside `block`, `name` already
    /// refers to the group.
    pub fn group<F>(&mut self, name: &str, block: F) -> Result<GroupHandle<'d>, MachineError>
    where
        F: FnOnce(&mut Scope<'d>) -> Result<(), MachineError>,
    {
        let group = match self.resolve(name) {
            Some(Binding::Group(group)) => group.clone(),
            Some(Binding::State(_)) => {
                return Err(MachineError::NotAGroup {
                    name: name.to_string(),
                })
            }
            None => GroupHandle::new(name, self.definition),
        };

        let mut nested = self.nested(&group);
        block(&mut nested)?;
        let Scope {
            bindings,
            order,
            members,
            ..
        } = nested;
        self.merge(bindings, order)?;

        group.absorb(&members);
        self.bind(name.to_string(), Binding::Group(group.clone()));
        for member in group.members() {
            self.remember(&member);
        }
        tracing::debug!(group = name, members = group.len(), "closed group");
        Ok(group)
    }

    /// Declare a transition by name. `from` may name a state or a group;
    /// a group fans out into one transition per member. `to` must name a
    /// state.
    pub fn connect(
        &mut self,
        from: &str,
        to: &str,
        with: impl Into<TransitionName>,
    ) -> Result<Vec<TransitionName>, MachineError> {
        if let Some(Binding::Group(_)) = self.resolve(to) {
            return Err(MachineError::NotAState {
                name: to.to_string(),
            });
        }

        let group = match self.resolve(from) {
            Some(Binding::Group(group)) => Some(group.clone()),
            _ => None,
        };
        if let Some(group) = group {
            let target = self.state(to)?;
            return group.leads_to(&target, with);
        }

        let source = self.state(from)?;
        let target = self.state(to)?;
        Ok(vec![source.leads_to(&target, with)?])
    }

    /// Look up what `name` is bound to in this scope or an enclosing one
    /// without declaring it.
    pub fn lookup(&self, name: &str) -> Option<&Binding<'d>> {
        self.resolve(name)
    }

    fn resolve(&self, name: &str) -> Option<&Binding<'d>> {
        self.bindings
            .get(name)
            .or_else(|| self.enclosing.get(name))
    }

    fn nested(&self, opening: &GroupHandle<'d>) -> Scope<'d> {
        let mut enclosing = self.enclosing.clone();
        enclosing.extend(
            self.bindings
                .iter()
                .map(|(name, binding)| (name.clone(), binding.clone())),
        );
        enclosing.insert(opening.name().to_string(), Binding::Group(opening.clone()));

        Scope {
            enclosing,
            ..Scope::new(self.definition)
        }
    }

    fn bind(&mut self, name: String, binding: Binding<'d>) {
        if !self.bindings.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.bindings.insert(name, binding);
    }

    fn remember(&mut self, state: &StateId) {
        if !self.members.contains(state) {
            self.members.push(state.clone());
        }
    }

    fn merge(
        &mut self,
        mut bindings: HashMap<String, Binding<'d>>,
        order: Vec<String>,
    ) -> Result<(), MachineError> {
        for name in order {
            let Some(binding) = bindings.remove(&name) else {
                continue;
            };
            match self.bindings.get_mut(&name) {
                Some(existing) => merge_binding(existing, binding, &name)?,
                None => self.bind(name, binding),
            }
        }
        Ok(())
    }
}

fn merge_binding<'d>(
    existing: &mut Binding<'d>,
    incoming: Binding<'d>,
    name: &str,
) -> Result<(), MachineError> {
    match (existing, incoming) {
        (Binding::State(_), Binding::State(_)) => Ok(()),
        (Binding::Group(outer), Binding::Group(inner)) => {
            outer.absorb(&inner.members());
            Ok(())
        }
        (Binding::State(_), Binding::Group(_)) => Err(MachineError::NotAGroup {
            name: name.to_string(),
        }),
        (Binding::Group(_), Binding::State(_)) => Err(MachineError::NotAState {
            name: name.to_string(),
        }),
    }
}
