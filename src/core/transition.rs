//! The transition value and its lookup key.

use crate::core::{ActionRef, Event, State};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One allowed state change.
///
/// A transition is an immutable value: the event that triggers it, the
/// source state, the destination state, and an ordered action list that may
/// be empty. Its identity is the (event, source state) pair alone — two
/// transitions with the same key but different destinations or actions
/// compare equal, which is what makes the last one win when a table is
/// folded from a collection containing duplicates.
pub struct Transition<E: Event, S: State, D> {
    event: E,
    from_state: S,
    to_state: S,
    actions: Vec<ActionRef<E, S, D>>,
}

impl<E: Event, S: State, D> Transition<E, S, D> {
    /// Create a transition with no actions.
    pub fn new(event: E, from_state: S, to_state: S) -> Self {
        Self::with_actions(event, from_state, to_state, Vec::new())
    }

    /// Create a transition with the given ordered action list.
    pub fn with_actions(
        event: E,
        from_state: S,
        to_state: S,
        actions: Vec<ActionRef<E, S, D>>,
    ) -> Self {
        Self {
            event,
            from_state,
            to_state,
            actions,
        }
    }

    /// Start a fluent [`TransitionBuilder`](crate::builder::TransitionBuilder).
    pub fn builder() -> crate::builder::TransitionBuilder<E, S, D> {
        crate::builder::TransitionBuilder::new()
    }

    /// The event that triggers this transition.
    pub fn event(&self) -> &E {
        &self.event
    }

    /// The state this transition starts from.
    pub fn from_state(&self) -> &S {
        &self.from_state
    }

    /// The state this transition leads to.
    pub fn to_state(&self) -> &S {
        &self.to_state
    }

    /// The ordered action list, as a read-only slice.
    pub fn actions(&self) -> &[ActionRef<E, S, D>] {
        &self.actions
    }
}

impl<E: Event, S: State, D> Clone for Transition<E, S, D> {
    fn clone(&self) -> Self {
        Self {
            event: self.event.clone(),
            from_state: self.from_state.clone(),
            to_state: self.to_state.clone(),
            actions: self.actions.iter().map(Arc::clone).collect(),
        }
    }
}

impl<E: Event, S: State, D> PartialEq for Transition<E, S, D> {
    fn eq(&self, other: &Self) -> bool {
        self.event == other.event && self.from_state == other.from_state
    }
}

impl<E: Event, S: State, D> Eq for Transition<E, S, D> {}

impl<E: Event, S: State, D> Hash for Transition<E, S, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.event.hash(state);
        self.from_state.hash(state);
    }
}

impl<E: Event, S: State, D> fmt::Debug for Transition<E, S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("event", &self.event)
            .field("from_state", &self.from_state)
            .field("to_state", &self.to_state)
            .field("actions", &self.actions.len())
            .finish()
    }
}

/// Composite lookup key of the transition table: (event, source state).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TransitionKey<E: Event, S: State> {
    event: E,
    from_state: S,
}

impl<E: Event, S: State> TransitionKey<E, S> {
    /// Create a key from an event and a source state.
    pub fn new(event: E, from_state: S) -> Self {
        Self { event, from_state }
    }

    /// The key under which a transition is stored.
    pub fn of<D>(transition: &Transition<E, S, D>) -> Self {
        Self::new(transition.event.clone(), transition.from_state.clone())
    }

    /// The event half of the key.
    pub fn event(&self) -> &E {
        &self.event
    }

    /// The source-state half of the key.
    pub fn from_state(&self) -> &S {
        &self.from_state
    }

    /// Decompose the key into its parts.
    pub fn into_parts(self) -> (E, S) {
        (self.event, self.from_state)
    }
}
