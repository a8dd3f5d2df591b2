//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, ActionRef, Event, State, Transition};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
///
/// Actions accumulate in call order; that order is the hook execution order
/// of the finished transition.
pub struct TransitionBuilder<E: Event, S: State, D> {
    event: Option<E>,
    from_state: Option<S>,
    to_state: Option<S>,
    actions: Vec<ActionRef<E, S, D>>,
}

impl<E: Event, S: State, D> TransitionBuilder<E, S, D> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            event: None,
            from_state: None,
            to_state: None,
            actions: Vec::new(),
        }
    }

    /// Set the triggering event (required).
    pub fn event(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the source state (required).
    pub fn from_state(mut self, state: S) -> Self {
        self.from_state = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to_state(mut self, state: S) -> Self {
        self.to_state = Some(state);
        self
    }

    /// Append one action to the list.
    pub fn action<A>(mut self, action: A) -> Self
    where
        A: Action<E, S, D> + Send + Sync + 'static,
    {
        self.actions.push(Arc::new(action));
        self
    }

    /// Append a collection of already-shared actions.
    pub fn actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = ActionRef<E, S, D>>,
    {
        self.actions.extend(actions);
        self
    }

    /// Build the transition.
    /// Returns an error if a required field is missing.
    pub fn build(self) -> Result<Transition<E, S, D>, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let from_state = self.from_state.ok_or(BuildError::MissingFromState)?;
        let to_state = self.to_state.ok_or(BuildError::MissingToState)?;

        Ok(Transition::with_actions(
            event,
            from_state,
            to_state,
            self.actions,
        ))
    }
}

impl<E: Event, S: State, D> Default for TransitionBuilder<E, S, D> {
    fn default() -> Self {
        Self::new()
    }
}
