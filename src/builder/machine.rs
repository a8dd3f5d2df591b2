//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State, Transition};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<E: Event, S: State, D> {
    initial: Option<S>,
    transitions: Vec<Transition<E, S, D>>,
}

impl<E: Event, S: State, D> StateMachineBuilder<E, S, D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<E, S, D>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<E, S, D>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<E, S, D>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    ///
    /// Fails only when the initial state is missing. An empty transition
    /// list is legal; the machine then rejects every event.
    pub fn build(self) -> Result<StateMachine<E, S, D>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(StateMachine::new(initial, self.transitions))
    }
}

impl<E: Event, S: State, D> Default for StateMachineBuilder<E, S, D> {
    fn default() -> Self {
        Self::new()
    }
}
