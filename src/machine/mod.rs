//! The state machine engine: table storage, lookup, and consume.

mod error;

pub use error::TransitionError;

use crate::builder::StateMachineBuilder;
use crate::core::{ActionContext, Event, State, Transition, TransitionKey};
use std::collections::HashMap;

/// A running state machine.
///
/// Holds the current state and an immutable table mapping
/// (event, source state) to the transition to perform. The table is fixed at
/// construction; only the current state mutates, and only through
/// [`consume`](StateMachine::consume).
///
/// The engine is synchronous and single-threaded: `consume` takes `&mut
/// self`, so concurrent use requires external serialization (a mutex around
/// the machine, or a single-writer task).
pub struct StateMachine<E: Event, S: State, D> {
    current: S,
    table: HashMap<TransitionKey<E, S>, Transition<E, S, D>>,
}

impl<E: Event, S: State, D> StateMachine<E, S, D> {
    /// Create a machine from an initial state and a transition collection.
    ///
    /// The collection is folded into the table in iteration order; when two
    /// transitions share a (event, source state) key, the one encountered
    /// last replaces the earlier one.
    pub fn new<I>(initial: S, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<E, S, D>>,
    {
        let table = transitions
            .into_iter()
            .map(|transition| (TransitionKey::of(&transition), transition))
            .collect();
        Self {
            current: initial,
            table,
        }
    }

    /// Start a fluent [`StateMachineBuilder`].
    pub fn builder() -> StateMachineBuilder<E, S, D> {
        StateMachineBuilder::new()
    }

    /// The current state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Whether the given event has a transition defined from the current
    /// state.
    pub fn can_consume(&self, event: &E) -> bool {
        self.table
            .contains_key(&TransitionKey::new(event.clone(), self.current.clone()))
    }

    /// Iterate over the configured transitions, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<E, S, D>> {
        self.table.values()
    }

    /// Consume one event, returning the new state.
    ///
    /// Looks up the transition for (event, current state), runs every
    /// action's `before` hook in declared order, commits the new state, then
    /// runs every `after` hook in the same order. The hooks all receive one
    /// [`ActionContext`] carrying the event, both states, and the `data`
    /// reference.
    ///
    /// # Errors
    ///
    /// - [`TransitionError::InvalidTransition`] when no transition is
    ///   defined for the pair; the current state is untouched.
    /// - [`TransitionError::BeforeActionFailed`] when a before hook fails;
    ///   the state has not changed and no further hooks run.
    /// - [`TransitionError::AfterActionFailed`] when an after hook fails;
    ///   the state has already committed to the destination. The transition
    ///   has logically completed even though an error is returned.
    pub fn consume(&mut self, event: E, data: &mut D) -> Result<S, TransitionError<E, S>> {
        let key = TransitionKey::new(event, self.current.clone());
        let Some(transition) = self.table.get(&key) else {
            let (event, state) = key.into_parts();
            return Err(TransitionError::InvalidTransition { event, state });
        };

        let mut ctx = ActionContext::new(
            transition.event().clone(),
            self.current.clone(),
            transition.to_state().clone(),
            data,
        );

        for action in transition.actions() {
            action
                .before(&mut ctx)
                .map_err(|source| TransitionError::BeforeActionFailed { source })?;
        }

        self.current = transition.to_state().clone();

        for action in transition.actions() {
            action
                .after(&mut ctx)
                .map_err(|source| TransitionError::AfterActionFailed { source })?;
        }

        tracing::debug!(
            event = ctx.event().name(),
            from = ctx.from_state().name(),
            to = ctx.to_state().name(),
            "transition committed"
        );

        Ok(self.current.clone())
    }
}
