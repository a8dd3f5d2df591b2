//! Build errors for state machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
///
/// Each variant reports a required value that was never supplied to a
/// builder; nothing is constructed when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition event not specified. Call .event(event)")]
    MissingEvent,

    #[error("Transition source state not specified. Call .from_state(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to_state(state)")]
    MissingToState,
}
