//! Errors surfaced by the consume operation.

use crate::core::{ActionError, Event, State};
use thiserror::Error;

/// Errors that can occur while consuming an event.
///
/// Every variant is raised synchronously to the direct caller; nothing is
/// retried or suppressed inside the engine. Use [`committed`] to tell
/// whether the machine advanced before the failure.
///
/// [`committed`]: TransitionError::committed
#[derive(Debug, Error)]
pub enum TransitionError<E: Event, S: State> {
    /// No transition is defined for the event in the current state. The
    /// current state is untouched.
    #[error("transition from state {} is not valid for event {}", .state.name(), .event.name())]
    InvalidTransition { event: E, state: S },

    /// A before hook failed. The state has not changed and the remaining
    /// hooks were skipped.
    #[error("before-action failed, state unchanged: {source}")]
    BeforeActionFailed {
        #[source]
        source: ActionError,
    },

    /// An after hook failed. The transition has already committed; the
    /// machine is in the destination state.
    #[error("after-action failed, transition already committed: {source}")]
    AfterActionFailed {
        #[source]
        source: ActionError,
    },
}

impl<E: Event, S: State> TransitionError<E, S> {
    /// Whether the state commit happened before this error was raised.
    pub fn committed(&self) -> bool {
        matches!(self, Self::AfterActionFailed { .. })
    }
}
