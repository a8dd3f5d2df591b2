//! Action hooks executed around a state transition.
//!
//! Actions are attached to a transition and run in declared order: every
//! `before` hook fires while the machine is still in the source state, then
//! the state commits, then every `after` hook fires. Hooks mutate the host's
//! data through the context; they hold no state of their own.

use crate::core::{Event, State};
use std::error::Error;
use std::sync::Arc;

/// Error type surfaced by a failing hook.
///
/// Hooks report whatever error the host raises; the engine forwards it to
/// the caller without inspecting it.
pub type ActionError = Box<dyn Error + Send + Sync>;

/// Result type for `before` and `after` hooks.
pub type ActionResult = Result<(), ActionError>;

/// Shared handle to an action stored in a transition's action list.
pub type ActionRef<E, S, D> = Arc<dyn Action<E, S, D> + Send + Sync>;

/// Snapshot handed to every hook during one `consume` call.
///
/// The event, pre-transition state, and post-transition state are fixed for
/// the duration of the call. The data reference is the only mutable part;
/// it borrows the host's value exclusively and is released when the call
/// returns.
pub struct ActionContext<'d, E: Event, S: State, D> {
    event: E,
    from_state: S,
    to_state: S,
    data: &'d mut D,
}

impl<'d, E: Event, S: State, D> ActionContext<'d, E, S, D> {
    /// Create a context for one transition.
    ///
    /// Mostly useful for unit-testing actions in isolation; the engine
    /// builds the context itself during `consume`.
    pub fn new(event: E, from_state: S, to_state: S, data: &'d mut D) -> Self {
        Self {
            event,
            from_state,
            to_state,
            data,
        }
    }

    /// The event that triggered the transition.
    pub fn event(&self) -> &E {
        &self.event
    }

    /// The state the machine was in when the event was consumed.
    pub fn from_state(&self) -> &S {
        &self.from_state
    }

    /// The state the transition leads to.
    pub fn to_state(&self) -> &S {
        &self.to_state
    }

    /// Shared access to the host's data.
    pub fn data(&self) -> &D {
        self.data
    }

    /// Exclusive access to the host's data.
    pub fn data_mut(&mut self) -> &mut D {
        self.data
    }
}

/// A before/after hook pair attached to a transition.
///
/// Both hooks default to no-ops, so an implementation overrides only the
/// side it needs. A hook failure propagates to the `consume` caller; see
/// [`TransitionError`](crate::machine::TransitionError) for what the state
/// looks like afterwards.
///
/// # Example
///
/// ```rust
/// use switchboard::core::{Action, ActionContext, ActionResult};
/// use switchboard::{event_enum, state_enum};
///
/// event_enum! {
///     enum Tick {
///         Next,
///     }
/// }
///
/// state_enum! {
///     enum Phase {
///         One,
///         Two,
///     }
/// }
///
/// struct CountAction;
///
/// impl Action<Tick, Phase, u32> for CountAction {
///     fn before(&self, ctx: &mut ActionContext<'_, Tick, Phase, u32>) -> ActionResult {
///         *ctx.data_mut() += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Action<E: Event, S: State, D> {
    /// Called while the machine is still in the source state.
    fn before(&self, _ctx: &mut ActionContext<'_, E, S, D>) -> ActionResult {
        Ok(())
    }

    /// Called once the new state has been committed.
    fn after(&self, _ctx: &mut ActionContext<'_, E, S, D>) -> ActionResult {
        Ok(())
    }
}

type HookFn<E, S, D> =
    Box<dyn Fn(&mut ActionContext<'_, E, S, D>) -> ActionResult + Send + Sync>;

/// Closure-backed [`Action`] for hosts that prefer composition over a named
/// implementation.
///
/// # Example
///
/// ```rust
/// use switchboard::core::FnAction;
/// use switchboard::{event_enum, state_enum};
///
/// event_enum! {
///     enum Tick {
///         Next,
///     }
/// }
///
/// state_enum! {
///     enum Phase {
///         One,
///         Two,
///     }
/// }
///
/// let action = FnAction::<Tick, Phase, u32>::new()
///     .on_before(|ctx| {
///         *ctx.data_mut() += 1;
///         Ok(())
///     })
///     .on_after(|ctx| {
///         *ctx.data_mut() *= 2;
///         Ok(())
///     });
/// ```
pub struct FnAction<E: Event, S: State, D> {
    before: Option<HookFn<E, S, D>>,
    after: Option<HookFn<E, S, D>>,
}

impl<E: Event, S: State, D> FnAction<E, S, D> {
    /// Create an action with no hooks; both sides are no-ops until set.
    pub fn new() -> Self {
        Self {
            before: None,
            after: None,
        }
    }

    /// Set the before hook.
    pub fn on_before<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut ActionContext<'_, E, S, D>) -> ActionResult + Send + Sync + 'static,
    {
        self.before = Some(Box::new(hook));
        self
    }

    /// Set the after hook.
    pub fn on_after<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut ActionContext<'_, E, S, D>) -> ActionResult + Send + Sync + 'static,
    {
        self.after = Some(Box::new(hook));
        self
    }
}

impl<E: Event, S: State, D> Default for FnAction<E, S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event, S: State, D> Action<E, S, D> for FnAction<E, S, D> {
    fn before(&self, ctx: &mut ActionContext<'_, E, S, D>) -> ActionResult {
        match &self.before {
            Some(hook) => hook(ctx),
            None => Ok(()),
        }
    }

    fn after(&self, ctx: &mut ActionContext<'_, E, S, D>) -> ActionResult {
        match &self.after {
            Some(hook) => hook(ctx),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Go,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            "Go"
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        End,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::End => "End",
            }
        }
    }

    #[test]
    fn context_exposes_snapshot_and_data() {
        let mut data = 7u32;
        let mut ctx = ActionContext::new(TestEvent::Go, TestState::Start, TestState::End, &mut data);

        assert_eq!(ctx.event(), &TestEvent::Go);
        assert_eq!(ctx.from_state(), &TestState::Start);
        assert_eq!(ctx.to_state(), &TestState::End);
        assert_eq!(*ctx.data(), 7);

        *ctx.data_mut() = 9;
        assert_eq!(data, 9);
    }

    #[test]
    fn default_hooks_are_noops() {
        struct Silent;
        impl Action<TestEvent, TestState, u32> for Silent {}

        let mut data = 0u32;
        let mut ctx = ActionContext::new(TestEvent::Go, TestState::Start, TestState::End, &mut data);

        assert!(Silent.before(&mut ctx).is_ok());
        assert!(Silent.after(&mut ctx).is_ok());
        assert_eq!(data, 0);
    }

    #[test]
    fn fn_action_runs_configured_hooks() {
        let action = FnAction::<TestEvent, TestState, u32>::new()
            .on_before(|ctx| {
                *ctx.data_mut() += 1;
                Ok(())
            })
            .on_after(|ctx| {
                *ctx.data_mut() += 10;
                Ok(())
            });

        let mut data = 0u32;
        let mut ctx = ActionContext::new(TestEvent::Go, TestState::Start, TestState::End, &mut data);

        action.before(&mut ctx).unwrap();
        action.after(&mut ctx).unwrap();
        assert_eq!(data, 11);
    }

    #[test]
    fn fn_action_missing_hooks_are_noops() {
        let action = FnAction::<TestEvent, TestState, u32>::new();

        let mut data = 3u32;
        let mut ctx = ActionContext::new(TestEvent::Go, TestState::Start, TestState::End, &mut data);

        assert!(action.before(&mut ctx).is_ok());
        assert!(action.after(&mut ctx).is_ok());
        assert_eq!(data, 3);
    }

    #[test]
    fn hook_errors_surface_to_the_caller() {
        let action =
            FnAction::<TestEvent, TestState, u32>::new().on_before(|_| Err("not ready".into()));

        let mut data = 0u32;
        let mut ctx = ActionContext::new(TestEvent::Go, TestState::Start, TestState::End, &mut data);

        let err = action.before(&mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "not ready");
    }
}
