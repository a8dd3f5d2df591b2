//! Switchboard: an embeddable transition-table state machine
//!
//! A machine is an immutable table of transitions keyed by
//! (event, current state) plus a single mutable field: the current state.
//! Consuming an event looks up the transition for the pair, runs every
//! registered action's `before` hook, commits the new state, then runs every
//! `after` hook. The host owns its Event and State enumerations and a
//! mutable data value that actions reach through the [`ActionContext`].
//!
//! # Core Concepts
//!
//! - **Event / State**: host-defined symbol domains via the [`Event`] and
//!   [`State`] traits (or the [`event_enum!`] / [`state_enum!`] macros)
//! - **Transition**: one allowed state change, identified by its
//!   (event, source state) key
//! - **Action**: a before/after hook pair executed around the state commit
//!
//! # Example
//!
//! ```rust
//! use switchboard::{event_enum, state_enum, FnAction, StateMachine, Transition};
//!
//! event_enum! {
//!     enum Coin {
//!         Insert,
//!         Push,
//!     }
//! }
//!
//! state_enum! {
//!     enum Turnstile {
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Tally {
//!     coins: u32,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let unlock = FnAction::<Coin, Turnstile, Tally>::new().on_before(|ctx| {
//!     ctx.data_mut().coins += 1;
//!     Ok(())
//! });
//!
//! let mut machine = StateMachine::new(
//!     Turnstile::Locked,
//!     vec![
//!         Transition::builder()
//!             .event(Coin::Insert)
//!             .from_state(Turnstile::Locked)
//!             .to_state(Turnstile::Unlocked)
//!             .action(unlock)
//!             .build()?,
//!         Transition::new(Coin::Push, Turnstile::Unlocked, Turnstile::Locked),
//!     ],
//! );
//!
//! let mut tally = Tally::default();
//! let next = machine.consume(Coin::Insert, &mut tally)?;
//! assert_eq!(next, Turnstile::Unlocked);
//! assert_eq!(tally.coins, 1);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use core::{
    Action, ActionContext, ActionError, ActionRef, ActionResult, Event, FnAction, State,
    Transition, TransitionKey,
};
pub use machine::{StateMachine, TransitionError};
