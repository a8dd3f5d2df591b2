//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders for transitions and machines, plus
//! the [`event_enum!`](crate::event_enum) and
//! [`state_enum!`](crate::state_enum) macros for declaring symbol domains
//! with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
