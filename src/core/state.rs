//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait. A state is a plain
//! symbol: it carries identity and a display name, nothing else.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are immutable symbols describing the machine's current
/// configuration. Together with an event they form the lookup key of the
/// transition table, so equality and hashing define identity.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition keys and action contexts
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so hosts can
///   persist their own snapshots
///
/// The [`state_enum!`](crate::state_enum) macro derives all of this for a
/// fieldless enum.
///
/// # Example
///
/// ```rust
/// use switchboard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    fn hash_of(state: &TestState) -> u64 {
        let mut hasher = DefaultHasher::new();
        state.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn state_is_comparable_and_hashable() {
        assert_eq!(TestState::Processing, TestState::Processing);
        assert_ne!(TestState::Processing, TestState::Complete);
        assert_eq!(
            hash_of(&TestState::Processing),
            hash_of(&TestState::Processing)
        );
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Initial;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_cloneable() {
        let state = TestState::Processing;
        let cloned = state.clone();
        assert_eq!(state, cloned);
    }
}
