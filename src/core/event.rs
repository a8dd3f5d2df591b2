//! Core Event trait for the symbols a machine consumes.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine events.
///
/// Events are symbols consumed by the machine to trigger transitions. An
/// event paired with the current state keys the transition table, so the
/// same identity requirements apply as for [`State`](crate::core::State).
///
/// The [`event_enum!`](crate::event_enum) macro derives all of this for a
/// fieldless enum.
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Finish,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Finish => "Finish",
            }
        }
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Finish.name(), "Finish");
    }

    #[test]
    fn event_roundtrips_through_serde() {
        let event = TestEvent::Finish;
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: TestEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
