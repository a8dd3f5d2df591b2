//! End-to-end traffic light scenario.
//!
//! The machine under test:
//!
//! ```text
//! +---+                          +----------+
//! |Red|-------GoWarning------->>>|RedYellow |
//! +---+                          +----------+
//!   ^                                  |
//!  Stop                                Go
//!   |                                  v
//! +-----------+                     +-----+
//! |GreenYellow|<<<---StopWarning----|Green|
//! +-----------+                     +-----+
//! ```
//!
//! Every transition carries one action whose before hook adds 2 to a
//! counter and whose after hook subtracts 1.

use std::sync::Arc;
use switchboard::{
    event_enum, state_enum, Action, ActionContext, ActionRef, ActionResult, StateMachine,
    Transition, TransitionError,
};

event_enum! {
    enum Signal {
        GoWarning,
        Go,
        StopWarning,
        Stop,
    }
}

state_enum! {
    enum Color {
        Red,
        RedYellow,
        Green,
        GreenYellow,
    }
}

#[derive(Default)]
struct Controller {
    count: i32,
}

struct CountAction;

impl Action<Signal, Color, Controller> for CountAction {
    fn before(&self, ctx: &mut ActionContext<'_, Signal, Color, Controller>) -> ActionResult {
        ctx.data_mut().count += 2;
        Ok(())
    }

    fn after(&self, ctx: &mut ActionContext<'_, Signal, Color, Controller>) -> ActionResult {
        ctx.data_mut().count -= 1;
        Ok(())
    }
}

fn build_transitions() -> Vec<Transition<Signal, Color, Controller>> {
    let count: ActionRef<Signal, Color, Controller> = Arc::new(CountAction);
    vec![
        Transition::with_actions(
            Signal::GoWarning,
            Color::Red,
            Color::RedYellow,
            vec![Arc::clone(&count)],
        ),
        Transition::with_actions(
            Signal::Go,
            Color::RedYellow,
            Color::Green,
            vec![Arc::clone(&count)],
        ),
        Transition::with_actions(
            Signal::StopWarning,
            Color::Green,
            Color::GreenYellow,
            vec![Arc::clone(&count)],
        ),
        Transition::with_actions(
            Signal::Stop,
            Color::GreenYellow,
            Color::Red,
            vec![count],
        ),
    ]
}

fn traffic_light() -> StateMachine<Signal, Color, Controller> {
    StateMachine::new(Color::Red, build_transitions())
}

#[test]
fn lists_all_configured_transitions() {
    assert_eq!(
        traffic_light().transitions().count(),
        build_transitions().len()
    );
}

#[test]
fn can_consume_tracks_the_current_state() {
    let mut machine = traffic_light();
    let mut controller = Controller::default();

    assert!(machine.can_consume(&Signal::GoWarning));
    assert!(!machine.can_consume(&Signal::Go));
    assert!(!machine.can_consume(&Signal::StopWarning));
    assert!(!machine.can_consume(&Signal::Stop));

    machine
        .consume(Signal::GoWarning, &mut controller)
        .unwrap();

    assert!(!machine.can_consume(&Signal::GoWarning));
    assert!(machine.can_consume(&Signal::Go));
    assert!(!machine.can_consume(&Signal::StopWarning));
    assert!(!machine.can_consume(&Signal::Stop));
}

#[test]
fn full_cycle_runs_hooks_and_ends_back_at_red() {
    let mut machine = traffic_light();
    let mut controller = Controller::default();

    assert_eq!(
        machine.consume(Signal::GoWarning, &mut controller).unwrap(),
        Color::RedYellow
    );
    assert_eq!(
        machine.consume(Signal::Go, &mut controller).unwrap(),
        Color::Green
    );
    assert_eq!(
        machine
            .consume(Signal::StopWarning, &mut controller)
            .unwrap(),
        Color::GreenYellow
    );
    assert_eq!(
        machine.consume(Signal::Stop, &mut controller).unwrap(),
        Color::Red
    );

    // four transitions, each +2 before and -1 after
    assert_eq!(controller.count, 4);

    let err = machine.consume(Signal::Go, &mut controller).unwrap_err();
    assert!(matches!(
        err,
        TransitionError::InvalidTransition {
            event: Signal::Go,
            state: Color::Red,
        }
    ));
    assert_eq!(
        err.to_string(),
        "transition from state Red is not valid for event Go"
    );
    assert_eq!(machine.current_state(), &Color::Red);
    assert_eq!(controller.count, 4);
}

#[test]
fn builder_assembles_the_same_machine() {
    let mut transitions = build_transitions();
    let last = transitions.pop().unwrap();

    let machine = StateMachine::builder()
        .initial(Color::Red)
        .transitions(transitions)
        .add_transition(last)
        .build()
        .unwrap();

    assert_eq!(machine.current_state(), &Color::Red);
    assert_eq!(machine.transitions().count(), build_transitions().len());
}
