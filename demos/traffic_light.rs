//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic event-driven machine.
//!
//! Key concepts:
//! - Symbol domains declared with `event_enum!` / `state_enum!`
//! - One action shared across several transitions
//! - Before/after hooks mutating host data through the context
//! - Invalid events reported without changing state
//!
//! Run with: cargo run --example traffic_light

use std::sync::Arc;
use switchboard::{
    event_enum, state_enum, Action, ActionContext, ActionRef, ActionResult, State, StateMachine,
    Transition,
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
    switches: u32,
}

struct CountSwitches;

impl Action<Signal, Color, Controller> for CountSwitches {
    fn after(&self, ctx: &mut ActionContext<'_, Signal, Color, Controller>) -> ActionResult {
        ctx.data_mut().switches += 1;
        println!(
            "  lamp switched: {} -> {}",
            ctx.from_state().name(),
            ctx.to_state().name()
        );
        Ok(())
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let count: ActionRef<Signal, Color, Controller> = Arc::new(CountSwitches);
    let mut machine = StateMachine::new(
        Color::Red,
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
        ],
    );

    let mut controller = Controller::default();
    println!("Initial state: {:?}\n", machine.current_state());

    println!("Cycling through one full light sequence:");
    for signal in [Signal::GoWarning, Signal::Go, Signal::StopWarning, Signal::Stop] {
        let next = machine
            .consume(signal, &mut controller)
            .expect("the cycle only uses configured transitions");
        println!("  now showing {next:?}");
    }

    println!("\nLamp switches performed: {}", controller.switches);

    println!("\nConsuming Go from Red is not configured:");
    match machine.consume(Signal::Go, &mut controller) {
        Ok(state) => println!("  unexpected transition to {state:?}"),
        Err(err) => println!("  rejected: {err}"),
    }
    println!("State is still {:?}", machine.current_state());

    println!("\n=== Example Complete ===");
}
