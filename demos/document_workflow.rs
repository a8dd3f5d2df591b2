//! Document Workflow
//!
//! This example demonstrates closure-backed actions and failure semantics.
//!
//! Key concepts:
//! - `FnAction` hooks built from closures
//! - A failing before hook vetoes the transition (state unchanged)
//! - An after hook observing the committed transition
//!
//! Run with: cargo run --example document_workflow

use switchboard::{event_enum, state_enum, FnAction, State, StateMachine, Transition};

event_enum! {
    enum DocEvent {
        Submit,
        Approve,
    }
}

state_enum! {
    enum DocState {
        Draft,
        Review,
        Published,
    }
}

struct Document {
    content: String,
    notifications: Vec<String>,
}

fn main() {
    println!("=== Document Workflow ===\n");

    let submit_checks = FnAction::<DocEvent, DocState, Document>::new()
        .on_before(|ctx| {
            if ctx.data().content.is_empty() {
                return Err("cannot submit an empty document".into());
            }
            Ok(())
        })
        .on_after(|ctx| {
            let note = format!("document moved to {}", ctx.to_state().name());
            ctx.data_mut().notifications.push(note);
            Ok(())
        });

    let mut machine = StateMachine::new(
        DocState::Draft,
        vec![
            Transition::builder()
                .event(DocEvent::Submit)
                .from_state(DocState::Draft)
                .to_state(DocState::Review)
                .action(submit_checks)
                .build()
                .expect("all fields are set"),
            Transition::new(DocEvent::Approve, DocState::Review, DocState::Published),
        ],
    );

    let mut doc = Document {
        content: String::new(),
        notifications: Vec::new(),
    };

    println!("Submitting an empty draft:");
    match machine.consume(DocEvent::Submit, &mut doc) {
        Ok(state) => println!("  unexpected transition to {state:?}"),
        Err(err) => println!("  vetoed: {err}"),
    }
    println!("  state is still {:?}\n", machine.current_state());

    println!("Filling in content and submitting again:");
    doc.content = "Quarterly report".to_string();
    let state = machine
        .consume(DocEvent::Submit, &mut doc)
        .expect("submit succeeds once content exists");
    println!("  state is now {state:?}");
    println!("  notifications: {:?}\n", doc.notifications);

    println!("Approving:");
    let state = machine
        .consume(DocEvent::Approve, &mut doc)
        .expect("review documents can be approved");
    println!("  state is now {state:?}");

    println!("\n=== Example Complete ===");
}
