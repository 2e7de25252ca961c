//! Undo/Redo Walk
//!
//! This example walks one evening's guest list back and forth through its history.
//!
//! Key concepts:
//! - Every edit is a reversible command (add, delete, set-RSVP)
//! - Undo and redo move one command at a time between two stacks
//! - A fresh command after undo discards the redo branch
//! - Failed commands leave both the list and the history untouched
//!
//! Run with: cargo run --example undo_redo_walk

use gala::{Command, Gala, GalaError, Guest};

fn show(gala: &Gala, step: &str) {
    let names = |guests: Vec<Guest>| {
        guests
            .iter()
            .map(|g| g.name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("{step}");
    println!("  pending:   [{}]", names(gala.list_pending()));
    println!("  confirmed: [{}]", names(gala.list_confirmed()));
    println!(
        "  undo depth: {}, redo depth: {}\n",
        gala.undo_depth(),
        gala.redo_depth()
    );
}

fn main() -> Result<(), GalaError> {
    println!("=== Undo/Redo Walk Example ===\n");

    let mut gala = Gala::new();
    let ann = Guest::new("Ann")?;
    let bob = Guest::new("Bob")?;
    let cid = Guest::new("Cid")?;

    gala.execute(Command::add(ann.clone()))?;
    gala.execute(Command::add(bob.clone()))?;
    gala.execute(Command::set_rsvp(&ann, true))?;
    show(&gala, "Invited Ann and Bob, Ann confirmed:");

    gala.execute(Command::delete(&bob))?;
    show(&gala, "Bob removed from the list:");

    gala.undo()?;
    gala.undo()?;
    show(&gala, "Undid the delete and Ann's RSVP:");

    gala.redo()?;
    show(&gala, "Redid Ann's RSVP:");

    gala.execute(Command::add(cid.clone()))?;
    show(&gala, "Invited Cid, which drops the pending redo of the delete:");

    match gala.execute(Command::add(cid)) {
        Err(err) => println!("Inviting Cid twice fails: {err}\n"),
        Ok(()) => println!("Unexpectedly invited Cid twice\n"),
    }

    println!("History, oldest first:");
    for entry in gala.history().undo_entries() {
        println!(
            "  {} at {}",
            entry.command,
            entry.recorded_at.format("%H:%M:%S%.3f")
        );
    }

    while gala.can_undo() {
        gala.undo()?;
    }
    show(&gala, "\nEverything undone:");

    if let Err(err) = gala.undo() {
        println!("One more undo: {err}");
    }

    println!("\nKey Takeaways:");
    println!("- Undo replays each command's inverse in reverse order");
    println!("- Redo is only available until the next fresh command");
    println!("- Rejected commands are never recorded");

    println!("\n=== Example Complete ===");
    Ok(())
}
