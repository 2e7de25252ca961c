//! Roster Export and Import
//!
//! This example exports a guest list as a roster and rebuilds an engine from it.
//!
//! Key concepts:
//! - Rosters capture guests and RSVPs, not undo/redo history
//! - Serialization formats (JSON for readability, binary for compactness)
//! - Validation reports every problem in a hand-edited roster at once
//!
//! Run with: cargo run --example roster_export

use gala::roster::{GuestRoster, RosterEntry, RosterError};
use gala::{Command, Gala, Guest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Roster Export Example ===\n");

    let mut gala = Gala::new();
    let ann = Guest::new("Ann")?;
    gala.execute(Command::add(ann.clone()))?;
    gala.execute(Command::add(Guest::new("Bob")?))?;
    gala.execute(Command::set_rsvp(&ann, true))?;

    let roster = gala.roster();
    let json = roster.to_json()?;
    println!("Exported roster {}:\n{json}\n", roster.id);

    let bytes = roster.to_binary()?;
    println!("Binary form is {} bytes, JSON is {}\n", bytes.len(), json.len());

    let restored = Gala::from_roster(GuestRoster::from_binary(&bytes)?)?;
    println!(
        "Restored {} guests, {} confirmed, undo depth {}\n",
        restored.len(),
        restored.list_confirmed().len(),
        restored.undo_depth()
    );

    // A hand-edited roster with more than one mistake.
    let mut edited = GuestRoster::from_json(&json)?;
    edited.guests.push(RosterEntry {
        name: "   ".to_string(),
        rsvp: false,
    });
    edited.guests.push(RosterEntry {
        name: "Ann".to_string(),
        rsvp: false,
    });

    match Gala::from_roster(edited) {
        Err(RosterError::Invalid(violations)) => {
            println!("Edited roster rejected:");
            for violation in &violations {
                println!("  - {violation}");
            }
        }
        Err(err) => println!("Edited roster unreadable: {err}"),
        Ok(_) => println!("Edited roster unexpectedly accepted"),
    }

    println!("\nKey Takeaways:");
    println!("- Imported engines start with empty history");
    println!("- JSON format makes rosters human-readable");
    println!("- Validation accumulates all violations instead of stopping at the first");

    println!("\n=== Example Complete ===");
    Ok(())
}
