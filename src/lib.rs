//! Gala: a guest-list manager with reversible edits
//!
//! Every change to the guest list is a [`Command`] with a forward and an
//! inverse action. The [`Gala`] engine applies commands and keeps a linear
//! undo/redo history: undo and redo walk it one command at a time, and any
//! fresh command discards whatever could still have been redone.
//!
//! # Core Concepts
//!
//! - **Guest**: a name (identity) plus a mutable RSVP flag
//! - **Command**: add, delete or set-RSVP, each reversible
//! - **History**: two stacks, undo and redo, shared by all guests
//!
//! # Example
//!
//! ```rust
//! use gala::{Command, Gala, Guest};
//!
//! let mut gala = Gala::new();
//! let a = Guest::new("A").unwrap();
//! let b = Guest::new("B").unwrap();
//! let c = Guest::new("C").unwrap();
//!
//! gala.execute(Command::add(a.clone())).unwrap();
//! gala.execute(Command::add(b.clone())).unwrap();
//! gala.undo().unwrap();
//!
//! // A fresh command drops the undone `add(B)` for good.
//! gala.execute(Command::add(c.clone())).unwrap();
//! assert_eq!(gala.list_guests(), vec![a, c]);
//! assert_eq!(gala.redo_depth(), 0);
//! ```

pub mod builder;
pub mod core;
pub mod roster;
pub mod shared;

// Re-export commonly used types
pub use builder::GalaBuilder;
pub use crate::core::{Command, ErrorKind, Gala, GalaError, Guest};
pub use roster::GuestRoster;
pub use shared::SharedGala;
