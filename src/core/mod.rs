//! Core guest-list engine.
//!
//! This module contains the reversible-edit machinery:
//! - The `Guest` entity and the ordered `GuestList` the engine owns
//! - `Command`, the closed set of reversible mutations
//! - `CommandHistory`, the linear undo/redo stacks
//! - `Gala`, the engine tying them together
//!
//! Everything here is synchronous and in-memory. Failures never leave
//! partial state behind.

mod command;
mod engine;
mod error;
mod guest;
mod guest_list;
mod history;

pub use command::{Command, CommandKind};
pub use engine::Gala;
pub use error::{ErrorKind, GalaError, HistoryStack};
pub use guest::Guest;
pub use guest_list::GuestList;
pub use history::{CommandHistory, HistoryEntry};
