//! The guest-list engine.

use super::command::Command;
use super::error::{GalaError, HistoryStack};
use super::guest::Guest;
use super::guest_list::GuestList;
use super::history::CommandHistory;
use tracing::debug;

/// Owns the guest list and its undo/redo history.
///
/// Every change goes through [`execute`](Gala::execute); [`undo`](Gala::undo)
/// and [`redo`](Gala::redo) walk the resulting timeline one command at a
/// time, across all guests, in strict reverse (or forward) order.
///
/// # Example
///
/// ```rust
/// use gala::core::{Command, Gala, Guest};
///
/// let mut gala = Gala::new();
/// let ann = Guest::new("Ann").unwrap();
///
/// gala.execute(Command::add(ann.clone())).unwrap();
/// gala.execute(Command::set_rsvp(&ann, true)).unwrap();
/// assert_eq!(gala.list_confirmed(), vec![ann.clone()]);
///
/// gala.undo().unwrap();
/// assert_eq!(gala.list_pending(), vec![ann.clone()]);
/// assert_eq!(gala.redo_depth(), 1);
///
/// gala.redo().unwrap();
/// assert!(gala.list_pending().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Gala {
    guests: GuestList,
    history: CommandHistory,
}

impl Gala {
    /// Create an engine with no guests and no history.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(guests: GuestList, history: CommandHistory) -> Self {
        Self { guests, history }
    }

    /// Apply `command` and record it.
    ///
    /// On success the command lands on the undo stack and the redo stack is
    /// emptied. On failure nothing changes and the command is dropped.
    pub fn execute(&mut self, mut command: Command) -> Result<(), GalaError> {
        if let Err(err) = command.apply(&mut self.guests) {
            debug!(command = %command, error = %err, "command rejected");
            return Err(err);
        }
        debug!(
            command = %command,
            discarded_redo = self.history.redo_depth(),
            "command executed"
        );
        self.history.record(command);
        Ok(())
    }

    /// Revert the most recent command and move it to the redo stack.
    pub fn undo(&mut self) -> Result<(), GalaError> {
        let mut command = self.history.pop(HistoryStack::Undo)?;
        command.revert(&mut self.guests);
        debug!(
            command = %command,
            undo_depth = self.history.undo_depth(),
            redo_depth = self.history.redo_depth() + 1,
            "command undone"
        );
        self.history.push_redo(command);
        Ok(())
    }

    /// Re-apply the most recently undone command and move it back to the
    /// undo stack. Redo does not clear the remaining redo entries.
    pub fn redo(&mut self) -> Result<(), GalaError> {
        let mut command = self.history.pop(HistoryStack::Redo)?;
        if let Err(err) = command.apply(&mut self.guests) {
            debug!(command = %command, error = %err, "redo rejected");
            self.history.push_redo(command);
            return Err(err);
        }
        debug!(
            command = %command,
            undo_depth = self.history.undo_depth() + 1,
            redo_depth = self.history.redo_depth(),
            "command redone"
        );
        self.history.push_undo(command);
        Ok(())
    }

    pub fn has_guest(&self, guest: &Guest) -> bool {
        self.guests.contains(guest.name())
    }

    pub fn get_guest(&self, name: &str) -> Option<&Guest> {
        self.guests.get(name)
    }

    /// Read-only view of the guest list.
    pub fn guests(&self) -> &GuestList {
        &self.guests
    }

    /// Copy of every guest, in insertion order.
    pub fn list_guests(&self) -> Vec<Guest> {
        self.guests.snapshot_where(|_| true)
    }

    /// Copy of the guests that have not confirmed, in insertion order.
    pub fn list_pending(&self) -> Vec<Guest> {
        self.guests.snapshot_where(|g| !g.has_rsvp())
    }

    /// Copy of the guests that have confirmed, in insertion order.
    pub fn list_confirmed(&self) -> Vec<Guest> {
        self.guests.snapshot_where(Guest::has_rsvp)
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_depth() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.redo_depth() > 0
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Forget both stacks. The guest list is left as is.
    pub fn clear_history(&mut self) {
        debug!(
            undo_depth = self.history.undo_depth(),
            redo_depth = self.history.redo_depth(),
            "history cleared"
        );
        self.history.clear();
    }
}
