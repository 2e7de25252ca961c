//! Reversible guest-list commands.
//!
//! A command carries a forward action (`apply`) and its inverse (`revert`).
//! Both are crate-private: the engine is the only caller, which is what
//! makes the lenient `revert` contract sound.
//!
//! | Command  | apply                          | revert                          |
//! |----------|--------------------------------|---------------------------------|
//! | add      | insert, `GuestExists` if taken | remove if present               |
//! | delete   | remove, `GuestNotFound` if not | re-insert if absent             |
//! | rsvp     | set flag, `GuestNotFound`      | set the negated flag            |

use super::error::GalaError;
use super::guest::Guest;
use super::guest_list::GuestList;
use std::fmt;

/// Which of the three mutations a [`Command`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    Delete,
    SetRsvp,
}

#[derive(Clone, Debug)]
enum Op {
    /// Holds the guest as last seen outside the list. Refreshed on revert so
    /// a redo re-inserts the same state the undo took out.
    Add { guest: Guest },
    /// Holds the guest as last removed, so revert restores its RSVP flag.
    Delete { guest: Guest },
    SetRsvp { name: String, rsvp: bool },
}

/// A reversible mutation of the guest list.
///
/// Construct one with [`Command::add`], [`Command::delete`] or
/// [`Command::set_rsvp`] and hand it to
/// [`Gala::execute`](crate::core::Gala::execute).
#[derive(Clone, Debug)]
pub struct Command {
    op: Op,
}

impl Command {
    /// Put `guest` on the list.
    pub fn add(guest: Guest) -> Self {
        Self {
            op: Op::Add { guest },
        }
    }

    /// Take the guest with this identity off the list.
    pub fn delete(guest: &Guest) -> Self {
        Self {
            op: Op::Delete {
                guest: guest.clone(),
            },
        }
    }

    /// Set the RSVP flag of the guest with this identity.
    pub fn set_rsvp(guest: &Guest, rsvp: bool) -> Self {
        Self {
            op: Op::SetRsvp {
                name: guest.name().to_string(),
                rsvp,
            },
        }
    }

    pub fn kind(&self) -> CommandKind {
        match &self.op {
            Op::Add { .. } => CommandKind::Add,
            Op::Delete { .. } => CommandKind::Delete,
            Op::SetRsvp { .. } => CommandKind::SetRsvp,
        }
    }

    /// Short stable name used in logs.
    pub fn label(&self) -> &'static str {
        match self.kind() {
            CommandKind::Add => "add",
            CommandKind::Delete => "delete",
            CommandKind::SetRsvp => "rsvp",
        }
    }

    /// Identity of the guest this command targets.
    pub fn guest_name(&self) -> &str {
        match &self.op {
            Op::Add { guest } | Op::Delete { guest } => guest.name(),
            Op::SetRsvp { name, .. } => name,
        }
    }

    /// Forward action. On failure the list is left untouched.
    pub(crate) fn apply(&mut self, guests: &mut GuestList) -> Result<(), GalaError> {
        match &mut self.op {
            Op::Add { guest } => guests
                .insert(guest.clone())
                .map_err(|rejected| GalaError::GuestExists {
                    name: rejected.name().to_string(),
                }),
            Op::Delete { guest } => match guests.remove(guest.name()) {
                Some(removed) => {
                    *guest = removed;
                    Ok(())
                }
                None => Err(GalaError::GuestNotFound {
                    name: guest.name().to_string(),
                }),
            },
            Op::SetRsvp { name, rsvp } => match guests.get_mut(name) {
                Some(target) => {
                    target.set_rsvp(*rsvp);
                    Ok(())
                }
                None => Err(GalaError::GuestNotFound { name: name.clone() }),
            },
        }
    }

    /// Inverse action. Never fails; a missing or already-restored guest is
    /// a no-op.
    pub(crate) fn revert(&mut self, guests: &mut GuestList) {
        match &mut self.op {
            Op::Add { guest } => {
                if let Some(removed) = guests.remove(guest.name()) {
                    *guest = removed;
                }
            }
            Op::Delete { guest } => {
                // Err means the guest is already back; nothing to do.
                let _ = guests.insert(guest.clone());
            }
            Op::SetRsvp { name, rsvp } => {
                if let Some(target) = guests.get_mut(name) {
                    target.set_rsvp(!*rsvp);
                }
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.op {
            Op::SetRsvp { name, rsvp } => {
                let rsvp = if *rsvp { "yes" } else { "no" };
                write!(f, "{}({}, {})", self.label(), name, rsvp)
            }
            _ => write!(f, "{}({})", self.label(), self.guest_name()),
        }
    }
}
