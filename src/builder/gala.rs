//! Builder for constructing engines.

use crate::builder::error::BuildError;
use crate::core::{CommandHistory, Gala, Guest, GuestList};

/// Builder for configuring a [`Gala`] with a fluent API.
///
/// Seeded guests are part of the starting list, not commands: they cannot
/// be undone and the history starts empty.
///
/// # Example
///
/// ```rust
/// use gala::builder::GalaBuilder;
/// use gala::core::Guest;
///
/// let gala = GalaBuilder::new()
///     .guest(Guest::new("Ann").unwrap())
///     .guest(Guest::new("Bob").unwrap())
///     .history_limit(50)
///     .build()
///     .unwrap();
///
/// assert_eq!(gala.len(), 2);
/// assert_eq!(gala.undo_depth(), 0);
/// assert_eq!(gala.history().limit(), Some(50));
/// ```
#[derive(Debug, Default)]
pub struct GalaBuilder {
    guests: Vec<Guest>,
    history_limit: Option<usize>,
}

impl GalaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a guest present from the start.
    pub fn guest(mut self, guest: Guest) -> Self {
        self.guests.push(guest);
        self
    }

    /// Seed several guests at once, in order.
    pub fn guests<I>(mut self, guests: I) -> Self
    where
        I: IntoIterator<Item = Guest>,
    {
        self.guests.extend(guests);
        self
    }

    /// Keep at most `limit` commands on the undo stack, dropping the oldest.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the engine.
    /// Returns an error if a guest is seeded twice or the limit is zero.
    pub fn build(self) -> Result<Gala, BuildError> {
        if self.history_limit == Some(0) {
            return Err(BuildError::ZeroHistoryLimit);
        }

        let mut list = GuestList::new();
        for guest in self.guests {
            list.insert(guest)
                .map_err(|duplicate| BuildError::DuplicateGuest {
                    name: duplicate.name().to_string(),
                })?;
        }

        Ok(Gala::from_parts(
            list,
            CommandHistory::with_limit(self.history_limit),
        ))
    }
}
