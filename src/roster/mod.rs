//! Export and import of the guest list.
//!
//! A roster is a plain-data snapshot of who is invited and who has
//! confirmed. It deliberately leaves the undo/redo history out: an engine
//! rebuilt from a roster starts with empty stacks.
//!
//! Validation accumulates every problem in one pass with Stillwater's
//! `Validation`, so a hand-edited roster reports all of its mistakes at once.

use crate::core::{CommandHistory, Gala, Guest, GuestList};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{info, warn};
use uuid::Uuid;

pub mod error;

pub use error::{RosterError, RosterViolation};

/// Version identifier for roster format
pub const ROSTER_VERSION: u32 = 1;

/// One guest as written in a roster. Unchecked until validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default)]
    pub rsvp: bool,
}

impl From<&Guest> for RosterEntry {
    fn from(guest: &Guest) -> Self {
        Self {
            name: guest.name().to_string(),
            rsvp: guest.has_rsvp(),
        }
    }
}

/// Serializable snapshot of a guest list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuestRoster {
    /// Roster format version
    pub version: u32,

    /// Unique roster identifier
    pub id: String,

    /// When the roster was taken
    pub exported_at: DateTime<Utc>,

    /// Guests in list order
    pub guests: Vec<RosterEntry>,
}

impl GuestRoster {
    /// Snapshot `guests` into a fresh roster.
    pub fn from_guests<'a, I>(guests: I) -> Self
    where
        I: IntoIterator<Item = &'a Guest>,
    {
        Self {
            version: ROSTER_VERSION,
            id: Uuid::new_v4().to_string(),
            exported_at: Utc::now(),
            guests: guests.into_iter().map(RosterEntry::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, RosterError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RosterError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        serde_json::from_str(json)
            .map_err(|e| RosterError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, RosterError> {
        bincode::serialize(self).map_err(|e| RosterError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, RosterError> {
        bincode::deserialize(bytes)
            .map_err(|e| RosterError::DeserializationFailed(e.to_string()))
    }

    /// Check the roster, collecting ALL violations.
    pub fn validate(&self) -> Result<(), RosterError> {
        self.check().map(|_| ())
    }

    /// Build the guest list entry by entry, recording a violation wherever an
    /// entry cannot be admitted.
    fn check(&self) -> Result<GuestList, RosterError> {
        let mut checks: Vec<Validation<(), NonEmptyVec<RosterViolation>>> = Vec::new();

        checks.push(if self.version == ROSTER_VERSION {
            Validation::success(())
        } else {
            Validation::fail(RosterViolation::UnsupportedVersion {
                found: self.version,
                supported: ROSTER_VERSION,
            })
        });

        let mut list = GuestList::new();
        for (index, entry) in self.guests.iter().enumerate() {
            let check = match Guest::new(entry.name.clone()) {
                Err(_) => Validation::fail(RosterViolation::BlankName { index }),
                Ok(mut guest) => {
                    guest.set_rsvp(entry.rsvp);
                    match list.insert(guest) {
                        Ok(()) => Validation::success(()),
                        Err(duplicate) => Validation::fail(RosterViolation::DuplicateName {
                            name: duplicate.name().to_string(),
                            index,
                        }),
                    }
                }
            };
            checks.push(check);
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(list),
            Validation::Failure(errors) => {
                Err(RosterError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}

impl Gala {
    /// Snapshot the current guest list.
    pub fn roster(&self) -> GuestRoster {
        GuestRoster::from_guests(self.guests().iter())
    }

    /// Build an engine whose guest list matches `roster`. History starts
    /// empty.
    pub fn from_roster(roster: GuestRoster) -> Result<Self, RosterError> {
        let list = match roster.check() {
            Ok(list) => list,
            Err(err) => {
                if let RosterError::Invalid(violations) = &err {
                    warn!(
                        roster_id = %roster.id,
                        violations = violations.len(),
                        "roster rejected"
                    );
                }
                return Err(err);
            }
        };

        info!(roster_id = %roster.id, guests = list.len(), "roster imported");
        Ok(Gala::from_parts(list, CommandHistory::new()))
    }
}
