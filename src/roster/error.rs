//! Roster error types.

use thiserror::Error;

/// A single problem found while validating a roster.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterViolation {
    #[error("Unsupported roster version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Guest at position {index} has a blank name")]
    BlankName { index: usize },

    #[error("Guest '{name}' at position {index} is listed more than once")]
    DuplicateName { name: String, index: usize },
}

/// Errors that can occur during roster export and import
#[derive(Debug, Error)]
pub enum RosterError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Roster failed validation; carries every violation found
    #[error("Roster validation failed with {} violation(s)", .0.len())]
    Invalid(Vec<RosterViolation>),
}
