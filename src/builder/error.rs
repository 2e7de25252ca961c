//! Build errors for the engine builder.

use thiserror::Error;

/// Errors that can occur when building a [`Gala`](crate::core::Gala).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Guest '{name}' was seeded more than once")]
    DuplicateGuest { name: String },

    #[error("History limit must be at least 1. Omit .history_limit() for unbounded history")]
    ZeroHistoryLimit,
}
