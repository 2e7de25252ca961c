//! Error taxonomy for the guest-list engine.

use std::fmt;
use thiserror::Error;

/// Which history stack an operation tried to pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStack {
    Undo,
    Redo,
}

impl fmt::Display for HistoryStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}

/// Coarse classification of a [`GalaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input at construction time
    InvalidArgument,
    /// Guest is already on the list
    Conflict,
    /// Guest is not on the list
    NotFound,
    /// Undo or redo with nothing to pop
    EmptyHistory,
}

/// Errors raised by guests, commands and the engine.
///
/// Every failure leaves the engine exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GalaError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("guest exists already")]
    GuestExists { name: String },

    #[error("guest doesn't exist")]
    GuestNotFound { name: String },

    #[error("attempted pop on empty {stack} stack")]
    EmptyHistory { stack: HistoryStack },
}

impl GalaError {
    pub(crate) fn blank_name() -> Self {
        Self::InvalidArgument("name cannot be null or blank".to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::GuestExists { .. } => ErrorKind::Conflict,
            Self::GuestNotFound { .. } => ErrorKind::NotFound,
            Self::EmptyHistory { .. } => ErrorKind::EmptyHistory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_and_not_found_keep_short_messages() {
        let exists = GalaError::GuestExists {
            name: "Bob".to_string(),
        };
        let missing = GalaError::GuestNotFound {
            name: "Bob".to_string(),
        };

        assert_eq!(exists.to_string(), "guest exists already");
        assert_eq!(missing.to_string(), "guest doesn't exist");
    }

    #[test]
    fn empty_history_names_the_stack() {
        let undo = GalaError::EmptyHistory {
            stack: HistoryStack::Undo,
        };
        let redo = GalaError::EmptyHistory {
            stack: HistoryStack::Redo,
        };

        assert_eq!(undo.to_string(), "attempted pop on empty undo stack");
        assert_eq!(redo.to_string(), "attempted pop on empty redo stack");
    }

    #[test]
    fn kind_classifies_every_variant() {
        assert_eq!(GalaError::blank_name().kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            GalaError::GuestExists {
                name: "a".to_string()
            }
            .kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            GalaError::GuestNotFound {
                name: "a".to_string()
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            GalaError::EmptyHistory {
                stack: HistoryStack::Redo
            }
            .kind(),
            ErrorKind::EmptyHistory
        );
    }
}
