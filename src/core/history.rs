//! Linear undo/redo history.
//!
//! Two last-in-first-out stacks of executed commands. New work invalidates
//! the redo stack; undo and redo only move entries between the stacks.

use super::command::Command;
use super::error::{GalaError, HistoryStack};
use chrono::{DateTime, Utc};

/// A command sitting on one of the history stacks.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    /// The command, in the state its last apply or revert left it
    pub command: Command,
    /// When the entry was pushed onto its current stack
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub(crate) fn new(command: Command) -> Self {
        Self {
            command,
            recorded_at: Utc::now(),
        }
    }
}

/// The undo and redo stacks, most recent entry last.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    undo: Vec<HistoryEntry>,
    redo: Vec<HistoryEntry>,
    limit: Option<usize>,
}

impl CommandHistory {
    /// Create an unbounded, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history whose undo stack keeps at most `limit` entries.
    pub(crate) fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Entries available to undo, oldest first.
    pub fn undo_entries(&self) -> &[HistoryEntry] {
        &self.undo
    }

    /// Entries available to redo, oldest first.
    pub fn redo_entries(&self) -> &[HistoryEntry] {
        &self.redo
    }

    /// Record a freshly executed command, discarding every redo entry.
    pub(crate) fn record(&mut self, command: Command) {
        self.push_undo(command);
        self.redo.clear();
    }

    pub(crate) fn pop(&mut self, stack: HistoryStack) -> Result<Command, GalaError> {
        let entries = match stack {
            HistoryStack::Undo => &mut self.undo,
            HistoryStack::Redo => &mut self.redo,
        };
        entries
            .pop()
            .map(|entry| entry.command)
            .ok_or(GalaError::EmptyHistory { stack })
    }

    pub(crate) fn push_undo(&mut self, command: Command) {
        self.undo.push(HistoryEntry::new(command));
        if let Some(limit) = self.limit {
            if self.undo.len() > limit {
                let excess = self.undo.len() - limit;
                self.undo.drain(..excess);
            }
        }
    }

    pub(crate) fn push_redo(&mut self, command: Command) {
        self.redo.push(HistoryEntry::new(command));
    }

    pub(crate) fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
