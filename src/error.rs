//! Custom error types for the preference editor.
//!
//! This module provides error handling for the backing file, the list
//! models and user input parsing.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Item;
use crate::storage::{PrefKey, ValueKind};

/// Main error type for preference operations.
#[derive(Error, Debug)]
pub enum PrefError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file does not hold the expected number of lines.
    #[error("Malformed preference file {}: expected 5 lines, found {lines}", .path.display())]
    MalformedFile { path: PathBuf, lines: usize },

    /// Name is not part of the item catalog.
    #[error("Unknown item '{0}'")]
    UnknownItem(String),

    /// Name does not refer to a preference key.
    #[error("Unknown preference key '{0}'. Use: option1, option2, line1, line2 or enabled")]
    UnknownKey(String),

    /// Item is not currently in the enabled list.
    #[error("Item '{0}' is not enabled")]
    ItemNotEnabled(Item),

    /// Row index past the end of a list.
    #[error("Row {row} out of range (list has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// Value kind does not match the key it is written to.
    #[error("Key '{key}' expects a {expected} value, got {found}")]
    ValueKindMismatch {
        key: PrefKey,
        expected: ValueKind,
        found: ValueKind,
    },

    /// Generic invalid input error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Platform config directory could not be resolved.
    #[error("Could not find config directory")]
    ConfigDirNotFound,
}

impl PrefError {
    /// Wrap an I/O error with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrefError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for preference operations.
pub type Result<T> = std::result::Result<T, PrefError>;
