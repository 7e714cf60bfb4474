//! Error types for the Scrawl interpreter

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A diagnostic carrying enough location information to place a caret.
///
/// Both the parser and the interpreter report failures as values of this
/// type; no panics cross the parse/evaluate boundary. `offset` is the
/// character index of the first character the error pertains to, and
/// `length` the span it covers. Either may be absent when the error has no
/// meaningful anchor (e.g. a failure on a synthesized expression).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct LocatedError {
    /// Human-readable description of the failure
    pub message: String,
    /// Character offset of the first character the error pertains to
    pub offset: Option<usize>,
    /// Number of characters the error spans
    pub length: Option<usize>,
}

impl LocatedError {
    /// Creates an error with no location information.
    pub fn new(message: impl Into<String>) -> Self {
        LocatedError {
            message: message.into(),
            offset: None,
            length: None,
        }
    }

    /// Creates an error anchored at a source offset.
    pub fn at(message: impl Into<String>, offset: Option<usize>) -> Self {
        LocatedError {
            message: message.into(),
            offset,
            length: None,
        }
    }

    /// Creates an error covering a span of the source.
    pub fn spanning(message: impl Into<String>, offset: usize, length: usize) -> Self {
        LocatedError {
            message: message.into(),
            offset: Some(offset),
            length: Some(length),
        }
    }
}

/// Result type for Scrawl operations
pub type Result<T> = std::result::Result<T, LocatedError>;
