/*!
 * Error types for the transcap application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when decoding a transcript document
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// Error when the document is not parseable JSON or lacks the expected shape
    #[error("Malformed transcript: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when an item is missing a field the conversion cannot proceed without
    #[error("Malformed transcript: item {index} has no {field}")]
    MissingField {
        /// Zero-based position of the offending item
        index: usize,
        /// Name of the absent field
        field: &'static str,
    },

    /// Error when a timestamp is present but cannot be read as decimal seconds
    #[error("Malformed transcript: item {index} has unreadable {field} ({value:?})")]
    UnreadableTimestamp {
        /// Zero-based position of the offending item
        index: usize,
        /// Name of the unreadable field
        field: &'static str,
        /// The raw value as it appeared on the wire
        value: String,
    },

    /// Error when a timestamp is readable but unusable
    #[error("Invalid timing: item {index} {reason}")]
    InvalidTiming {
        /// Zero-based position of the offending item
        index: usize,
        /// What made the timestamp unusable
        reason: String,
    },
}

/// Errors that can occur when validating segmentation settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when a word window bound is zero
    #[error("Word window bounds must be positive: min={min}, max={max}")]
    ZeroWordBound {
        /// Configured lower bound
        min: u32,
        /// Configured upper bound
        max: u32,
    },

    /// Error when the lower word bound exceeds the upper one
    #[error("Word window is inverted: min={min} exceeds max={max}")]
    InvertedWordBounds {
        /// Configured lower bound
        min: u32,
        /// Configured upper bound
        max: u32,
    },
}
