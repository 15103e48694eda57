//! Error types for the move-selection engine.

use thiserror::Error;

/// Every recoverable failure the engine and the position parser report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("column {column} is out of range (must be 0-6)")]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("simulation count must be at least 1")]
    InvalidSimulationCount,

    #[error("unknown strategy '{name}' (expected UR, PMCGS or UCT)")]
    UnknownStrategy { name: String },

    #[error("invalid player '{token}' (expected 'R' or 'Y')")]
    InvalidPlayer { token: String },

    #[error("invalid verbosity '{token}' (expected Verbose, Brief or None)")]
    InvalidVerbosity { token: String },

    #[error("position text ends before line {line}")]
    MissingLine { line: usize },

    #[error("row {row} has {len} cells, expected 7")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid cell '{token}' at row {row}, column {column} (expected 'O', 'R' or 'Y')")]
    InvalidCellToken {
        token: char,
        row: usize,
        column: usize,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
