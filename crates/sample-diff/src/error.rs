//! Errors raised while validating comparison input.

use std::fmt;
use thiserror::Error;

/// Which of the two compared samples a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSide {
    /// The sample before the pipeline stage.
    Reference,
    /// The sample after the pipeline stage.
    Result,
}

impl fmt::Display for SampleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleSide::Reference => f.write_str("reference"),
            SampleSide::Result => f.write_str("result"),
        }
    }
}

/// How a single row failed to match the declared language columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnMismatch {
    #[error("missing column(s): {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("expected {expected} columns, found {found}")]
    Count { expected: usize, found: usize },
}

/// Errors that fail a whole comparison.
///
/// None of these are transient: the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("language set is empty")]
    EmptyLanguageSet,
    #[error("language `{0}` is declared more than once")]
    DuplicateLanguage(String),
    #[error("{side} row {row}: {mismatch}")]
    InconsistentColumns {
        side: SampleSide,
        row: usize,
        mismatch: ColumnMismatch,
    },
}

/// Errors that can occur while decoding a tab-separated sample.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("line {line}: expected {expected} tab-separated fields, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
}
