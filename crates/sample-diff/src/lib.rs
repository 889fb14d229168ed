//! # sample-diff
//!
//! Compares two aligned, multi-column text samples (a parallel corpus before
//! and after a filter stage) and explains how one became the other.
//!
//! ## Pipeline
//!
//! A comparison runs these steps in order, all pure and synchronous:
//!
//! 1. [`align`] computes a minimal row-level edit script, treating each row
//!    as one token compared across every language column.
//! 2. [`pairing`] turns adjacent deletes and inserts into changed rows.
//! 3. [`chunk_builder`] merges rows of the same kind into [`Chunk`]s and
//!    attaches per-column [`InlineDiff`]s to changed rows.
//! 4. [`DiffStats`] totals added, removed and changed rows.
//!
//! Callers only ever need [`compare`] (typed rows) or [`compare_records`]
//! (rows keyed by language code). Results are recomputed from scratch for
//! every call; caching is left to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use sample_diff::{compare, ChunkKind, DiffOptions, Languages};
//!
//! let languages = Languages::new(["en", "fr"])?;
//! let reference = vec![languages.row_from_fields(["Hi there", "Salut"])?];
//! let result = vec![languages.row_from_fields(["Hi you", "Salut"])?];
//!
//! let diff = compare(&languages, Some(&reference), &result, &DiffOptions::default())?;
//! assert_eq!(diff.chunks[0].kind, ChunkKind::Changed);
//! assert_eq!(diff.stats.changes, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod align;
pub mod chunk_builder;
pub mod compare;
pub mod error;
pub mod inline_diff;
pub mod model;
pub mod navigation;
pub mod options;
pub mod pairing;
pub mod parser;
pub mod stats;

// Re-export commonly used types
pub use compare::{compare, compare_records, compare_with};
pub use error::{ColumnMismatch, DiffError, SampleError, SampleSide};
pub use inline_diff::inline_diff;
pub use model::{
    Chunk, ChunkKind, InlineDiff, InlineSegment, InlineTag, Languages, Record, Row,
    RowDifference, SampleDiff,
};
pub use navigation::ChangeCursor;
pub use options::{AlignmentAlgorithm, DiffOptions, InlineGranularity, UnknownOption};
pub use pairing::{DiffEntry, PositionalPairer, RowPairer};
pub use parser::{parse_tsv, write_tsv};
pub use stats::DiffStats;
