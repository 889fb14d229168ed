//! Data models for sample comparison.

mod chunk;
mod inline;
mod row;
mod sample_diff;

pub use chunk::{Chunk, ChunkKind, RowDifference};
pub use inline::{InlineDiff, InlineSegment, InlineTag};
pub use row::{Languages, Record, Row};
pub use sample_diff::SampleDiff;
