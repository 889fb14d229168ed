//! Chunks: maximal runs of rows sharing one classification.

use serde::Serialize;

use super::inline::InlineDiff;
use super::row::{Languages, Row};

/// Classification of a run of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// Rows present in both samples with identical content.
    Unchanged,
    /// Rows only present in the result.
    Added,
    /// Rows only present in the reference.
    Removed,
    /// Result rows paired with a reference row of different content.
    Changed,
}

impl ChunkKind {
    /// Whether a renderer should highlight rows of this kind.
    pub fn is_highlighted(&self) -> bool {
        !matches!(self, ChunkKind::Unchanged)
    }

    /// Get a single-character marker for this kind.
    pub fn marker(&self) -> char {
        match self {
            ChunkKind::Unchanged => ' ',
            ChunkKind::Added => '+',
            ChunkKind::Removed => '-',
            ChunkKind::Changed => '~',
        }
    }
}

/// The reference partner of one changed row, with per-column inline diffs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDifference {
    /// The reference row this result row replaced.
    pub previous: Row,
    /// Inline diff per language column (empty when inline diffing is disabled).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<InlineDiff>,
}

impl RowDifference {
    /// Inline diff for a language code, if computed.
    pub fn column(&self, languages: &Languages, code: &str) -> Option<&InlineDiff> {
        languages
            .index_of(code)
            .and_then(|index| self.columns.get(index))
    }
}

/// A maximal contiguous run of rows with the same classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    pub kind: ChunkKind,
    /// Rows in this run. Result rows, except for removed chunks which hold
    /// the reference rows that were dropped.
    pub value: Vec<Row>,
    /// Number of rows in `value`.
    pub count: usize,
    /// Only for changed chunks: entry `j` pairs with `value[j]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub differences: Vec<RowDifference>,
    /// Index in the result sample where this run starts. Removed chunks
    /// report the position the rows were dropped at.
    pub result_start: usize,
}

impl Chunk {
    /// Create an empty chunk.
    pub fn new(kind: ChunkKind, result_start: usize) -> Self {
        Self {
            kind,
            value: Vec::new(),
            count: 0,
            differences: Vec::new(),
            result_start,
        }
    }

    /// Append a row.
    pub fn push(&mut self, row: Row) {
        self.value.push(row);
        self.count += 1;
    }

    /// Append a changed row together with its reference partner.
    pub fn push_changed(&mut self, row: Row, difference: RowDifference) {
        self.push(row);
        self.differences.push(difference);
    }

    /// Number of result rows this chunk covers.
    pub fn result_len(&self) -> usize {
        match self.kind {
            ChunkKind::Removed => 0,
            _ => self.count,
        }
    }
}
