//! Row totals by classification.

use serde::Serialize;

use crate::model::{Chunk, ChunkKind};

/// Added, removed and changed row totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub changes: usize,
}

impl DiffStats {
    /// Sum chunk row counts by classification.
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        chunks.iter().fold(Self::default(), |mut stats, chunk| {
            match chunk.kind {
                ChunkKind::Added => stats.additions += chunk.count,
                ChunkKind::Removed => stats.deletions += chunk.count,
                ChunkKind::Changed => stats.changes += chunk.count,
                ChunkKind::Unchanged => {}
            }
            stats
        })
    }

    /// Total number of highlighted rows.
    pub fn total(&self) -> usize {
        self.additions + self.deletions + self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
