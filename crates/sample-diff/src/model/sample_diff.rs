//! The complete outcome of comparing two samples.

use serde::Serialize;

use super::chunk::Chunk;
use super::row::Languages;
use crate::stats::DiffStats;

/// Chunks and totals for one comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleDiff {
    /// The language columns both samples share.
    pub languages: Languages,
    /// Whether a reference sample was compared against.
    pub compared: bool,
    /// All chunks in order, unchanged runs included.
    pub chunks: Vec<Chunk>,
    /// Totals across all chunks.
    pub stats: DiffStats,
}

impl SampleDiff {
    /// Create a diff from chunks, computing the totals.
    pub fn new(languages: Languages, compared: bool, chunks: Vec<Chunk>) -> Self {
        let mut diff = Self {
            languages,
            compared,
            chunks,
            stats: DiffStats::default(),
        };
        diff.recalculate_stats();
        diff
    }

    /// Recalculate totals from chunks, after they were edited in place.
    pub fn recalculate_stats(&mut self) {
        self.stats = DiffStats::from_chunks(&self.chunks);
    }

    /// Index in the result sample where a chunk starts.
    pub fn result_offset(&self, chunk: usize) -> Option<usize> {
        self.chunks.get(chunk).map(|c| c.result_start)
    }

    /// Indices of chunks a renderer should highlight.
    pub fn highlighted(&self) -> impl Iterator<Item = usize> + '_ {
        self.chunks
            .iter()
            .enumerate()
            .filter(|(_, chunk)| chunk.kind.is_highlighted())
            .map(|(index, _)| index)
    }

    /// Whether the two samples differ at all.
    pub fn has_changes(&self) -> bool {
        !self.stats.is_empty()
    }

    /// Number of result rows covered by the chunks.
    pub fn result_len(&self) -> usize {
        self.chunks.iter().map(Chunk::result_len).sum()
    }
}
