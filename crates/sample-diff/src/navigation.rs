//! Cursor over the highlighted chunks of a comparison.

use crate::model::SampleDiff;

/// Steps through added, removed and changed chunks, skipping unchanged runs.
///
/// Positions are chunk indices into [`SampleDiff::chunks`]. Movement
/// saturates at both ends.
#[derive(Debug, Clone, Default)]
pub struct ChangeCursor {
    /// Chunk indices of highlighted chunks, ascending.
    changes: Vec<usize>,
    /// Result offsets of those chunks, parallel to `changes`.
    offsets: Vec<usize>,
    /// Position within `changes`, if any change is selected.
    selected: Option<usize>,
}

impl ChangeCursor {
    /// Create a cursor with nothing selected.
    pub fn new(diff: &SampleDiff) -> Self {
        let changes: Vec<usize> = diff.highlighted().collect();
        let offsets = changes
            .iter()
            .map(|&chunk| diff.chunks[chunk].result_start)
            .collect();
        Self {
            changes,
            offsets,
            selected: None,
        }
    }

    /// Number of highlighted chunks.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Chunk index of the selected change.
    pub fn current(&self) -> Option<usize> {
        self.selected.map(|position| self.changes[position])
    }

    /// Select the next change (the first one if nothing is selected).
    pub fn next(&mut self) -> Option<usize> {
        if self.changes.is_empty() {
            return None;
        }
        self.selected = Some(match self.selected {
            Some(position) if position + 1 < self.changes.len() => position + 1,
            Some(position) => position,
            None => 0,
        });
        self.current()
    }

    /// Select the previous change (the last one if nothing is selected).
    pub fn prev(&mut self) -> Option<usize> {
        if self.changes.is_empty() {
            return None;
        }
        self.selected = Some(match self.selected {
            Some(position) => position.saturating_sub(1),
            None => self.changes.len() - 1,
        });
        self.current()
    }

    /// Select the first change.
    pub fn first(&mut self) -> Option<usize> {
        self.selected = (!self.changes.is_empty()).then_some(0);
        self.current()
    }

    /// Select the last change.
    pub fn last(&mut self) -> Option<usize> {
        self.selected = self.changes.len().checked_sub(1);
        self.current()
    }

    /// Select the first change starting at or after a result row.
    pub fn seek(&mut self, result_row: usize) -> Option<usize> {
        let position = self.offsets.partition_point(|&offset| offset < result_row);
        if position < self.changes.len() {
            self.selected = Some(position);
        }
        self.current()
    }
}
