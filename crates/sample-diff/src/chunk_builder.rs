//! Collapse classified rows into chunks.

use crate::inline_diff::inline_diff;
use crate::model::{Chunk, Row, RowDifference};
use crate::options::DiffOptions;
use crate::pairing::DiffEntry;

/// Merge consecutive entries of the same kind into chunks.
///
/// Unchanged chunks are kept so callers can index result rows; changed
/// chunks carry one [`RowDifference`] per row.
pub fn build_chunks(
    entries: &[DiffEntry],
    reference: &[Row],
    result: &[Row],
    options: &DiffOptions,
) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut result_pos = 0;

    for entry in entries {
        let kind = entry.kind();
        if chunks.last().map(|chunk| chunk.kind) != Some(kind) {
            chunks.push(Chunk::new(kind, result_pos));
        }
        let last = chunks.len() - 1;
        let chunk = &mut chunks[last];

        match *entry {
            DiffEntry::Unchanged { result: index } | DiffEntry::Added { result: index } => {
                chunk.push(result[index].clone());
                result_pos += 1;
            }
            DiffEntry::Removed { reference: index } => {
                chunk.push(reference[index].clone());
            }
            DiffEntry::Changed {
                result: index,
                previous,
            } => {
                let current = &result[index];
                let previous = &reference[previous];
                chunk.push_changed(current.clone(), row_difference(current, previous, options));
                result_pos += 1;
            }
        }
    }

    log::debug!(
        "built {} chunks from {} entries",
        chunks.len(),
        entries.len()
    );
    chunks
}

/// Pair a changed row with its previous version, diffing each column.
pub fn row_difference(current: &Row, previous: &Row, options: &DiffOptions) -> RowDifference {
    let columns = if options.inline {
        current
            .fields()
            .iter()
            .zip(previous.fields())
            .map(|(current, previous)| inline_diff(current, previous, options))
            .collect()
    } else {
        Vec::new()
    };

    RowDifference {
        previous: previous.clone(),
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChunkKind, Languages};
    use pretty_assertions::assert_eq;

    fn rows(texts: &[&str]) -> Vec<Row> {
        let languages = Languages::new(["en"]).unwrap();
        texts
            .iter()
            .map(|t| languages.row_from_fields([*t]).unwrap())
            .collect()
    }

    fn kinds(chunks: &[Chunk]) -> Vec<(ChunkKind, usize, usize)> {
        chunks
            .iter()
            .map(|c| (c.kind, c.count, c.result_start))
            .collect()
    }

    #[test]
    fn test_merges_runs_of_same_kind() {
        let reference = rows(&["a", "b", "c", "d"]);
        let result = rows(&["a", "B", "x", "d"]);
        let entries = [
            DiffEntry::Unchanged { result: 0 },
            DiffEntry::Changed { result: 1, previous: 1 },
            DiffEntry::Removed { reference: 2 },
            DiffEntry::Added { result: 2 },
            DiffEntry::Unchanged { result: 3 },
        ];

        let chunks = build_chunks(&entries, &reference, &result, &DiffOptions::default());
        assert_eq!(
            kinds(&chunks),
            vec![
                (ChunkKind::Unchanged, 1, 0),
                (ChunkKind::Changed, 1, 1),
                (ChunkKind::Removed, 1, 2),
                (ChunkKind::Added, 1, 2),
                (ChunkKind::Unchanged, 1, 3),
            ]
        );
        assert_eq!(chunks[2].value, rows(&["c"]));
        assert_eq!(chunks[1].differences[0].previous, reference[1]);
    }

    #[test]
    fn test_changed_chunk_has_parallel_differences() {
        let reference = rows(&["one", "two"]);
        let result = rows(&["One", "Two"]);
        let entries = [
            DiffEntry::Changed { result: 0, previous: 0 },
            DiffEntry::Changed { result: 1, previous: 1 },
        ];

        let chunks = build_chunks(&entries, &reference, &result, &DiffOptions::default());
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].value, result);
        assert_eq!(chunks[0].value.len(), chunks[0].differences.len());
        assert_eq!(chunks[0].differences[1].columns[0].previous(), "two");
    }

    #[test]
    fn test_inline_disabled_skips_columns() {
        let options = DiffOptions {
            inline: false,
            ..DiffOptions::default()
        };
        let difference = row_difference(&rows(&["new"])[0], &rows(&["old"])[0], &options);
        assert!(difference.columns.is_empty());
        assert_eq!(difference.previous, rows(&["old"])[0]);
    }

    #[test]
    fn test_no_entries_no_chunks() {
        assert!(build_chunks(&[], &[], &[], &DiffOptions::default()).is_empty());
    }
}
