//! Reclassification of raw edit scripts into unchanged, added, removed and
//! changed rows.
//!
//! The line-level aligner only knows keeps, inserts and deletes. A row whose
//! content changed in a single column shows up as a delete plus an insert;
//! the pairer decides which of those belong together.

use crate::align::EditOp;
use crate::model::{ChunkKind, Row};

/// Classification of a single row after pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffEntry {
    /// Result row identical to a reference row (or no reference compared).
    Unchanged { result: usize },
    /// Result row with no reference partner.
    Added { result: usize },
    /// Reference row with no result partner.
    Removed { reference: usize },
    /// Result row that replaced the reference row `previous`.
    Changed { result: usize, previous: usize },
}

impl DiffEntry {
    pub fn kind(&self) -> ChunkKind {
        match self {
            DiffEntry::Unchanged { .. } => ChunkKind::Unchanged,
            DiffEntry::Added { .. } => ChunkKind::Added,
            DiffEntry::Removed { .. } => ChunkKind::Removed,
            DiffEntry::Changed { .. } => ChunkKind::Changed,
        }
    }
}

/// Strategy that turns one gap of deletes and inserts into classified entries.
///
/// A gap is everything between two kept rows. `deleted` holds reference
/// indices and `inserted` result indices, both ascending. Implementations
/// must emit every index exactly once and keep result indices ascending.
pub trait RowPairer {
    fn pair_gap(
        &self,
        reference: &[Row],
        result: &[Row],
        deleted: &[usize],
        inserted: &[usize],
        entries: &mut Vec<DiffEntry>,
    );
}

/// Pairs the n-th deleted row with the n-th inserted row.
///
/// For a gap of `d` deletes and `i` inserts, the first `min(d, i)` of each
/// become changed rows. Surplus deletes stay removed and surplus inserts stay
/// added, emitted after the changed rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalPairer;

impl RowPairer for PositionalPairer {
    fn pair_gap(
        &self,
        _reference: &[Row],
        _result: &[Row],
        deleted: &[usize],
        inserted: &[usize],
        entries: &mut Vec<DiffEntry>,
    ) {
        let paired = deleted.len().min(inserted.len());
        log::trace!(
            "pairing gap of {} deletes and {} inserts: {} changed",
            deleted.len(),
            inserted.len(),
            paired
        );

        entries.extend(
            inserted
                .iter()
                .zip(deleted)
                .map(|(&result, &previous)| DiffEntry::Changed { result, previous }),
        );
        entries.extend(
            deleted[paired..]
                .iter()
                .map(|&reference| DiffEntry::Removed { reference }),
        );
        entries.extend(
            inserted[paired..]
                .iter()
                .map(|&result| DiffEntry::Added { result }),
        );
    }
}

/// Classify an edit script, handing each gap to `pairer`.
pub fn classify<P>(
    script: &[EditOp],
    reference: &[Row],
    result: &[Row],
    pairer: &P,
) -> Vec<DiffEntry>
where
    P: RowPairer + ?Sized,
{
    let mut entries = Vec::with_capacity(script.len());
    let mut deleted = Vec::new();
    let mut inserted = Vec::new();

    for op in script {
        match *op {
            EditOp::Kept { result: index, .. } => {
                flush_gap(pairer, reference, result, &mut deleted, &mut inserted, &mut entries);
                entries.push(DiffEntry::Unchanged { result: index });
            }
            EditOp::Deleted { reference: index } => deleted.push(index),
            EditOp::Inserted { result: index } => inserted.push(index),
        }
    }
    flush_gap(pairer, reference, result, &mut deleted, &mut inserted, &mut entries);

    entries
}

fn flush_gap<P>(
    pairer: &P,
    reference: &[Row],
    result: &[Row],
    deleted: &mut Vec<usize>,
    inserted: &mut Vec<usize>,
    entries: &mut Vec<DiffEntry>,
) where
    P: RowPairer + ?Sized,
{
    if deleted.is_empty() && inserted.is_empty() {
        return;
    }
    pairer.pair_gap(reference, result, deleted, inserted, entries);
    deleted.clear();
    inserted.clear();
}
