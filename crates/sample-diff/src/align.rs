//! Line-level alignment of two row sequences.
//!
//! Each row is compared as a single token across all of its columns. The
//! result is a minimal edit script of keeps, inserts and deletes; telling a
//! changed row apart from a delete followed by an insert is left to
//! [`crate::pairing`].

use similar::{capture_diff_slices, DiffTag};

use crate::model::Row;
use crate::options::AlignmentAlgorithm;

/// One step of the edit script turning the reference into the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Row present, unchanged, in both samples.
    Kept { reference: usize, result: usize },
    /// Row only present in the result.
    Inserted { result: usize },
    /// Row only present in the reference.
    Deleted { reference: usize },
}

/// Compute a minimal edit script between two row sequences.
///
/// Kept rows keep their relative order. Every region between two kept rows
/// is emitted as all of its deletes followed by all of its inserts, so a
/// changed row ends up adjacent to its likely partner.
pub fn align(reference: &[Row], result: &[Row], algorithm: AlignmentAlgorithm) -> Vec<EditOp> {
    let ops = capture_diff_slices(algorithm.into(), reference, result);
    let mut script = Vec::with_capacity(reference.len().max(result.len()));
    let mut gap = Gap::default();

    for op in &ops {
        let (tag, old, new) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                gap.flush_into(&mut script);
                script.extend(
                    old.zip(new)
                        .map(|(reference, result)| EditOp::Kept { reference, result }),
                );
            }
            DiffTag::Delete | DiffTag::Insert | DiffTag::Replace => {
                gap.deleted.extend(old);
                gap.inserted.extend(new);
            }
        }
    }
    gap.flush_into(&mut script);

    log::debug!(
        "aligned {} reference rows with {} result rows into {} edit ops ({})",
        reference.len(),
        result.len(),
        script.len(),
        algorithm
    );
    script
}

/// Deletes and inserts collected between two kept rows.
#[derive(Default)]
struct Gap {
    deleted: Vec<usize>,
    inserted: Vec<usize>,
}

impl Gap {
    fn flush_into(&mut self, script: &mut Vec<EditOp>) {
        script.extend(
            self.deleted
                .drain(..)
                .map(|reference| EditOp::Deleted { reference }),
        );
        script.extend(self.inserted.drain(..).map(|result| EditOp::Inserted { result }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Languages;
    use pretty_assertions::assert_eq;

    fn rows(texts: &[&str]) -> Vec<Row> {
        let languages = Languages::new(["en"]).unwrap();
        texts
            .iter()
            .map(|t| languages.row_from_fields([*t]).unwrap())
            .collect()
    }

    #[test]
    fn test_identical_sequences_keep_everything() {
        let sample = rows(&["a", "b", "c"]);
        let script = align(&sample, &sample, AlignmentAlgorithm::Myers);
        assert_eq!(
            script,
            vec![
                EditOp::Kept { reference: 0, result: 0 },
                EditOp::Kept { reference: 1, result: 1 },
                EditOp::Kept { reference: 2, result: 2 },
            ]
        );
    }

    #[test]
    fn test_removed_middle_row() {
        let script = align(
            &rows(&["a", "b", "c"]),
            &rows(&["a", "c"]),
            AlignmentAlgorithm::Myers,
        );
        assert_eq!(
            script,
            vec![
                EditOp::Kept { reference: 0, result: 0 },
                EditOp::Deleted { reference: 1 },
                EditOp::Kept { reference: 2, result: 1 },
            ]
        );
    }

    #[test]
    fn test_replacement_emits_deletes_before_inserts() {
        let script = align(
            &rows(&["a", "x", "y", "d"]),
            &rows(&["a", "p", "d"]),
            AlignmentAlgorithm::Myers,
        );
        assert_eq!(
            script,
            vec![
                EditOp::Kept { reference: 0, result: 0 },
                EditOp::Deleted { reference: 1 },
                EditOp::Deleted { reference: 2 },
                EditOp::Inserted { result: 1 },
                EditOp::Kept { reference: 3, result: 2 },
            ]
        );
    }

    #[test]
    fn test_empty_sides() {
        let sample = rows(&["a", "b"]);
        for algorithm in [
            AlignmentAlgorithm::Myers,
            AlignmentAlgorithm::Patience,
            AlignmentAlgorithm::Lcs,
        ] {
            assert_eq!(
                align(&[], &sample, algorithm),
                vec![
                    EditOp::Inserted { result: 0 },
                    EditOp::Inserted { result: 1 }
                ]
            );
            assert_eq!(
                align(&sample, &[], algorithm),
                vec![
                    EditOp::Deleted { reference: 0 },
                    EditOp::Deleted { reference: 1 }
                ]
            );
            assert!(align(&[], &[], algorithm).is_empty());
        }
    }

    #[test]
    fn test_script_covers_every_row_once() {
        let reference = rows(&["a", "b", "c", "d", "e", "f"]);
        let result = rows(&["b", "c", "x", "e", "a", "f", "g"]);

        for algorithm in [
            AlignmentAlgorithm::Myers,
            AlignmentAlgorithm::Patience,
            AlignmentAlgorithm::Lcs,
        ] {
            let script = align(&reference, &result, algorithm);
            let mut seen_reference = Vec::new();
            let mut seen_result = Vec::new();
            for op in &script {
                match *op {
                    EditOp::Kept { reference: r, result: n } => {
                        assert_eq!(reference[r], result[n]);
                        seen_reference.push(r);
                        seen_result.push(n);
                    }
                    EditOp::Deleted { reference: r } => seen_reference.push(r),
                    EditOp::Inserted { result: n } => seen_result.push(n),
                }
            }
            seen_reference.sort();
            assert_eq!(seen_reference, (0..reference.len()).collect::<Vec<_>>());
            // result indices must already be in order
            assert_eq!(seen_result, (0..result.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_rows_differing_in_one_column_are_not_kept() {
        let languages = Languages::new(["en", "fr"]).unwrap();
        let row = |en: &str, fr: &str| languages.row_from_fields([en, fr]).unwrap();
        let reference = vec![row("a", "1"), row("b", "2"), row("c", "3")];
        let result = vec![row("a", "1"), row("b", "two"), row("c", "3")];

        for algorithm in [
            AlignmentAlgorithm::Myers,
            AlignmentAlgorithm::Patience,
            AlignmentAlgorithm::Lcs,
        ] {
            assert_eq!(
                align(&reference, &result, algorithm),
                vec![
                    EditOp::Kept { reference: 0, result: 0 },
                    EditOp::Deleted { reference: 1 },
                    EditOp::Inserted { result: 1 },
                    EditOp::Kept { reference: 2, result: 2 },
                ]
            );
        }
    }
}
