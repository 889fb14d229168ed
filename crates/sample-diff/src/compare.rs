//! Entry points running a full comparison.

use crate::align::align;
use crate::chunk_builder::build_chunks;
use crate::error::{ColumnMismatch, DiffError, SampleSide};
use crate::model::{Languages, Record, Row, SampleDiff};
use crate::options::DiffOptions;
use crate::pairing::{classify, DiffEntry, PositionalPairer, RowPairer};

/// Compare a result sample against an optional reference sample.
///
/// Without a reference every result row is reported unchanged and no
/// alignment runs.
pub fn compare(
    languages: &Languages,
    reference: Option<&[Row]>,
    result: &[Row],
    options: &DiffOptions,
) -> Result<SampleDiff, DiffError> {
    compare_with(languages, reference, result, options, &PositionalPairer)
}

/// Like [`compare`], with a custom strategy for pairing changed rows.
pub fn compare_with<P>(
    languages: &Languages,
    reference: Option<&[Row]>,
    result: &[Row],
    options: &DiffOptions,
    pairer: &P,
) -> Result<SampleDiff, DiffError>
where
    P: RowPairer + ?Sized,
{
    if let Some(reference) = reference {
        check_columns(languages, SampleSide::Reference, reference)?;
    }
    check_columns(languages, SampleSide::Result, result)?;

    let Some(reference) = reference else {
        let entries: Vec<DiffEntry> = (0..result.len())
            .map(|result| DiffEntry::Unchanged { result })
            .collect();
        let chunks = build_chunks(&entries, &[], result, options);
        return Ok(SampleDiff::new(languages.clone(), false, chunks));
    };

    let script = align(reference, result, options.algorithm);
    let entries = classify(&script, reference, result, pairer);
    let chunks = build_chunks(&entries, reference, result, options);
    let diff = SampleDiff::new(languages.clone(), true, chunks);

    log::debug!(
        "compared {} reference rows with {} result rows: +{} -{} ~{}",
        reference.len(),
        result.len(),
        diff.stats.additions,
        diff.stats.deletions,
        diff.stats.changes
    );
    Ok(diff)
}

/// Compare samples given as code-to-text records.
///
/// Every row of both samples is validated before anything is compared; the
/// first inconsistent row fails the whole comparison, reference side first.
pub fn compare_records<I, S>(
    languages: I,
    reference: Option<&[Record]>,
    result: &[Record],
    options: &DiffOptions,
) -> Result<SampleDiff, DiffError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let languages = Languages::new(languages)?;
    let reference = reference
        .map(|records| to_rows(&languages, SampleSide::Reference, records))
        .transpose()?;
    let result = to_rows(&languages, SampleSide::Result, result)?;

    compare(&languages, reference.as_deref(), &result, options)
}

fn to_rows(
    languages: &Languages,
    side: SampleSide,
    records: &[Record],
) -> Result<Vec<Row>, DiffError> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            languages
                .row(record)
                .map_err(|mismatch| DiffError::InconsistentColumns {
                    side,
                    row,
                    mismatch,
                })
        })
        .collect()
}

fn check_columns(languages: &Languages, side: SampleSide, rows: &[Row]) -> Result<(), DiffError> {
    match rows.iter().position(|row| row.len() != languages.len()) {
        Some(row) => Err(DiffError::InconsistentColumns {
            side,
            row,
            mismatch: ColumnMismatch::Count {
                expected: languages.len(),
                found: rows[row].len(),
            },
        }),
        None => Ok(()),
    }
}
