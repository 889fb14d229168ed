//! Tab-separated samples: one row per line, columns in language order.

use crate::error::SampleError;
use crate::model::{Languages, Row};

/// Parse tab-separated text into rows.
///
/// Line endings (`\n` or `\r\n`) are stripped. Every line must hold exactly
/// one field per language.
///
/// # Example
/// ```
/// use sample_diff::{parse_tsv, Languages};
///
/// let languages = Languages::new(["en", "fr"])?;
/// let rows = parse_tsv(&languages, "Hi\tSalut\nBye\tAu revoir\n")?;
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].get(&languages, "fr"), Some("Au revoir"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_tsv(languages: &Languages, text: &str) -> Result<Vec<Row>, SampleError> {
    let rows = text
        .lines()
        .enumerate()
        .map(|(index, line)| {
            languages
                .row_from_fields(line.split('\t'))
                .map_err(|_| SampleError::ColumnCount {
                    line: index + 1,
                    expected: languages.len(),
                    found: line.split('\t').count(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("parsed {} rows of {} columns", rows.len(), languages.len());
    Ok(rows)
}

/// Encode rows as tab-separated text, one line per row.
pub fn write_tsv(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.fields().join("\t"));
        out.push('\n');
    }
    out
}
