//! Language columns and the rows that hold one text field per column.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::error::{ColumnMismatch, DiffError};

/// A row as produced by the filter pipeline: text keyed by language code.
pub type Record = BTreeMap<String, String>;

/// The fixed, ordered set of language codes shared by both compared samples.
///
/// A `Languages` value is never empty and never contains a code twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Languages {
    codes: Vec<String>,
}

impl Languages {
    /// Create a language set, keeping the given column order.
    pub fn new<I, S>(codes: I) -> Result<Self, DiffError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        if codes.is_empty() {
            return Err(DiffError::EmptyLanguageSet);
        }

        let mut seen = HashSet::with_capacity(codes.len());
        for code in &codes {
            if !seen.insert(code.as_str()) {
                return Err(DiffError::DuplicateLanguage(code.clone()));
            }
        }

        Ok(Self { codes })
    }

    /// Create a language set with columns in sorted code order.
    ///
    /// Sample files on disk store their columns in this order.
    pub fn sorted<I, S>(codes: I) -> Result<Self, DiffError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        codes.sort();
        Self::new(codes)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The language codes in column order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Iterate over the language codes in column order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Column index of a language code.
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.codes.iter().position(|c| c == code)
    }

    /// Build a row from a code-to-text mapping.
    ///
    /// Every declared language must be present. Codes not in the set are ignored.
    pub fn row(&self, record: &Record) -> Result<Row, ColumnMismatch> {
        let missing: Vec<String> = self
            .codes
            .iter()
            .filter(|code| !record.contains_key(code.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(ColumnMismatch::Missing(missing));
        }

        let fields = self
            .codes
            .iter()
            .filter_map(|code| record.get(code).cloned())
            .collect();
        Ok(Row { fields })
    }

    /// Build a row from fields already in column order.
    pub fn row_from_fields<I, S>(&self, fields: I) -> Result<Row, ColumnMismatch>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.len() != self.codes.len() {
            return Err(ColumnMismatch::Count {
                expected: self.codes.len(),
                found: fields.len(),
            });
        }
        Ok(Row { fields })
    }
}

/// One record of aligned text, one field per language column.
///
/// Two rows are equal only when every field is byte-for-byte identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    /// All fields in column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at a column index.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Field for a language code.
    pub fn get(&self, languages: &Languages, code: &str) -> Option<&str> {
        languages.index_of(code).and_then(|index| self.field(index))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert back into the code-to-text mapping.
    pub fn to_record(&self, languages: &Languages) -> Record {
        languages
            .iter()
            .zip(&self.fields)
            .map(|(code, text)| (code.to_string(), text.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_languages_validation() {
        assert_eq!(
            Languages::new(Vec::<String>::new()),
            Err(DiffError::EmptyLanguageSet)
        );
        assert_eq!(
            Languages::new(["en", "fr", "en"]),
            Err(DiffError::DuplicateLanguage("en".to_string()))
        );

        let languages = Languages::new(["fr", "en"]).unwrap();
        assert_eq!(languages.codes(), &["fr".to_string(), "en".to_string()]);
        assert_eq!(languages.index_of("en"), Some(1));
        assert_eq!(languages.index_of("de"), None);
    }

    #[test]
    fn test_sorted_languages() {
        let languages = Languages::sorted(["fra", "eng"]).unwrap();
        assert_eq!(languages.iter().collect::<Vec<_>>(), vec!["eng", "fra"]);
    }

    #[test]
    fn test_row_from_record() {
        let languages = Languages::new(["en", "fr"]).unwrap();
        let row = languages
            .row(&record(&[("fr", "Salut"), ("en", "Hi"), ("de", "Hallo")]))
            .unwrap();

        assert_eq!(row.fields(), &["Hi".to_string(), "Salut".to_string()]);
        assert_eq!(row.get(&languages, "fr"), Some("Salut"));
        assert_eq!(row.get(&languages, "de"), None);
        assert_eq!(row.to_record(&languages), record(&[("en", "Hi"), ("fr", "Salut")]));
    }

    #[test]
    fn test_row_missing_columns() {
        let languages = Languages::new(["en", "fr", "de"]).unwrap();
        let err = languages.row(&record(&[("en", "Hi")])).unwrap_err();
        assert_eq!(
            err,
            ColumnMismatch::Missing(vec!["fr".to_string(), "de".to_string()])
        );
    }

    #[test]
    fn test_row_from_fields_count() {
        let languages = Languages::new(["en", "fr"]).unwrap();
        assert!(languages.row_from_fields(["Hi", "Salut"]).is_ok());
        assert_eq!(
            languages.row_from_fields(["Hi"]),
            Err(ColumnMismatch::Count {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_row_equality_is_whole_row() {
        let languages = Languages::new(["en", "fr"]).unwrap();
        let a = languages.row_from_fields(["Hi", "Salut"]).unwrap();
        let b = languages.row_from_fields(["Hi", "Salut "]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
