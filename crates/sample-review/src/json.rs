//! JSON output, with every row keyed by language code.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use sample_diff::{
    Chunk, ChunkKind, DiffStats, InlineDiff, Languages, Record, RowDifference, SampleDiff,
};
use serde::Serialize;

#[derive(Serialize)]
struct JsonDiff<'a> {
    languages: &'a Languages,
    compared: bool,
    chunks: Vec<JsonChunk<'a>>,
    stats: &'a DiffStats,
}

#[derive(Serialize)]
struct JsonChunk<'a> {
    kind: ChunkKind,
    count: usize,
    result_start: usize,
    value: Vec<Record>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    differences: Vec<JsonDifference<'a>>,
}

#[derive(Serialize)]
struct JsonDifference<'a> {
    previous: Record,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    columns: BTreeMap<&'a str, &'a InlineDiff>,
}

impl<'a> JsonChunk<'a> {
    fn new(languages: &'a Languages, chunk: &'a Chunk) -> Self {
        Self {
            kind: chunk.kind,
            count: chunk.count,
            result_start: chunk.result_start,
            value: chunk.value.iter().map(|row| row.to_record(languages)).collect(),
            differences: chunk
                .differences
                .iter()
                .map(|difference| JsonDifference::new(languages, difference))
                .collect(),
        }
    }
}

impl<'a> JsonDifference<'a> {
    fn new(languages: &'a Languages, difference: &'a RowDifference) -> Self {
        Self {
            previous: difference.previous.to_record(languages),
            columns: languages.iter().zip(&difference.columns).collect(),
        }
    }
}

/// Pretty-printed JSON for a comparison, ending in a newline.
pub fn render_json(diff: &SampleDiff) -> Result<String> {
    let view = JsonDiff {
        languages: &diff.languages,
        compared: diff.compared,
        chunks: diff
            .chunks
            .iter()
            .map(|chunk| JsonChunk::new(&diff.languages, chunk))
            .collect(),
        stats: &diff.stats,
    };
    let mut json = serde_json::to_string_pretty(&view).context("Failed to encode diff")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sample_diff::{compare, DiffOptions};
    use serde_json::{json, Value};

    fn parse(diff: &SampleDiff) -> Value {
        serde_json::from_str(&render_json(diff).unwrap()).unwrap()
    }

    #[test]
    fn test_rows_are_keyed_by_language() {
        let languages = Languages::new(["en", "fr"]).unwrap();
        let result = vec![languages.row_from_fields(["Hi", "Salut"]).unwrap()];
        let diff = compare(&languages, None, &result, &DiffOptions::default()).unwrap();

        let json = parse(&diff);
        assert_eq!(json["languages"], json!(["en", "fr"]));
        assert_eq!(json["compared"], false);
        assert_eq!(json["chunks"][0]["kind"], "unchanged");
        assert_eq!(json["chunks"][0]["value"], json!([{"en": "Hi", "fr": "Salut"}]));
        assert!(json["chunks"][0].get("differences").is_none());
    }

    #[test]
    fn test_changed_rows_key_previous_and_columns() {
        let languages = Languages::new(["en", "fr"]).unwrap();
        let reference = vec![languages.row_from_fields(["Hi there", "Salut"]).unwrap()];
        let result = vec![languages.row_from_fields(["Hi you", "Salut"]).unwrap()];
        let diff =
            compare(&languages, Some(&reference), &result, &DiffOptions::default()).unwrap();

        let json = parse(&diff);
        let difference = &json["chunks"][0]["differences"][0];
        assert_eq!(difference["previous"], json!({"en": "Hi there", "fr": "Salut"}));
        assert_eq!(
            difference["columns"]["en"],
            json!([
                {"tag": "equal", "text": "Hi "},
                {"tag": "deleted", "text": "there"},
                {"tag": "inserted", "text": "you"}
            ])
        );
        assert_eq!(
            difference["columns"]["fr"],
            json!([{"tag": "equal", "text": "Salut"}])
        );
        assert_eq!(json["stats"]["changes"], 1);
    }
}
