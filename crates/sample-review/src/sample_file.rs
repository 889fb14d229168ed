//! Reading sample files from disk.
//!
//! Samples are tab-separated text, optionally gzip-compressed (`.gz`).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use sample_diff::{parse_tsv, Languages, Row};

/// Read and decode a sample file.
pub fn read_sample(path: &Path, languages: &Languages) -> Result<Vec<Row>> {
    let text = read_text(path)?;
    let rows = parse_tsv(languages, &text)
        .with_context(|| format!("Failed to parse sample {}", path.display()))?;
    log::info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn read_text(path: &Path) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("Failed to open sample {}", path.display()))?;

    let mut text = String::new();
    let read = if is_gzip(path) {
        GzDecoder::new(file).read_to_string(&mut text)
    } else {
        BufReader::new(file).read_to_string(&mut text)
    };
    read.with_context(|| format!("Failed to read sample {}", path.display()))?;

    Ok(text)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}
