//! Decoding of sample text into rows.

mod tsv;

pub use tsv::{parse_tsv, write_tsv};
