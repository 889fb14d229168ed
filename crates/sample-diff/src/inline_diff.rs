//! Token-level diff of a single text field.

use similar::{ChangeTag, TextDiff};

use crate::model::{InlineDiff, InlineTag};
use crate::options::{DiffOptions, InlineGranularity};

/// Diff `previous` into `current` at the configured token granularity.
///
/// Whitespace is compared as-is; making it visible is up to the renderer.
pub fn inline_diff(current: &str, previous: &str, options: &DiffOptions) -> InlineDiff {
    let mut config = TextDiff::configure();
    config.algorithm(options.algorithm.into());

    let diff = match options.granularity {
        InlineGranularity::Words => config.diff_words(previous, current),
        InlineGranularity::Chars => config.diff_chars(previous, current),
        InlineGranularity::Graphemes => config.diff_graphemes(previous, current),
    };

    let mut inline = InlineDiff::default();
    for change in diff.iter_all_changes() {
        let tag = match change.tag() {
            ChangeTag::Equal => InlineTag::Equal,
            ChangeTag::Delete => InlineTag::Deleted,
            ChangeTag::Insert => InlineTag::Inserted,
        };
        inline.push(tag, change.value());
    }
    inline
}
