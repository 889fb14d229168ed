//! Token-level difference within a single text field.

use serde::Serialize;

/// Classification of an inline segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineTag {
    /// Present in both the previous and the current text.
    Equal,
    /// Present only in the current text.
    Inserted,
    /// Present only in the previous text.
    Deleted,
}

/// A run of consecutive tokens sharing one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSegment {
    pub tag: InlineTag,
    pub text: String,
}

impl InlineSegment {
    pub fn new(tag: InlineTag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }
}

/// Ordered, tagged segments describing how `previous` became `current`.
///
/// Adjacent segments never share a tag and no segment is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InlineDiff {
    segments: Vec<InlineSegment>,
}

impl InlineDiff {
    /// Append text, merging it into the last segment when the tag matches.
    pub fn push(&mut self, tag: InlineTag, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.tag == tag => last.text.push_str(text),
            _ => self.segments.push(InlineSegment::new(tag, text)),
        }
    }

    pub fn segments(&self) -> &[InlineSegment] {
        &self.segments
    }

    /// Whether any segment was inserted or deleted.
    pub fn has_changes(&self) -> bool {
        self.segments.iter().any(|s| s.tag != InlineTag::Equal)
    }

    /// Reconstruct the current text (equal and inserted segments).
    pub fn current(&self) -> String {
        self.collect_except(InlineTag::Deleted)
    }

    /// Reconstruct the previous text (equal and deleted segments).
    pub fn previous(&self) -> String {
        self.collect_except(InlineTag::Inserted)
    }

    fn collect_except(&self, skipped: InlineTag) -> String {
        self.segments
            .iter()
            .filter(|s| s.tag != skipped)
            .map(|s| s.text.as_str())
            .collect()
    }
}

impl FromIterator<InlineSegment> for InlineDiff {
    fn from_iter<T: IntoIterator<Item = InlineSegment>>(iter: T) -> Self {
        let mut diff = InlineDiff::default();
        for segment in iter {
            diff.push(segment.tag, &segment.text);
        }
        diff
    }
}
