//! Plain-text rendering of a comparison as an interleaved review.
//!
//! Each row prints as one line: a kind marker, the result row number and the
//! fields as `code: text`, separated by ` | `. Changed rows inline their
//! differences as `[-deleted-]` and `{+inserted+}`.

use sample_diff::{Chunk, ChunkKind, InlineDiff, InlineTag, Languages, Row, SampleDiff};

/// Render a comparison, collapsing long unchanged runs.
pub fn render_text(diff: &SampleDiff, context: usize) -> String {
    let mut lines = Vec::new();
    let last = diff.chunks.len().saturating_sub(1);

    for (index, chunk) in diff.chunks.iter().enumerate() {
        match chunk.kind {
            ChunkKind::Unchanged => {
                let head = if index > 0 { context } else { 0 };
                let tail = if index < last { context } else { 0 };
                render_unchanged(&mut lines, diff, chunk, head, tail);
            }
            ChunkKind::Added => {
                for (offset, row) in chunk.value.iter().enumerate() {
                    let number = Some(chunk.result_start + offset);
                    lines.push(row_line(chunk.kind.marker(), number, &diff.languages, row));
                }
            }
            ChunkKind::Removed => {
                for row in &chunk.value {
                    lines.push(row_line(chunk.kind.marker(), None, &diff.languages, row));
                }
            }
            ChunkKind::Changed => render_changed(&mut lines, diff, chunk),
        }
    }

    let stats = &diff.stats;
    if diff.compared {
        lines.push(format!(
            "{} added, {} removed, {} changed",
            stats.additions, stats.deletions, stats.changes
        ));
    }

    lines.into_iter().map(|line| line + "\n").collect()
}

fn render_unchanged(
    lines: &mut Vec<String>,
    diff: &SampleDiff,
    chunk: &Chunk,
    head: usize,
    tail: usize,
) {
    let rows = &chunk.value;
    let marker = chunk.kind.marker();
    let line = |offset: usize, row: &Row| {
        row_line(marker, Some(chunk.result_start + offset), &diff.languages, row)
    };

    if !diff.compared || head + tail >= rows.len() {
        lines.extend(rows.iter().enumerate().map(|(offset, row)| line(offset, row)));
        return;
    }

    lines.extend(rows.iter().enumerate().take(head).map(|(offset, row)| line(offset, row)));
    lines.push(format!("... {} unchanged rows ...", rows.len() - head - tail));
    let skip = rows.len() - tail;
    lines.extend(rows.iter().enumerate().skip(skip).map(|(offset, row)| line(offset, row)));
}

fn render_changed(lines: &mut Vec<String>, diff: &SampleDiff, chunk: &Chunk) {
    for (offset, (row, difference)) in chunk.value.iter().zip(&chunk.differences).enumerate() {
        let number = chunk.result_start + offset;
        if difference.columns.is_empty() {
            let previous = &difference.previous;
            lines.push(row_line(ChunkKind::Removed.marker(), None, &diff.languages, previous));
            lines.push(row_line(chunk.kind.marker(), Some(number), &diff.languages, row));
            continue;
        }

        let fields: Vec<String> = diff
            .languages
            .iter()
            .zip(&difference.columns)
            .map(|(code, inline)| format!("{}: {}", code, mark_inline(inline)))
            .collect();
        lines.push(format_line(chunk.kind.marker(), Some(number), &fields));
    }
}

/// Inline diff with deleted and inserted runs wrapped in markers.
pub fn mark_inline(inline: &InlineDiff) -> String {
    inline
        .segments()
        .iter()
        .map(|segment| match segment.tag {
            InlineTag::Equal => segment.text.clone(),
            InlineTag::Deleted => format!("[-{}-]", segment.text),
            InlineTag::Inserted => format!("{{+{}+}}", segment.text),
        })
        .collect()
}

fn row_line(marker: char, number: Option<usize>, languages: &Languages, row: &Row) -> String {
    let fields: Vec<String> = languages
        .iter()
        .zip(row.fields())
        .map(|(code, text)| format!("{}: {}", code, text))
        .collect();
    format_line(marker, number, &fields)
}

fn format_line(marker: char, number: Option<usize>, fields: &[String]) -> String {
    let number = number.map(|n| (n + 1).to_string()).unwrap_or_default();
    format!("{} {:>5} | {}", marker, number, fields.join(" | "))
}
