use acejump_common::{Position, TextRange};

use super::Placeholder;

/// Ranges between placeholder spans, used for dimming.
///
/// Each placeholder covers `[character, character + 1 + highlight_count)` on
/// its line. The result runs from `(0, 0)` to the first span, between
/// consecutive spans and from the last span to `(line_count, usize::MAX)`.
/// Empty gaps are omitted.
pub fn placeholder_holes<'a, I>(
    placeholders: I,
    line_count: usize,
    highlight_count: usize,
) -> Vec<TextRange>
where
    I: IntoIterator<Item = &'a Placeholder>,
{
    let mut spans: Vec<Position> = placeholders.into_iter().map(Placeholder::position).collect();
    spans.sort();

    let mut holes = Vec::with_capacity(spans.len() + 1);
    let mut cursor = Position::new(0, 0);

    for start in spans {
        if start > cursor {
            holes.push(TextRange::new(cursor, start));
        }
        let end = Position::new(start.line, start.character + 1 + highlight_count);
        cursor = cursor.max(end);
    }

    let document_end = Position::new(line_count, usize::MAX);
    if document_end > cursor {
        holes.push(TextRange::new(cursor, document_end));
    }
    holes
}
