//! In-memory editor used by the command-line harness and tests.

use std::time::Duration;

use acejump_common::{LineRange, Position, ScrollAlign, Selection};
use tracing::debug;

use crate::host::EditorHost;

/// A plain text buffer with a cursor and a configurable viewport.
#[derive(Debug, Clone)]
pub struct MemoryEditor {
    lines: Vec<String>,
    selection: Selection,
    visible: Vec<LineRange>,
    status: Vec<String>,
    revealed: Vec<(usize, ScrollAlign)>,
}

impl MemoryEditor {
    /// Build an editor over `text`, showing the whole document.
    ///
    /// Lines are split on `\n`; a trailing `\r` is dropped so CRLF buffers
    /// report the same columns as LF ones.
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        let visible = vec![LineRange::new(0, lines.len().saturating_sub(1))];

        Self {
            lines,
            selection: Selection::cursor(Position::new(0, 0)),
            visible,
            status: Vec::new(),
            revealed: Vec::new(),
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_visible_ranges(mut self, ranges: Vec<LineRange>) -> Self {
        self.visible = ranges;
        self
    }

    /// Scroll or fold the viewport.
    pub fn set_visible_ranges(&mut self, ranges: Vec<LineRange>) {
        self.visible = ranges;
    }

    /// Every status message shown so far, oldest first.
    pub fn status_log(&self) -> &[String] {
        &self.status
    }

    pub fn last_status(&self) -> Option<&str> {
        self.status.last().map(String::as_str)
    }

    /// Lines passed to `reveal_line`, with their alignment.
    pub fn revealed(&self) -> &[(usize, ScrollAlign)] {
        &self.revealed
    }
}

impl EditorHost for MemoryEditor {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn visible_ranges(&self) -> Vec<LineRange> {
        self.visible.clone()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    fn set_selection(&mut self, selection: Selection) {
        debug!(anchor = %selection.anchor, active = %selection.active, "Selection set");
        self.selection = selection;
    }

    fn reveal_line(&mut self, line: usize, align: ScrollAlign) {
        self.revealed.push((line, align));
    }

    fn set_status(&mut self, message: &str, _timeout: Duration) {
        self.status.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_and_strips_carriage_returns() {
        let editor = MemoryEditor::new("one\r\ntwo\nthree");
        assert_eq!(editor.line_count(), 3);
        assert_eq!(editor.line_text(0), Some("one"));
        assert_eq!(editor.line_text(1), Some("two"));
        assert_eq!(editor.line_text(2), Some("three"));
        assert_eq!(editor.line_text(3), None);
    }

    #[test]
    fn whole_document_visible_by_default() {
        let editor = MemoryEditor::new("a\nb\nc\n");
        assert_eq!(editor.line_count(), 4);
        assert_eq!(editor.visible_ranges(), vec![LineRange::new(0, 3)]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let editor = MemoryEditor::new("");
        assert_eq!(editor.line_count(), 1);
        assert_eq!(editor.line_text(0), Some(""));
    }

    #[test]
    fn records_status_and_reveals() {
        let mut editor = MemoryEditor::new("x");
        editor.set_status("Type", Duration::from_secs(1));
        editor.set_status("Jumped!", Duration::from_secs(1));
        editor.reveal_line(0, ScrollAlign::Top);

        assert_eq!(editor.status_log(), &["Type".to_string(), "Jumped!".to_string()]);
        assert_eq!(editor.last_status(), Some("Jumped!"));
        assert_eq!(editor.revealed(), &[(0, ScrollAlign::Top)]);
    }
}
