//! Collaborators the jump controller drives: the editor, the decoration
//! layer and the keystroke source.

use std::time::Duration;

use acejump_common::{LineRange, ScrollAlign, Selection, TextRange};
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::placeholder::Placeholder;

/// Read/write access to the active editor.
pub trait EditorHost {
    fn selection(&self) -> Selection;

    /// Line spans currently on screen. More than one for folded or split views.
    fn visible_ranges(&self) -> Vec<LineRange>;

    fn line_count(&self) -> usize;

    fn line_text(&self, line: usize) -> Option<&str>;

    fn set_selection(&mut self, selection: Selection);

    fn reveal_line(&mut self, line: usize, align: ScrollAlign);

    /// Show a transient status message that expires after `timeout`.
    fn set_status(&mut self, message: &str, timeout: Duration);
}

/// Purely visual layer. Calls carry no control flow and must tolerate
/// empty input.
pub trait Decorator {
    fn show(&mut self, placeholders: &[Placeholder]);
    fn clear(&mut self);
    fn dim(&mut self, ranges: &[TextRange]);
    fn undim(&mut self);
    /// Emphasize the `count` characters of context consumed after each match.
    fn highlight(&mut self, placeholders: &[Placeholder], count: usize);
    fn clear_highlight(&mut self);
}

/// Decorator for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDecorator;

impl Decorator for NoopDecorator {
    fn show(&mut self, _placeholders: &[Placeholder]) {}
    fn clear(&mut self) {}
    fn dim(&mut self, _ranges: &[TextRange]) {}
    fn undim(&mut self) {}
    fn highlight(&mut self, _placeholders: &[Placeholder], _count: usize) {}
    fn clear_highlight(&mut self) {}
}

/// One logical key. Escape and backspace are control tokens, never literal
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Escape,
    Backspace,
}

impl Keystroke {
    /// Parse a keystroke script such as `ab<esc>c`.
    ///
    /// `<esc>` and `<bs>` name the control keys, `<lt>` a literal `<`.
    /// Unknown `<...>` sequences are taken literally.
    pub fn parse_script(script: &str) -> Vec<Keystroke> {
        let mut keys = Vec::new();
        let mut rest = script;

        while let Some(c) = rest.chars().next() {
            if c == '<' {
                if let Some(end) = rest.find('>') {
                    let token = match &rest[1..end] {
                        "esc" | "escape" => Some(Keystroke::Escape),
                        "bs" | "backspace" => Some(Keystroke::Backspace),
                        "lt" => Some(Keystroke::Char('<')),
                        _ => None,
                    };
                    if let Some(key) = token {
                        keys.push(key);
                        rest = &rest[end + 1..];
                        continue;
                    }
                }
            }
            keys.push(Keystroke::Char(c));
            rest = &rest[c.len_utf8()..];
        }

        keys
    }
}

/// Source of keystrokes.
///
/// `acquire` may be dropped before completion when the wait is interrupted,
/// so implementations must be cancel-safe: a dropped call loses no key.
#[async_trait]
pub trait KeystrokeSource: Send {
    /// Wait for the next key. `None` means no value was produced (the input
    /// was closed empty).
    async fn acquire(&mut self) -> Option<Keystroke>;
}

/// Keystrokes delivered over an unbounded channel.
pub struct ChannelKeystrokes {
    rx: mpsc::UnboundedReceiver<Keystroke>,
}

impl ChannelKeystrokes {
    /// A live source fed through the returned sender.
    pub fn new() -> (mpsc::UnboundedSender<Keystroke>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// A source that yields `keys` in order, then reports empty input.
    pub fn scripted(keys: impl IntoIterator<Item = Keystroke>) -> Self {
        let (tx, source) = Self::new();
        for key in keys {
            // The receiver is alive in `source`, so this cannot fail.
            let _ = tx.send(key);
        }
        source
    }
}

#[async_trait]
impl KeystrokeSource for ChannelKeystrokes {
    async fn acquire(&mut self) -> Option<Keystroke> {
        self.rx.recv().await
    }
}
