//! Occurrence search inside a [`SearchArea`].

mod match_set;


pub use match_set::MatchSet;

use acejump_common::ConfigError;
use acejump_config::schema::FinderConfig;
use regex::Regex;
use tracing::debug;

use crate::area::SearchArea;
use crate::host::EditorHost;

/// Compiled finder policy.
///
/// Construction compiles the boundary pattern, so a finder only exists for a
/// valid configuration.
#[derive(Debug, Clone)]
pub struct MatchFinder {
    boundary: Regex,
    only_initial_letter: bool,
    jump_to_line_endings: bool,
}

impl MatchFinder {
    pub fn new(config: &FinderConfig) -> Result<Self, ConfigError> {
        let boundary = Regex::new(&config.pattern).map_err(|e| {
            ConfigError::ParseError(format!("invalid finder pattern '{}': {e}", config.pattern))
        })?;
        // Every column would count as a token start.
        if boundary.is_match("") {
            return Err(ConfigError::ValidationError(format!(
                "finder pattern '{}' matches the empty string",
                config.pattern
            )));
        }

        Ok(Self {
            boundary,
            only_initial_letter: config.only_initial_letter,
            jump_to_line_endings: config.jump_to_line_endings,
        })
    }

    /// Whether `ch` separates tokens.
    pub fn is_boundary(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.boundary.is_match(ch.encode_utf8(&mut buf))
    }

    /// Every occurrence of `ch` in the area, case-insensitively.
    ///
    /// In initial-letter mode only the first character of each token is
    /// considered, unless `ch` is itself a boundary character.
    pub fn find_by_char<E>(&self, editor: &E, area: &SearchArea, ch: char) -> MatchSet
    where
        E: EditorHost + ?Sized,
    {
        let needle = fold(ch);
        let initial_only = self.only_initial_letter && !self.is_boundary(ch);
        let mut set = MatchSet::default();

        for line in area.lines() {
            let text = editor.line_text(line).unwrap_or_default();
            let columns = if initial_only {
                self.initial_matches(text, needle)
            } else {
                literal_matches(text, needle)
            };

            set.count += columns.len();
            set.indexes
                .insert(line, columns.into_iter().map(Some).collect());
        }

        debug!(char = %ch, initial_only, count = set.count, "Searched area");
        set
    }

    /// One candidate per line at column 0, plus the end of every non-empty
    /// line when line endings are enabled.
    pub fn find_by_lines<E>(&self, editor: &E, area: &SearchArea) -> MatchSet
    where
        E: EditorHost + ?Sized,
    {
        let mut set = MatchSet::default();

        for line in area.lines() {
            let mut slots = vec![Some(0)];
            if self.jump_to_line_endings {
                let len = editor.line_text(line).map_or(0, |t| t.chars().count());
                if len > 0 {
                    slots.push(Some(len));
                }
            }
            set.count += slots.len();
            set.indexes.insert(line, slots);
        }

        debug!(count = set.count, "Collected line anchors");
        set
    }

    /// Narrow `prev` by one more character of context.
    ///
    /// For every live column `c`, the character at `c + 1 + highlight_count`
    /// must equal `ch` (case-insensitively) or the slot is disqualified.
    pub fn restrict_by_char<E>(&self, editor: &E, prev: &MatchSet, ch: char) -> MatchSet
    where
        E: EditorHost + ?Sized,
    {
        let needle = fold(ch);
        let offset = 1 + prev.highlight_count;
        let mut set = MatchSet {
            count: 0,
            highlight_count: prev.highlight_count + 1,
            indexes: Default::default(),
        };

        for (&line, slots) in &prev.indexes {
            let chars: Vec<char> = editor
                .line_text(line)
                .unwrap_or_default()
                .chars()
                .collect();

            let restricted: Vec<Option<usize>> = slots
                .iter()
                .map(|&slot| {
                    slot.filter(|&c| {
                        chars
                            .get(c + offset)
                            .is_some_and(|&next| fold(next) == needle)
                    })
                })
                .collect();

            set.count += restricted.iter().flatten().count();
            set.indexes.insert(line, restricted);
        }

        debug!(
            char = %ch,
            before = prev.count,
            after = set.count,
            highlight_count = set.highlight_count,
            "Restricted matches"
        );
        set
    }

    /// Token start columns whose first character folds to `needle`.
    fn initial_matches(&self, text: &str, needle: char) -> Vec<usize> {
        let chars: Vec<char> = text.chars().collect();
        let mut starts = vec![0];
        let mut column = 0;
        let mut consumed = 0;

        for m in self.boundary.find_iter(text) {
            column += text[consumed..m.end()].chars().count();
            consumed = m.end();
            if starts.last() != Some(&column) {
                starts.push(column);
            }
        }

        starts
            .into_iter()
            .filter(|&start| chars.get(start).is_some_and(|&c| fold(c) == needle))
            .collect()
    }
}

fn literal_matches(text: &str, needle: char) -> Vec<usize> {
    text.chars()
        .enumerate()
        .filter(|&(_, c)| fold(c) == needle)
        .map(|(i, _)| i)
        .collect()
}

fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}
