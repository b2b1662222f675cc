//! Match finder policy.

use serde::{Deserialize, Serialize};

/// Characters that split a line into tokens for initial-letter matching:
/// space, `,` through `.`, `{`, `_`, `(`, quotes, `<` and `[`.
pub const DEFAULT_BOUNDARY_PATTERN: &str = r#"[ ,-.{_("'<\[\t]"#;

/// Finder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Regex matching a single token boundary.
    pub pattern: String,
    /// Only match the first character of each token.
    pub only_initial_letter: bool,
    /// Search the viewport even when a selection exists.
    pub skip_selection: bool,
    /// When extending a selection forward, include the target character.
    pub include_end_char_in_selection: bool,
    /// Line jumps also offer the end of every line.
    pub jump_to_line_endings: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_BOUNDARY_PATTERN.into(),
            only_initial_letter: true,
            skip_selection: false,
            include_end_char_in_selection: true,
            jump_to_line_endings: false,
        }
    }
}
