//! Label alphabet configuration.

use serde::{Deserialize, Serialize};

/// Default label alphabet, `a` through `z`.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Placeholder (label) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Ordered label characters. Case is normalized to lowercase.
    pub alphabet: String,
    /// Render labels in uppercase. Matching stays case-insensitive.
    pub upper_case: bool,
}

impl PlaceholderConfig {
    /// The alphabet as lowercase characters, in configured order.
    pub fn characters(&self) -> Vec<char> {
        self.alphabet
            .chars()
            .flat_map(char::to_lowercase)
            .collect()
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.into(),
            upper_case: false,
        }
    }
}
