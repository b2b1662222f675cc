//! Label alphabet validation.

use std::collections::HashSet;

use crate::schema::AceJumpConfig;

/// The alphabet needs two distinct, visible characters; with one label
/// overflow groups could never be told apart.
pub(crate) fn validate_alphabet(errors: &mut Vec<String>, config: &AceJumpConfig) {
    let chars = config.placeholder.characters();

    if chars.len() < 2 {
        errors.push(format!(
            "placeholder.alphabet must contain at least 2 characters, got {}",
            chars.len()
        ));
    }

    if chars.iter().any(|c| c.is_whitespace() || c.is_control()) {
        errors.push("placeholder.alphabet must not contain whitespace or control characters".into());
    }

    let mut seen = HashSet::new();
    let duplicates: Vec<String> = chars
        .iter()
        .filter(|c| !seen.insert(**c))
        .map(|c| c.to_string())
        .collect();
    if !duplicates.is_empty() {
        errors.push(format!(
            "placeholder.alphabet has duplicate characters: {}",
            duplicates.join(", ")
        ));
    }
}
