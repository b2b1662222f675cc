//! Finder pattern validation.

use regex::Regex;

use crate::schema::AceJumpConfig;

pub(crate) fn validate_pattern(errors: &mut Vec<String>, config: &AceJumpConfig) {
    if config.finder.pattern.is_empty() {
        errors.push("finder.pattern must not be empty".into());
        return;
    }

    match Regex::new(&config.finder.pattern) {
        Ok(re) if re.is_match("") => {
            errors.push("finder.pattern must not match the empty string".into());
        }
        Ok(_) => {}
        Err(e) => errors.push(format!("finder.pattern is not a valid regex: {e}")),
    }
}
