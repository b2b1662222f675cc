//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod finder;
mod helpers;
mod misc;
mod placeholder;


use crate::schema::AceJumpConfig;
use acejump_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AceJumpConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    placeholder::validate_alphabet(&mut errors, config);
    finder::validate_pattern(&mut errors, config);
    misc::validate_jumper(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
