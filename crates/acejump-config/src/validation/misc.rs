//! Validation for the jumper knobs.

use crate::schema::AceJumpConfig;

use super::helpers::validate_range;

pub(crate) fn validate_jumper(errors: &mut Vec<String>, config: &AceJumpConfig) {
    if let Some(rounds) = config.jumper.max_restrict_rounds {
        validate_range(errors, "jumper.max_restrict_rounds", rounds.into(), 1, 64);
    }
    validate_range(
        errors,
        "jumper.retry_debounce_ms",
        config.jumper.retry_debounce_ms,
        0,
        5000,
    );
    validate_range(
        errors,
        "jumper.status_timeout_ms",
        config.jumper.status_timeout_ms,
        0,
        60_000,
    );
    validate_range(
        errors,
        "jumper.prompt_timeout_ms",
        config.jumper.prompt_timeout_ms,
        0,
        60_000,
    );
}
