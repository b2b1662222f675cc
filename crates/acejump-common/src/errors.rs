use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Hard failures of the jump controller.
///
/// These signal API misuse rather than user input; everything the user can
/// cause is a [`CancelReason`](crate::CancelReason) instead.
#[derive(Debug, thiserror::Error)]
pub enum JumpError {
    #[error("a jump is already in progress")]
    JumpInProgress,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, thiserror::Error)]
pub enum AceJumpError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Jump(#[from] JumpError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
