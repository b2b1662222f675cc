use crate::schema::AceJumpConfig;
use acejump_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use super::paths::{default_config_path, write_default_config};

/// Parse TOML text. Missing keys take their defaults; values are not
/// validated here.
pub fn parse(content: &str) -> Result<AceJumpConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("invalid TOML: {e}")))
}

/// Read and parse the file at `path`.
pub fn load_from_path(path: &Path) -> Result<AceJumpConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config = parse(&content)?;
    debug!("parsed {}", path.display());
    Ok(config)
}

/// Load from the platform config directory, e.g.
/// `~/.config/acejump/config.toml` on Linux. A commented template is
/// written there on first use.
pub fn load_default() -> Result<AceJumpConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config at {}, writing template", path.display());
            write_default_config(&path)?;
            Ok(AceJumpConfig::default())
        }
        other => other,
    }
}
