//! Configuration for the jump engine.
//!
//! Every section has defaults, so a file only needs the keys it changes.
//! Files are TOML; [`load_config`] and [`load_config_from`] parse and
//! validate, and [`ReloadManager`] keeps a config current while the file
//! is edited.
//!
//! ```rust,no_run
//! let config = acejump_config::load_config()?;
//! println!("{}", acejump_config::config_to_json(&config));
//! # Ok::<(), acejump_common::ConfigError>(())
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{AceJumpConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use acejump_common::ConfigError;
use std::path::Path;

/// Load and validate the platform default file, writing the template
/// there first if it is missing.
pub fn load_config() -> Result<AceJumpConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AceJumpConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &AceJumpConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
