//! Configuration schema types for AceJump.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the jump commands ship with.

mod finder;
mod jumper;
mod logging;
mod placeholder;

pub use finder::*;
pub use jumper::*;
pub use logging::*;
pub use placeholder::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for AceJump.
///
/// The controller takes one immutable snapshot of this per jump.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AceJumpConfig {
    pub placeholder: PlaceholderConfig,
    pub finder: FinderConfig,
    pub dim: DimConfig,
    pub scroll: ScrollConfig,
    pub jumper: JumperConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
