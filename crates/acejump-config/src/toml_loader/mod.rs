//! Reading config files and the first-run template.

mod loader;
mod paths;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{load_default, load_from_path, parse};
pub use paths::{default_config_path, write_default_config};
