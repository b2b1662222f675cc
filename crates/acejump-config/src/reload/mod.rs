//! Live config reload.
//!
//! [`ReloadManager`] pairs the file watcher with load + validate and
//! publishes each accepted config on a `watch` channel.

mod manager;

#[cfg(test)]
mod tests;

pub use manager::ReloadManager;
