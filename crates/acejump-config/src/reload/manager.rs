use crate::schema::AceJumpConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::{ConfigWatcher, DEFAULT_DEBOUNCE};
use acejump_common::ConfigError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{error, info, warn};

/// Publishes a fresh [`AceJumpConfig`] on a `watch` channel each time the
/// file settles after an edit.
///
/// Only configs that parse and validate are published, so a half-written
/// file never replaces a working one. Consumers such as
/// `Jumper::follow` pick up the latest value between jumps.
#[derive(Debug, Clone)]
pub struct ReloadManager {
    path: PathBuf,
    debounce: Duration,
}

impl ReloadManager {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the file now.
    pub fn reload(&self) -> Result<AceJumpConfig, ConfigError> {
        let config = toml_loader::load_from_path(&self.path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load the initial config and keep it current in the background.
    ///
    /// A missing or invalid file yields defaults for the initial value.
    /// If the watcher cannot be set up the receiver still works but never
    /// changes.
    pub fn spawn(self) -> (AceJumpConfig, watch::Receiver<AceJumpConfig>) {
        let initial = self.reload().unwrap_or_else(|e| {
            warn!("failed to load {}: {e}, using defaults", self.path.display());
            AceJumpConfig::default()
        });
        let (tx, rx) = watch::channel(initial.clone());

        let watcher = ConfigWatcher::new(self.path.clone()).with_debounce(self.debounce);
        match watcher.spawn() {
            Ok(changes) => {
                tokio::spawn(async move { self.publish(changes, tx).await });
            }
            Err(e) => error!("live reload disabled: {e}"),
        }
        (initial, rx)
    }

    /// Shorthand for `ReloadManager::new(path).spawn()`.
    pub async fn start(path: PathBuf) -> (AceJumpConfig, watch::Receiver<AceJumpConfig>) {
        Self::new(path).spawn()
    }

    async fn publish(self, mut changes: mpsc::Receiver<()>, tx: watch::Sender<AceJumpConfig>) {
        while changes.recv().await.is_some() {
            match self.reload() {
                Ok(config) => {
                    info!("reloaded config from {}", self.path.display());
                    if tx.send(config).is_err() {
                        info!("no config subscribers left, stopping reload");
                        return;
                    }
                }
                Err(e) => warn!("keeping previous config: {e}"),
            }
        }
    }
}
