use acejump_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

/// Quiet period after the last write before a change is reported.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches one config file and reports each burst of writes once.
#[derive(Debug, Clone)]
pub struct ConfigWatcher {
    path: PathBuf,
    debounce: Duration,
}

impl ConfigWatcher {
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

    /// Start watching on the current runtime.
    ///
    /// The file need not exist yet; its directory is watched so creation is
    /// seen too. The returned receiver yields `()` per coalesced change and
    /// the watch stops once it is dropped.
    pub fn spawn(self) -> Result<mpsc::Receiver<()>, ConfigError> {
        if !self.path.exists() {
            warn!(
                "{} does not exist yet, watching for creation",
                self.path.display()
            );
        }

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(OsStr::to_os_string)
            .ok_or_else(|| {
                ConfigError::WatchError(format!("{} has no file name", self.path.display()))
            })?;

        let (raw_tx, raw_rx) = mpsc::channel::<()>(16);
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) if touches(&event, &file_name) => {
                    // A full queue already holds a pending signal.
                    let _ = raw_tx.try_send(());
                }
                Ok(_) => {}
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display())))?;
        info!("watching {}", self.path.display());

        let (out_tx, out_rx) = mpsc::channel(1);
        let window = self.debounce;
        tokio::spawn(async move {
            // Dropping the watcher unregisters it.
            let _watcher = watcher;
            coalesce(raw_rx, out_tx, window).await;
        });
        Ok(out_rx)
    }
}

/// Whether `event` is a write to or creation of `file_name`.
pub(crate) fn touches(event: &Event, file_name: &OsStr) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

/// Forward one signal per burst on `raw`, once `window` passes without
/// another. Returns when either side closes.
pub(crate) async fn coalesce(
    mut raw: mpsc::Receiver<()>,
    out: mpsc::Sender<()>,
    window: Duration,
) {
    loop {
        tokio::select! {
            first = raw.recv() => {
                if first.is_none() {
                    return;
                }
            }
            () = out.closed() => {
                debug!("change listener dropped, stopping watcher");
                return;
            }
        }

        let quiet = tokio::time::sleep(window);
        tokio::pin!(quiet);
        loop {
            tokio::select! {
                () = &mut quiet => break,
                more = raw.recv() => match more {
                    Some(()) => quiet.as_mut().reset(Instant::now() + window),
                    None => return,
                },
            }
        }

        debug!("config file settled");
        if out.send(()).await.is_err() {
            return;
        }
    }
}
