//! The narrowing controller.
//!
//! [`Jumper`] runs one jump at a time: it asks for a character, labels the
//! matches and keeps asking until a single position remains or the jump is
//! canceled. Clones share state, so a second concurrent jump is rejected
//! with [`JumpError::JumpInProgress`].

mod command;
mod session;


pub use command::JumpCommand;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use acejump_common::{CancelReason, EditorEvent, JumpError, JumpId, Position, Selection};
use acejump_config::AceJumpConfig;
use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::finder::MatchFinder;
use crate::host::{Decorator, EditorHost, KeystrokeSource};
use crate::placeholder::PlaceholderAllocator;
use session::Session;

/// Where a jump currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    #[default]
    Idle,
    AwaitingInitialChar,
    AwaitingRestrictionChar,
    AwaitingDisambiguationChar,
    Resolving,
}

/// Where the cursor went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JumpTarget {
    pub position: Position,
    /// Label of the placeholder that was resolved.
    pub label: String,
    /// Selection applied to the editor.
    pub selection: Selection,
}

/// How a jump ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "kebab-case")]
pub enum JumpOutcome {
    Jumped(JumpTarget),
    Canceled(CancelReason),
}

impl JumpOutcome {
    pub fn target(&self) -> Option<&JumpTarget> {
        match self {
            JumpOutcome::Jumped(target) => Some(target),
            JumpOutcome::Canceled(_) => None,
        }
    }

    pub fn cancel_reason(&self) -> Option<CancelReason> {
        match self {
            JumpOutcome::Jumped(_) => None,
            JumpOutcome::Canceled(reason) => Some(*reason),
        }
    }
}

/// Collaborators borrowed for the duration of one jump.
pub struct JumpContext<'a, E: ?Sized, D: ?Sized, K: ?Sized> {
    /// The active editor, if any.
    pub editor: Option<&'a mut E>,
    pub decorator: &'a mut D,
    pub keys: &'a mut K,
    /// Editor notifications. Events queued before the jump starts are
    /// discarded.
    pub events: &'a mut broadcast::Receiver<EditorEvent>,
}

struct Shared {
    phase: Mutex<Phase>,
    config: RwLock<Arc<AceJumpConfig>>,
    cancel: Mutex<Option<CancellationToken>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Jump controller. Cheap to clone; clones share phase and config.
#[derive(Clone)]
pub struct Jumper {
    shared: Arc<Shared>,
}

impl Jumper {
    pub fn new(config: AceJumpConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                phase: Mutex::new(Phase::Idle),
                config: RwLock::new(Arc::new(config)),
                cancel: Mutex::new(None),
            }),
        }
    }

    /// Replace the config used by subsequent jumps. A jump in flight keeps
    /// its snapshot.
    pub fn refresh_config(&self, config: AceJumpConfig) {
        let mut slot = self
            .shared
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Arc::new(config);
        info!("Jumper config refreshed");
    }

    /// Current config snapshot.
    pub fn config(&self) -> Arc<AceJumpConfig> {
        self.shared
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply every config published on `rx` until the sender goes away.
    pub fn follow(&self, mut rx: watch::Receiver<AceJumpConfig>) -> JoinHandle<()> {
        let jumper = self.clone();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let config = rx.borrow_and_update().clone();
                jumper.refresh_config(config);
            }
            debug!("Config channel closed, no longer following");
        })
    }

    pub fn phase(&self) -> Phase {
        *lock(&self.shared.phase)
    }

    pub fn is_jumping(&self) -> bool {
        self.phase() != Phase::Idle
    }

    /// Abort the jump in flight, if any. It ends with [`CancelReason::Cancel`].
    pub fn cancel(&self) {
        if let Some(token) = lock(&self.shared.cancel).as_ref() {
            info!("Canceling jump");
            token.cancel();
        }
    }

    /// Run one jump to completion.
    ///
    /// User-driven endings, including a missing editor, are reported as
    /// [`JumpOutcome::Canceled`]. Errors are reserved for a jump already in
    /// progress and for a config that cannot drive a search.
    pub async fn jump<E, D, K>(
        &self,
        ctx: JumpContext<'_, E, D, K>,
        command: JumpCommand,
    ) -> Result<JumpOutcome, JumpError>
    where
        E: EditorHost + ?Sized,
        D: Decorator + ?Sized,
        K: KeystrokeSource + ?Sized,
    {
        let id = JumpId::new();
        let span = info_span!("jump", id = %id, command = %command);
        self.run(ctx, command).instrument(span).await
    }

    async fn run<E, D, K>(
        &self,
        ctx: JumpContext<'_, E, D, K>,
        command: JumpCommand,
    ) -> Result<JumpOutcome, JumpError>
    where
        E: EditorHost + ?Sized,
        D: Decorator + ?Sized,
        K: KeystrokeSource + ?Sized,
    {
        let token = CancellationToken::new();
        let _guard = PhaseGuard::acquire(&self.shared, token.clone())?;

        let config = self.config();
        acejump_config::validation::validate(&config)?;
        let finder = MatchFinder::new(&config.finder)?;
        let allocator = PlaceholderAllocator::from_config(&config.placeholder)?;

        let Some(editor) = ctx.editor else {
            warn!("No active editor");
            return Ok(JumpOutcome::Canceled(CancelReason::NoActiveEditor));
        };

        let session = Session {
            editor,
            decorator: ctx.decorator,
            keys: ctx.keys,
            events: ctx.events,
            events_open: true,
            config: &config,
            finder: &finder,
            allocator: &allocator,
            phase: &self.shared.phase,
            token,
            command,
        };
        Ok(session.run().await)
    }
}

impl Default for Jumper {
    fn default() -> Self {
        Self::new(AceJumpConfig::default())
    }
}

/// Marks the controller busy and returns it to idle when dropped, even if
/// the jump future is dropped mid-wait.
struct PhaseGuard<'a> {
    shared: &'a Shared,
}

impl<'a> PhaseGuard<'a> {
    fn acquire(shared: &'a Shared, token: CancellationToken) -> Result<Self, JumpError> {
        let mut phase = lock(&shared.phase);
        if *phase != Phase::Idle {
            warn!(phase = ?*phase, "Jump requested while another is running");
            return Err(JumpError::JumpInProgress);
        }
        *phase = Phase::AwaitingInitialChar;
        *lock(&shared.cancel) = Some(token);
        Ok(Self { shared })
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        *lock(&self.shared.cancel) = None;
        *lock(&self.shared.phase) = Phase::Idle;
    }
}
