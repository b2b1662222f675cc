//! One jump, run as a loop over [`Step`]s.

use std::sync::Mutex;
use std::time::Duration;

use acejump_common::{CancelReason, EditorEvent, Position, ScrollAlign, Selection};
use acejump_config::AceJumpConfig;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{lock, JumpCommand, JumpOutcome, JumpTarget, Phase};
use crate::area::find_area;
use crate::finder::{MatchFinder, MatchSet};
use crate::host::{Decorator, EditorHost, Keystroke, KeystrokeSource};
use crate::placeholder::{
    placeholder_holes, Placeholder, PlaceholderAllocator, PlaceholderId, PlaceholderTree,
};

/// What the candidates were searched for. Kept so a viewport change can
/// redo the search without asking again.
#[derive(Debug, Clone, Copy)]
enum Origin {
    Char(char),
    Lines,
}

enum Step {
    AwaitInitial,
    Search(Origin),
    Restrict {
        origin: Origin,
        set: MatchSet,
        tree: PlaceholderTree,
        rounds: u32,
    },
    Disambiguate {
        origin: Origin,
        tree: PlaceholderTree,
        scope: Vec<PlaceholderId>,
    },
    Retry(Origin),
    Resolve(Placeholder),
    Cancel(CancelReason),
}

enum Wake {
    Key(Option<Keystroke>),
    Interrupted(CancelReason),
}

pub(super) struct Session<'a, E: ?Sized, D: ?Sized, K: ?Sized> {
    pub(super) editor: &'a mut E,
    pub(super) decorator: &'a mut D,
    pub(super) keys: &'a mut K,
    pub(super) events: &'a mut broadcast::Receiver<EditorEvent>,
    pub(super) events_open: bool,
    pub(super) config: &'a AceJumpConfig,
    pub(super) finder: &'a MatchFinder,
    pub(super) allocator: &'a PlaceholderAllocator,
    pub(super) phase: &'a Mutex<Phase>,
    pub(super) token: CancellationToken,
    pub(super) command: JumpCommand,
}

impl<E, D, K> Session<'_, E, D, K>
where
    E: EditorHost + ?Sized,
    D: Decorator + ?Sized,
    K: KeystrokeSource + ?Sized,
{
    pub(super) async fn run(mut self) -> JumpOutcome {
        self.drain_stale_events();

        let mut step = if self.command.is_line() {
            Step::Search(Origin::Lines)
        } else {
            Step::AwaitInitial
        };

        loop {
            step = match step {
                Step::AwaitInitial => self.await_initial().await,
                Step::Search(origin) => self.search(origin),
                Step::Restrict {
                    origin,
                    set,
                    tree,
                    rounds,
                } => self.restrict(origin, set, tree, rounds).await,
                Step::Disambiguate {
                    origin,
                    tree,
                    scope,
                } => self.disambiguate(origin, tree, scope).await,
                Step::Retry(origin) => self.retry(origin).await,
                Step::Resolve(placeholder) => {
                    return JumpOutcome::Jumped(self.resolve(placeholder));
                }
                Step::Cancel(reason) => {
                    self.finish_canceled(reason);
                    return JumpOutcome::Canceled(reason);
                }
            };
        }
    }

    async fn await_initial(&mut self) -> Step {
        self.set_phase(Phase::AwaitingInitialChar);
        self.prompt("Type");

        match self.next_key(false).await {
            Wake::Key(Some(Keystroke::Char(ch))) => Step::Search(Origin::Char(ch)),
            Wake::Key(Some(_)) => Step::Cancel(CancelReason::Cancel),
            Wake::Key(None) => Step::Cancel(CancelReason::EmptyValue),
            Wake::Interrupted(reason) => Step::Cancel(reason),
        }
    }

    fn search(&mut self, origin: Origin) -> Step {
        let area = match find_area(&*self.editor, &self.config.finder) {
            Ok(area) => area,
            Err(reason) => return Step::Cancel(reason),
        };

        let set = match origin {
            Origin::Char(ch) => self.finder.find_by_char(&*self.editor, &area, ch),
            Origin::Lines => self.finder.find_by_lines(&*self.editor, &area),
        };
        if set.is_empty() {
            return Step::Cancel(CancelReason::NoMatches);
        }

        let tree = self.allocator.build_placeholders(&set);
        debug!(matches = set.count, placeholders = tree.len(), "Built placeholders");

        if tree.is_empty() {
            return Step::Cancel(CancelReason::NoMatches);
        }
        if tree.len() == 1 {
            return Step::Resolve(tree[tree.top_level()[0]].clone());
        }
        if self.command.is_multi_char() && matches!(origin, Origin::Char(_)) {
            return Step::Restrict {
                origin,
                set,
                tree,
                rounds: 0,
            };
        }

        let scope = tree.top_level().to_vec();
        Step::Disambiguate {
            origin,
            tree,
            scope,
        }
    }

    async fn restrict(
        &mut self,
        origin: Origin,
        set: MatchSet,
        tree: PlaceholderTree,
        rounds: u32,
    ) -> Step {
        if self
            .config
            .jumper
            .max_restrict_rounds
            .is_some_and(|max| rounds >= max)
        {
            debug!(rounds, "Restriction limit reached");
            let scope = tree.top_level().to_vec();
            return Step::Disambiguate {
                origin,
                tree,
                scope,
            };
        }

        self.set_phase(Phase::AwaitingRestrictionChar);
        let shown = tree.placeholders(tree.top_level());
        self.decorate(&shown, set.highlight_count);
        self.prompt("Next char");

        let wake = self.next_key(true).await;
        self.undecorate();

        let ch = match wake {
            Wake::Key(Some(Keystroke::Char(ch))) => ch,
            Wake::Key(Some(Keystroke::Escape | Keystroke::Backspace)) => {
                debug!("Restriction stopped, choosing among current labels");
                let scope = tree.top_level().to_vec();
                return Step::Disambiguate {
                    origin,
                    tree,
                    scope,
                };
            }
            Wake::Key(None) => return Step::Cancel(CancelReason::EmptyValue),
            Wake::Interrupted(reason) if reason.is_retryable() => return Step::Retry(origin),
            Wake::Interrupted(reason) => return Step::Cancel(reason),
        };

        let restricted = self.finder.restrict_by_char(&*self.editor, &set, ch);
        if restricted.is_empty() {
            if let Some(id) = tree.find_label(tree.top_level(), ch) {
                debug!(label = %ch, "No candidate left, taking label");
                return select(origin, tree, id);
            }
            debug!(char = %ch, "No candidate left, keeping previous round");
            return Step::Restrict {
                origin,
                set,
                tree,
                rounds,
            };
        }

        let next = self.allocator.build_placeholders(&restricted);
        if next.len() == 1 {
            return Step::Resolve(next[next.top_level()[0]].clone());
        }
        Step::Restrict {
            origin,
            set: restricted,
            tree: next,
            rounds: rounds + 1,
        }
    }

    async fn disambiguate(
        &mut self,
        origin: Origin,
        tree: PlaceholderTree,
        scope: Vec<PlaceholderId>,
    ) -> Step {
        self.set_phase(Phase::AwaitingDisambiguationChar);
        let shown = tree.placeholders(&scope);
        self.decorate(&shown, 0);
        self.prompt("Jump To");

        let wake = self.next_key(true).await;
        self.undecorate();

        match wake {
            Wake::Key(Some(Keystroke::Char(ch))) => match tree.find_label(&scope, ch) {
                Some(id) => select(origin, tree, id),
                None => Step::Cancel(CancelReason::NoPlaceholderMatched),
            },
            Wake::Key(Some(_)) => Step::Cancel(CancelReason::Cancel),
            Wake::Key(None) => Step::Cancel(CancelReason::EmptyValue),
            Wake::Interrupted(reason) if reason.is_retryable() => Step::Retry(origin),
            Wake::Interrupted(reason) => Step::Cancel(reason),
        }
    }

    /// Wait out a burst of viewport changes, then search again.
    async fn retry(&mut self, origin: Origin) -> Step {
        let window = Duration::from_millis(self.config.jumper.retry_debounce_ms);
        info!(?origin, "Visible ranges changed, recomputing");

        let sleep = tokio::time::sleep(window);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                biased;

                _ = self.token.cancelled() => return Step::Cancel(CancelReason::Cancel),

                event = self.events.recv(), if self.events_open => match event {
                    Ok(EditorEvent::VisibleRangesChanged) | Err(RecvError::Lagged(_)) => {
                        sleep.as_mut().reset(Instant::now() + window);
                    }
                    Ok(EditorEvent::ActiveEditorChanged) => {
                        return Step::Cancel(CancelReason::ChangedActiveEditor);
                    }
                    Ok(_) => {}
                    Err(RecvError::Closed) => self.events_open = false,
                },

                _ = &mut sleep => return Step::Search(origin),
            }
        }
    }

    fn resolve(&mut self, placeholder: Placeholder) -> JumpTarget {
        self.set_phase(Phase::Resolving);
        let target = placeholder.position();

        let selection = if self.command.extends_selection() {
            let anchor = self.editor.selection().active;
            let forward = target >= anchor;
            let offset = usize::from(
                forward
                    && self.config.finder.include_end_char_in_selection
                    && !self.command.is_line(),
            );
            Selection::new(anchor, Position::new(target.line, target.character + offset))
        } else {
            Selection::cursor(target)
        };

        self.editor.set_selection(selection);
        if self.config.scroll.mode != ScrollAlign::None {
            self.editor.reveal_line(target.line, self.config.scroll.mode);
        }
        let timeout = self.status_timeout();
        self.editor.set_status("Jumped!", timeout);

        info!(target = %target, label = %placeholder.label, "Jumped");
        JumpTarget {
            position: target,
            label: placeholder.label,
            selection,
        }
    }

    fn finish_canceled(&mut self, reason: CancelReason) {
        self.undecorate();
        let timeout = self.status_timeout();
        self.editor.set_status(reason.message(), timeout);
        info!(?reason, "Jump canceled");
    }

    /// Next keystroke, unless something interrupts the wait first.
    ///
    /// An editor switch always interrupts. A viewport change only does when
    /// `viewport_sensitive` is set, i.e. once candidates are on screen.
    async fn next_key(&mut self, viewport_sensitive: bool) -> Wake {
        loop {
            tokio::select! {
                biased;

                _ = self.token.cancelled() => return Wake::Interrupted(CancelReason::Cancel),

                event = self.events.recv(), if self.events_open => match event {
                    Ok(EditorEvent::ActiveEditorChanged) => {
                        return Wake::Interrupted(CancelReason::ChangedActiveEditor);
                    }
                    Ok(EditorEvent::VisibleRangesChanged) | Err(RecvError::Lagged(_))
                        if viewport_sensitive =>
                    {
                        return Wake::Interrupted(CancelReason::ChangedVisibleRanges);
                    }
                    Ok(_) | Err(RecvError::Lagged(_)) => {}
                    Err(RecvError::Closed) => {
                        warn!("Editor event channel closed");
                        self.events_open = false;
                    }
                },

                key = self.keys.acquire() => return Wake::Key(key),
            }
        }
    }

    fn drain_stale_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(_) | Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Closed) => {
                    self.events_open = false;
                    break;
                }
            }
        }
    }

    fn decorate(&mut self, shown: &[Placeholder], highlight_count: usize) {
        if self.config.dim.enabled {
            let holes = placeholder_holes(shown, self.editor.line_count(), highlight_count);
            self.decorator.dim(&holes);
        }
        self.decorator.show(shown);
        if highlight_count > 0 {
            self.decorator.highlight(shown, highlight_count);
        }
    }

    fn undecorate(&mut self) {
        self.decorator.clear();
        self.decorator.clear_highlight();
        self.decorator.undim();
    }

    fn prompt(&mut self, message: &str) {
        let timeout = Duration::from_millis(self.config.jumper.prompt_timeout_ms);
        self.editor.set_status(message, timeout);
    }

    fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.config.jumper.status_timeout_ms)
    }

    fn set_phase(&self, phase: Phase) {
        *lock(self.phase) = phase;
        debug!(?phase, "Phase");
    }
}

/// Follow `id` to its group's canonical node and either resolve it or ask
/// again among its children.
fn select(origin: Origin, tree: PlaceholderTree, id: PlaceholderId) -> Step {
    let canonical = tree.canonical(id);
    let node = &tree[canonical];

    if node.children.len() > 1 {
        let scope = node.children.clone();
        Step::Disambiguate {
            origin,
            tree,
            scope,
        }
    } else {
        Step::Resolve(node.clone())
    }
}
