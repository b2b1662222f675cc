use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Notifications from the host editor that can interrupt a pending jump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EditorEvent {
    /// The viewport scrolled, folded or was split.
    VisibleRangesChanged,
    /// Focus moved to another editor.
    ActiveEditorChanged,
    ConfigReloaded,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<EditorEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: EditorEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
