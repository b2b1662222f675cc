pub mod cancel;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use cancel::CancelReason;
pub use errors::{AceJumpError, ConfigError, JumpError};
pub use events::{EditorEvent, EventBus};
pub use id::JumpId;
pub use types::{LineRange, Position, ScrollAlign, Selection, TextRange};

pub type Result<T> = std::result::Result<T, AceJumpError>;
