//! Jump-to-visible-occurrence engine.
//!
//! Given one typed character, [`MatchFinder`] locates its occurrences in the
//! [`SearchArea`] of an editor, [`PlaceholderAllocator`] labels them from a
//! small alphabet, and [`Jumper`] runs the keystroke protocol that narrows
//! the candidates down to a single position.

pub mod area;
pub mod controller;
pub mod finder;
pub mod host;
pub mod memory;
pub mod placeholder;

pub use area::{find_area, SearchArea};
pub use controller::{JumpCommand, JumpContext, JumpOutcome, JumpTarget, Jumper, Phase};
pub use finder::{MatchFinder, MatchSet};
pub use host::{ChannelKeystrokes, Decorator, EditorHost, KeystrokeSource, Keystroke, NoopDecorator};
pub use memory::MemoryEditor;
pub use placeholder::{
    placeholder_holes, Placeholder, PlaceholderAllocator, PlaceholderId, PlaceholderTree,
};
