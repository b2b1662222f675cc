//! Labeling of match sets.
//!
//! [`PlaceholderAllocator`] turns a [`MatchSet`](crate::finder::MatchSet)
//! into a [`PlaceholderTree`]: an arena of labeled positions where overflow
//! groups hang their members off a canonical node as re-labeled children.

mod allocator;
mod holes;
mod types;


pub use allocator::PlaceholderAllocator;
pub use holes::placeholder_holes;
pub use types::{Placeholder, PlaceholderId, PlaceholderTree};
