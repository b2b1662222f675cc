use std::fmt;
use std::ops::Index;

use acejump_common::Position;

/// Slot of a [`Placeholder`] in its [`PlaceholderTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceholderId(pub(crate) usize);

impl PlaceholderId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlaceholderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labeled jump target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub id: PlaceholderId,
    /// Position of `label` in the alphabet.
    pub index: usize,
    /// Lowercase label text.
    pub label: String,
    pub line: usize,
    pub character: usize,
    /// Canonical member of this node's overflow group, if it is not the
    /// canonical member itself.
    pub root: Option<PlaceholderId>,
    /// Re-labeled group members, canonical node only.
    pub children: Vec<PlaceholderId>,
}

impl Placeholder {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.character)
    }

    /// Label as shown to the user.
    pub fn display_label(&self, upper_case: bool) -> String {
        if upper_case {
            self.label.to_uppercase()
        } else {
            self.label.clone()
        }
    }

    /// Whether typing `ch` selects this placeholder.
    pub fn matches_key(&self, ch: char) -> bool {
        self.label.chars().eq(ch.to_lowercase())
    }
}

/// Arena of placeholders built for one narrowing round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderTree {
    pub(crate) nodes: Vec<Placeholder>,
    pub(crate) top: Vec<PlaceholderId>,
}

impl PlaceholderTree {
    pub fn get(&self, id: PlaceholderId) -> Option<&Placeholder> {
        self.nodes.get(id.0)
    }

    /// Flat list shown at the first level, in traversal order.
    pub fn top_level(&self) -> &[PlaceholderId] {
        &self.top
    }

    /// Number of top-level placeholders.
    pub fn len(&self) -> usize {
        self.top.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Clone the placeholders behind `ids`, e.g. to hand them to a decorator.
    pub fn placeholders(&self, ids: &[PlaceholderId]) -> Vec<Placeholder> {
        ids.iter().filter_map(|&id| self.get(id)).cloned().collect()
    }

    /// First placeholder in `scope` whose label matches `ch`.
    pub fn find_label(&self, scope: &[PlaceholderId], ch: char) -> Option<PlaceholderId> {
        scope
            .iter()
            .copied()
            .find(|&id| self.get(id).is_some_and(|p| p.matches_key(ch)))
    }

    /// The group's canonical node for `id`.
    pub fn canonical(&self, id: PlaceholderId) -> PlaceholderId {
        self.get(id).and_then(|p| p.root).unwrap_or(id)
    }
}

impl Index<PlaceholderId> for PlaceholderTree {
    type Output = Placeholder;

    fn index(&self, id: PlaceholderId) -> &Placeholder {
        &self.nodes[id.0]
    }
}
