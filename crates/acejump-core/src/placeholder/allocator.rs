use acejump_common::{ConfigError, Position};
use acejump_config::schema::PlaceholderConfig;
use tracing::debug;

use super::{Placeholder, PlaceholderId, PlaceholderTree};
use crate::finder::MatchSet;

/// Assigns alphabet labels to matches.
#[derive(Debug, Clone)]
pub struct PlaceholderAllocator {
    alphabet: Vec<char>,
}

impl PlaceholderAllocator {
    /// Characters are lowercased. Sibling labels must be distinct, so the
    /// lowercased alphabet needs at least two characters and no repeats.
    pub fn new(alphabet: Vec<char>) -> Result<Self, ConfigError> {
        if alphabet.is_empty() {
            return Err(ConfigError::ValidationError(
                "placeholder.alphabet is empty".into(),
            ));
        }
        let alphabet: Vec<char> = alphabet.into_iter().flat_map(char::to_lowercase).collect();
        if alphabet.len() < 2 {
            return Err(ConfigError::ValidationError(format!(
                "placeholder.alphabet needs at least 2 characters, got {}",
                alphabet.len()
            )));
        }
        if let Some(repeat) = alphabet
            .iter()
            .enumerate()
            .find_map(|(i, c)| alphabet[..i].contains(c).then_some(*c))
        {
            return Err(ConfigError::ValidationError(format!(
                "placeholder.alphabet repeats '{repeat}'"
            )));
        }
        Ok(Self { alphabet })
    }

    pub fn from_config(config: &PlaceholderConfig) -> Result<Self, ConfigError> {
        Self::new(config.characters())
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Most placeholders a single tree can hold.
    pub fn capacity(&self) -> usize {
        self.alphabet.len().saturating_mul(self.alphabet.len())
    }

    /// Label the live matches of `set` in traversal order.
    ///
    /// Up to N matches (N being the alphabet size) get one label each. Past
    /// that, consecutive matches share a label in groups of at most N,
    /// filling the leading labels first. Matches past N² are dropped.
    pub fn build_placeholders(&self, set: &MatchSet) -> PlaceholderTree {
        let positions: Vec<Position> = set.live().take(self.capacity()).collect();
        if set.count > positions.len() {
            debug!(
                dropped = set.count - positions.len(),
                "More matches than labels"
            );
        }

        let sizes = self.group_sizes(positions.len());
        let mut tree = PlaceholderTree::default();
        let mut groups: Vec<Vec<PlaceholderId>> = Vec::with_capacity(sizes.len());
        let mut remaining = positions.into_iter();

        for (index, size) in sizes.into_iter().enumerate() {
            let members: Vec<PlaceholderId> = remaining
                .by_ref()
                .take(size)
                .map(|pos| {
                    let id = self.push(&mut tree, index, pos);
                    tree.top.push(id);
                    id
                })
                .collect();
            groups.push(members);
        }

        for members in groups.iter().filter(|m| m.len() > 1) {
            let canonical = members[0];
            let mut children = Vec::with_capacity(members.len());

            for (index, &member) in members.iter().enumerate() {
                if member != canonical {
                    tree.nodes[member.0].root = Some(canonical);
                }
                let pos = tree.nodes[member.0].position();
                children.push(self.push(&mut tree, index, pos));
            }
            tree.nodes[canonical.0].children = children;
        }

        tree
    }

    /// Members per label for `count` matches.
    fn group_sizes(&self, count: usize) -> Vec<usize> {
        let n = self.alphabet.len();
        if count <= n {
            return vec![1; count];
        }

        let overflow = count - n;
        (0..n)
            .map(|g| 1 + (n - 1).min(overflow.saturating_sub(g * (n - 1))))
            .collect()
    }

    fn push(&self, tree: &mut PlaceholderTree, index: usize, pos: Position) -> PlaceholderId {
        let id = PlaceholderId(tree.nodes.len());
        tree.nodes.push(Placeholder {
            id,
            index,
            label: self.alphabet[index].to_string(),
            line: pos.line,
            character: pos.character,
            root: None,
            children: Vec::new(),
        });
        id
    }
}
