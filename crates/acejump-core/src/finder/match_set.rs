use std::collections::BTreeMap;

use acejump_common::Position;

/// Candidate columns per line.
///
/// A slot holding `None` was disqualified by a restriction round and never
/// comes back. `count` tracks the live slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    pub count: usize,
    /// Restriction rounds already applied, i.e. how many characters of
    /// context after each match have been consumed.
    pub highlight_count: usize,
    pub indexes: BTreeMap<usize, Vec<Option<usize>>>,
}

impl MatchSet {
    /// Build a fresh set from plain columns per line.
    pub fn from_columns<I, C>(lines: I) -> Self
    where
        I: IntoIterator<Item = (usize, C)>,
        C: IntoIterator<Item = usize>,
    {
        let mut set = MatchSet::default();
        for (line, columns) in lines {
            let slots: Vec<Option<usize>> = columns.into_iter().map(Some).collect();
            set.count += slots.len();
            set.indexes.entry(line).or_default().extend(slots);
        }
        set
    }

    /// Live positions in traversal order: lines ascending, then slot order.
    pub fn live(&self) -> impl Iterator<Item = Position> + '_ {
        self.indexes.iter().flat_map(|(&line, slots)| {
            slots
                .iter()
                .flatten()
                .map(move |&character| Position::new(line, character))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
