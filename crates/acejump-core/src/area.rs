//! Resolution of the lines eligible for a search.

use acejump_common::{CancelReason, LineRange};
use acejump_config::schema::FinderConfig;

use crate::host::EditorHost;

/// Disjoint, ascending, inclusive line segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchArea {
    segments: Vec<LineRange>,
}

impl SearchArea {
    /// Build an area from arbitrary ranges, sorting them and merging any that
    /// overlap or touch.
    pub fn new(ranges: impl IntoIterator<Item = LineRange>) -> Self {
        let mut ranges: Vec<LineRange> = ranges.into_iter().collect();
        ranges.sort_by_key(|r| (r.start, r.end));

        let mut segments: Vec<LineRange> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match segments.last_mut() {
                Some(last) if range.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(range.end);
                }
                _ => segments.push(range),
            }
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[LineRange] {
        &self.segments
    }

    /// Every line of the area, ascending.
    pub fn lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().flat_map(|s| s.start..=s.end)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Determine where to search.
///
/// A non-empty selection restricts the search to the lines it spans unless
/// `skip_selection` is set. Otherwise every visible range is searched.
pub fn find_area<E>(editor: &E, config: &FinderConfig) -> Result<SearchArea, CancelReason>
where
    E: EditorHost + ?Sized,
{
    let line_count = editor.line_count();
    if line_count == 0 {
        return Err(CancelReason::NoVisibleRange);
    }
    let last = line_count - 1;

    let selection = editor.selection();
    let ranges = if !selection.is_empty() && !config.skip_selection {
        vec![selection.line_span()]
    } else {
        editor.visible_ranges()
    };

    let area = SearchArea::new(
        ranges
            .into_iter()
            .filter(|r| r.start <= last)
            .map(|r| LineRange::new(r.start, r.end.min(last))),
    );

    if area.is_empty() {
        return Err(CancelReason::NoVisibleRange);
    }
    Ok(area)
}
