//! Layout module for tracking UI component regions
//!
//! Rendering records where each component landed in `LayoutRegions`, and
//! `region_at()` maps a mouse position back to the component under it.
//! This is what lets a click be classified as inside or outside the search
//! widget.

use ratatui::layout::{Position, Rect};

/// A clickable area of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchInput,
    ClearControl,
    SearchStatus,
    /// Suggestion popup border or padding
    SuggestionList,
    /// A suggestion row, by index into the full suggestion sequence
    Suggestion(usize),
    Results,
}

impl Region {
    /// Whether the region belongs to the search widget's bounding area
    pub fn is_search_widget(self) -> bool {
        !matches!(self, Region::Results)
    }
}

/// Screen areas from the most recent render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub search_input: Option<Rect>,
    pub clear_control: Option<Rect>,
    pub search_status: Option<Rect>,
    pub suggestion_popup: Option<Rect>,
    /// Inner area holding the visible suggestion rows
    pub suggestion_rows: Option<Rect>,
    /// Index of the suggestion drawn on the first visible row
    pub suggestion_offset: usize,
    pub suggestion_count: usize,
    pub results: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Find the topmost region at a screen position
///
/// The suggestion popup is drawn over the results, so it is checked first.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);
    let hit = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(position));

    if hit(regions.suggestion_rows) {
        if let Some(rows) = regions.suggestion_rows {
            let visible_index = (row - rows.y) as usize;
            if visible_index < regions.suggestion_count {
                return Some(Region::Suggestion(regions.suggestion_offset + visible_index));
            }
        }
        return Some(Region::SuggestionList);
    }
    if hit(regions.suggestion_popup) {
        return Some(Region::SuggestionList);
    }
    if hit(regions.clear_control) {
        return Some(Region::ClearControl);
    }
    if hit(regions.search_input) {
        return Some(Region::SearchInput);
    }
    if hit(regions.search_status) {
        return Some(Region::SearchStatus);
    }
    if hit(regions.results) {
        return Some(Region::Results);
    }
    None
}
