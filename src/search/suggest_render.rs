//! Suggestion popup rendering
//!
//! A pure projection of the suggestion sequence and focus index. Click and
//! hover handling lives in the app, which hit-tests against the areas
//! returned here.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::api::Suggestion;
use crate::widgets::popup;
use crate::widgets::text::truncate_to_width;

pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_OFFSET_X: u16 = 1;
const FOCUS_MARKER: &str = "► ";
const ROW_MARKER: &str = "  ";

/// Areas of the drawn popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionListAreas {
    pub popup: Rect,
    /// Inner area, one suggestion per row
    pub rows: Rect,
    /// Index of the suggestion on the first row
    pub offset: usize,
    /// Number of rows drawn
    pub visible: usize,
}

/// First index to draw so that the focused row stays on screen
pub fn scroll_offset(focused: Option<usize>, len: usize, visible: usize) -> usize {
    match focused {
        Some(index) if visible > 0 && index >= visible => {
            (index + 1 - visible).min(len.saturating_sub(visible))
        }
        _ => 0,
    }
}

/// Render the popup directly below `anchor`
///
/// Returns `None` when there is nothing to show or no room to show it.
pub fn render_suggestions(
    suggestions: &[Suggestion],
    focused: Option<usize>,
    frame: &mut Frame,
    anchor: Rect,
) -> Option<SuggestionListAreas> {
    if suggestions.is_empty() {
        return None;
    }

    let wanted_rows = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_area = popup::popup_below_anchor(
        anchor,
        frame.area(),
        anchor.width,
        wanted_rows as u16 + POPUP_BORDER_HEIGHT,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT || popup_area.width <= 2 {
        return None;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let rows = block.inner(popup_area);
    let visible = wanted_rows.min(rows.height as usize);
    let offset = scroll_offset(focused, suggestions.len(), visible);
    let text_width = (rows.width as usize).saturating_sub(FOCUS_MARKER.width());

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, suggestion)| {
            let title = truncate_to_width(&suggestion.title, text_width);
            if focused == Some(index) {
                ListItem::new(Line::from(format!("{FOCUS_MARKER}{title}"))).style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(Line::from(format!("{ROW_MARKER}{title}")))
                    .style(Style::default().fg(Color::White))
            }
        })
        .collect();

    popup::clear_area(frame, popup_area);
    frame.render_widget(List::new(items).block(block), popup_area);

    Some(SuggestionListAreas {
        popup: popup_area,
        rows,
        offset,
        visible,
    })
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
