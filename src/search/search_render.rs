//! Search box rendering
//!
//! Draws the query editor with its clear control and loading indicator, and
//! the status line underneath it.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::search_box::SearchBox;
use super::suggest_state::{SuggestPhase, SuggestState};

pub const SEARCH_BOX_HEIGHT: u16 = 3;
pub const CLEAR_CONTROL: &str = " ✕ ";
pub const LOADING_LABEL: &str = " Searching… ";

/// Where the search box landed, for hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBoxAreas {
    pub input: Rect,
    /// Only present while the query is non-empty
    pub clear_control: Option<Rect>,
}

/// Render the bordered query editor
pub fn render_input(search: &SearchBox, frame: &mut Frame, area: Rect) -> SearchBoxAreas {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(Color::Cyan));

    if search.suggest.phase() == SuggestPhase::Fetching {
        block = block.title_top(
            Line::from(Span::styled(
                LOADING_LABEL,
                Style::default().fg(Color::Yellow),
            ))
            .alignment(Alignment::Right),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let control_width = CLEAR_CONTROL.width() as u16;
    let clear_control = (!search.query().is_empty()
        && inner.height > 0
        && inner.width > control_width)
        .then(|| Rect {
            x: inner.right() - control_width,
            y: inner.y,
            width: control_width,
            height: 1,
        });

    let text_area = match clear_control {
        Some(control) => Rect {
            width: inner.width - control.width,
            ..inner
        },
        None => inner,
    };
    frame.render_widget(&search.input.textarea, text_area);

    if let Some(control) = clear_control {
        frame.render_widget(
            Paragraph::new(CLEAR_CONTROL).style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            control,
        );
    }

    SearchBoxAreas {
        input: area,
        clear_control,
    }
}

/// Render the line under the search box (error message, if any)
pub fn render_status(suggest: &SuggestState, frame: &mut Frame, area: Rect) {
    if let Some(error) = suggest.error() {
        frame.render_widget(
            Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red)),
            area,
        );
    }
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
