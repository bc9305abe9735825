//! Book card rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::results_state::ResultsState;
use crate::api::Book;
use crate::widgets::text::{clamp_lines, truncate_to_width};

const BOOK_ICON: &str = "📖 ";
const SUMMARY_MAX_LINES: usize = 2;

/// Lines for one card: title, author, clamped summary
pub fn card_lines(book: &Book, width: usize) -> Vec<Line<'static>> {
    let title_width = width.saturating_sub(BOOK_ICON.width());
    let mut lines = vec![
        Line::from(vec![
            Span::styled(BOOK_ICON, Style::default().fg(Color::Gray)),
            Span::styled(
                truncate_to_width(&book.title, title_width),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            truncate_to_width(&format!("by {}", book.author), width),
            Style::default().fg(Color::Green),
        )),
    ];
    lines.extend(
        clamp_lines(&book.summary, width, SUMMARY_MAX_LINES)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::DarkGray)))),
    );
    lines
}

/// Render the results area
///
/// Draws the fetch error (if any) on the first row, then the "Search Results"
/// list once at least one book is present.
pub fn render_results(results: &ResultsState, frame: &mut Frame, area: Rect) {
    let mut list_area = area;

    if let Some(error) = results.error() {
        frame.render_widget(
            Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red)),
            Rect { height: area.height.min(1), ..area },
        );
        list_area.y = list_area.y.saturating_add(1).min(area.bottom());
        list_area.height = area.height.saturating_sub(1);
    }

    if results.is_empty() || list_area.height == 0 {
        return;
    }

    let count = results.books().len();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search Results ")
        .title_top(
            Line::from(Span::styled(
                format!(" {} of {} ", results.scroll() + 1, count),
                Style::default().fg(Color::Gray),
            ))
            .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    let width = inner.width.saturating_sub(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for book in results.books().iter().skip(results.scroll()) {
        if lines.len() >= inner.height as usize {
            break;
        }
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(card_lines(book, width));
    }

    let content = Rect {
        x: inner.x.saturating_add(1).min(inner.right()),
        width: inner.width.saturating_sub(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), content);
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
