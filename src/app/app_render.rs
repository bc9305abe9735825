use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::results::results_render;
use crate::search::{search_render, suggest_render};

const MAX_CONTENT_WIDTH: u16 = 80;
const HEADER_HEIGHT: u16 = 3;
const FOOTER_LINKS: &str = " About · Privacy · Terms · Settings";
const FOOTER_HINTS: &str = "↑↓ select · Enter open · Esc close ";

const HEADER_LETTERS: [(char, Color); 6] = [
    ('A', Color::Blue),
    ('I', Color::Red),
    ('B', Color::Yellow),
    ('o', Color::Blue),
    ('o', Color::Green),
    ('k', Color::Red),
];

impl App {
    /// Render the UI and record where each component landed
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout.clear();

        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        let content = centered_column(body, MAX_CONTENT_WIDTH);
        let [header, search, status, results] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(search_render::SEARCH_BOX_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(content);

        render_header(frame, header);
        let search_areas = search_render::render_input(&self.search, frame, search);
        search_render::render_status(&self.search.suggest, frame, status);
        results_render::render_results(&self.results, frame, results);
        render_footer(frame, footer);

        self.layout.search_input = Some(search_areas.input);
        self.layout.clear_control = search_areas.clear_control;
        self.layout.search_status = Some(status);
        self.layout.results = Some(results);

        // Popup last so it draws over the results
        if let Some(list) = suggest_render::render_suggestions(
            self.search.suggest.suggestions(),
            self.search.suggest.focused_index(),
            frame,
            search_areas.input,
        ) {
            self.layout.suggestion_popup = Some(list.popup);
            self.layout.suggestion_rows = Some(list.rows);
            self.layout.suggestion_offset = list.offset;
            self.layout.suggestion_count = list.visible;
        }
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let letters: Vec<Span> = HEADER_LETTERS
        .iter()
        .map(|&(letter, color)| {
            Span::styled(
                letter.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let row = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(letters)).alignment(Alignment::Center),
        row,
    );
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    frame.render_widget(
        Paragraph::new(FOOTER_LINKS).style(style).alignment(Alignment::Left),
        area,
    );
    frame.render_widget(
        Paragraph::new(FOOTER_HINTS).style(style).alignment(Alignment::Right),
        area,
    );
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
