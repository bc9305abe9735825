//! Tests for search box rendering

use super::*;
use crate::search::{FETCH_ERROR_MESSAGE, PLACEHOLDER};
use crate::test_utils::test_helpers::key;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::unbounded_channel;

const TEST_WIDTH: u16 = 40;

fn render_search_box(search: &SearchBox) -> (String, SearchBoxAreas) {
    let backend = TestBackend::new(TEST_WIDTH, SEARCH_BOX_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut areas = None;
    terminal
        .draw(|f| {
            let area = f.area();
            areas = Some(render_input(search, f, area));
        })
        .unwrap();
    (terminal.backend().to_string(), areas.unwrap())
}

fn search_box_with(query: &str) -> SearchBox {
    let mut search = SearchBox::new(300, |_| {});
    search.input.textarea.insert_str(query);
    search
}

#[test]
fn test_empty_query_shows_placeholder_without_clear_control() {
    let search = SearchBox::new(300, |_| {});

    let (output, areas) = render_search_box(&search);

    assert!(output.contains(PLACEHOLDER));
    assert!(!output.contains('✕'));
    assert_eq!(areas.clear_control, None);
    assert_eq!(areas.input, Rect::new(0, 0, TEST_WIDTH, SEARCH_BOX_HEIGHT));
}

#[test]
fn test_query_shows_text_and_clear_control() {
    let search = search_box_with("dune");

    let (output, areas) = render_search_box(&search);

    assert!(output.contains("dune"));
    assert!(output.contains('✕'));
    assert_eq!(areas.clear_control, Some(Rect::new(36, 1, 3, 1)));
}

#[test]
fn test_loading_indicator_only_while_fetching() {
    let mut search = SearchBox::new(300, |_| {});
    let (tx, _rx) = unbounded_channel();
    search.suggest.set_channel(tx);
    let start = Instant::now();
    search.handle_key(key(KeyCode::Char('d')), start);

    let (output, _) = render_search_box(&search);
    assert!(!output.contains("Searching"));

    assert!(search.tick(start + Duration::from_millis(300)));
    let (output, _) = render_search_box(&search);
    assert!(output.contains("Searching…"));

    let request_id = search.suggest.current_request_id();
    assert!(search.suggest.apply_response(request_id, Ok(Vec::new())));
    let (output, _) = render_search_box(&search);
    assert!(!output.contains("Searching"));
}

#[test]
fn test_status_shows_error() {
    let mut suggest = SuggestState::new(300);
    let start = Instant::now();
    suggest.on_query_changed("xyz", start);
    // No worker channel, so the search fails immediately
    assert!(!suggest.tick(start + Duration::from_millis(300)));

    let backend = TestBackend::new(60, 1);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_status(&suggest, f, area);
        })
        .unwrap();

    let output = terminal.backend().to_string();
    assert!(output.contains(FETCH_ERROR_MESSAGE));
    assert_eq!(terminal.backend().buffer()[(1, 0)].fg, Color::Red);
}

#[test]
fn test_status_empty_without_error() {
    let suggest = SuggestState::new(300);

    let backend = TestBackend::new(60, 1);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_status(&suggest, f, area);
        })
        .unwrap();

    assert_eq!(terminal.backend().to_string().trim_matches(|c| c == '"' || c == ' ' || c == '\n'), "");
}
