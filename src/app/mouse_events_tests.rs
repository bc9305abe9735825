//! Tests for mouse handling against a rendered 80x24 screen
//!
//! Layout at that size: search box rows 3-5 with the clear control at
//! columns 76-78 of row 4, status row 6, results from row 7. The suggestion
//! popup starts at row 6, so its first suggestion row is 7.

use super::*;
use crate::api::{ApiRequest, ApiResponse, Book, BookId, Suggestion};
use crate::test_utils::test_helpers::{TestApp, left_click, mouse};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn draw(app: &mut App) {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
}

fn with_suggestions() -> TestApp {
    let mut t = TestApp::new();
    t.type_str("du", 0);
    t.tick(300);
    t.responses
        .send(ApiResponse::Suggestions {
            request_id: 1,
            query: "du".to_string(),
            result: Ok(vec![
                Suggestion::new(1u64, "Dune"),
                Suggestion::new(2u64, "Dune Messiah"),
            ]),
        })
        .unwrap();
    t.tick(310);
    t.drain_requests();
    draw(&mut t.app);
    t
}

fn send_mouse(t: &mut TestApp, event: MouseEvent) {
    let now = t.at(400);
    handle_mouse(&mut t.app, event, now);
}

#[test]
fn test_click_suggestion_selects_it() {
    let mut t = with_suggestions();

    send_mouse(&mut t, left_click(10, 8));

    assert_eq!(
        t.drain_requests(),
        vec![ApiRequest::Book {
            id: BookId::from(2u64)
        }]
    );
    assert_eq!(t.app.search.query(), "");
    assert!(!t.app.search.suggest.is_visible());
}

#[test]
fn test_hover_moves_focus() {
    let mut t = with_suggestions();

    send_mouse(&mut t, mouse(MouseEventKind::Moved, 10, 8));
    assert_eq!(t.app.search.suggest.focused_index(), Some(1));

    send_mouse(&mut t, mouse(MouseEventKind::Moved, 10, 7));
    assert_eq!(t.app.search.suggest.focused_index(), Some(0));

    // Leaving the list keeps the last focus
    send_mouse(&mut t, mouse(MouseEventKind::Moved, 10, 20));
    assert_eq!(t.app.search.suggest.focused_index(), Some(0));
}

#[test]
fn test_click_outside_dismisses_but_keeps_query() {
    let mut t = with_suggestions();

    send_mouse(&mut t, left_click(40, 18));

    assert!(!t.app.search.suggest.is_visible());
    assert_eq!(t.app.search.query(), "du");
    assert!(t.drain_requests().is_empty());
}

#[test]
fn test_click_on_footer_dismisses() {
    let mut t = with_suggestions();
    send_mouse(&mut t, left_click(3, 23));
    assert!(!t.app.search.suggest.is_visible());
}

#[test]
fn test_right_click_inside_widget_keeps_list() {
    let mut t = with_suggestions();

    send_mouse(&mut t, mouse(MouseEventKind::Down(MouseButton::Right), 10, 8));

    assert!(t.app.search.suggest.is_visible());
    assert!(t.drain_requests().is_empty());
}

#[test]
fn test_click_in_input_keeps_list() {
    let mut t = with_suggestions();

    send_mouse(&mut t, left_click(10, 4));

    assert!(t.app.search.suggest.is_visible());
    assert_eq!(t.app.search.query(), "du");
}

#[test]
fn test_click_clear_control() {
    let mut t = with_suggestions();
    assert!(t.app.layout.clear_control.is_some());

    send_mouse(&mut t, left_click(77, 4));

    assert_eq!(t.app.search.query(), "");
    assert!(!t.app.search.suggest.is_visible());
    assert!(t.drain_requests().is_empty());
}

#[test]
fn test_wheel_scrolls_results_only_over_results() {
    let mut t = TestApp::new();
    for id in 0..3u64 {
        t.responses
            .send(ApiResponse::Book {
                id: BookId::from(id),
                result: Ok(Book {
                    id: BookId::from(id),
                    title: format!("Book {id}"),
                    author: "Anon".to_string(),
                    summary: String::new(),
                }),
            })
            .unwrap();
    }
    t.tick(0);
    draw(&mut t.app);

    send_mouse(&mut t, mouse(MouseEventKind::ScrollDown, 40, 12));
    assert_eq!(t.app.results.scroll(), 1);

    send_mouse(&mut t, mouse(MouseEventKind::ScrollDown, 40, 4));
    assert_eq!(t.app.results.scroll(), 1);

    send_mouse(&mut t, mouse(MouseEventKind::ScrollUp, 40, 12));
    assert_eq!(t.app.results.scroll(), 0);
}
