//! Mouse handling
//!
//! Positions are resolved against the regions recorded by the last render.
//! Any button press outside the search widget dismisses the suggestions.

use std::time::Instant;

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let region = region_at(&app.layout, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(button) => handle_press(app, region, button, now),
        MouseEventKind::Moved => {
            if let Some(Region::Suggestion(index)) = region {
                app.search.hover(index);
            }
        }
        MouseEventKind::ScrollDown if region == Some(Region::Results) => {
            app.results.scroll_down(1);
        }
        MouseEventKind::ScrollUp if region == Some(Region::Results) => {
            app.results.scroll_up(1);
        }
        _ => {}
    }
}

fn handle_press(app: &mut App, region: Option<Region>, button: MouseButton, now: Instant) {
    if !region.is_some_and(Region::is_search_widget) {
        app.search.dismiss();
        return;
    }
    if button != MouseButton::Left {
        return;
    }

    match region {
        Some(Region::Suggestion(index)) => app.search.click_suggestion(index, now),
        Some(Region::ClearControl) => app.search.clear(now),
        _ => {}
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
