use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, clipped to the frame
pub fn popup_below_anchor(
    anchor: Rect,
    frame_area: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.bottom().min(frame_area.bottom());

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(frame_area.bottom().saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
