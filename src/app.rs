//! Page shell: owns the search widget and the results list, routes terminal
//! events to them, and draws the screen.

mod app_events;
mod app_render;
mod app_state;
mod mouse_capture;
mod mouse_events;

pub use app_state::{App, TICK_INTERVAL};
pub use mouse_capture::MouseCapture;
