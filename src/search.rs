//! Search widget: query editor, debounced suggestions and the popup list

mod debouncer;
mod focus_state;
mod input_state;
mod search_box;
pub mod search_render;
pub mod suggest_render;
mod suggest_state;

pub use debouncer::Debouncer;
pub use focus_state::FocusState;
pub use input_state::{InputState, PLACEHOLDER};
pub use search_box::SearchBox;
pub use suggest_state::{FETCH_ERROR_MESSAGE, SuggestPhase, SuggestState};
