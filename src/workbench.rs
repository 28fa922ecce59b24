pub mod ui_state;

pub use ui_state::{UiState, UiStateTracker};
