//! Application state management

use std::sync::Mutex;

use aula_core::ViewState;

/// Main application state
///
/// The table view state is shared between the UI callbacks and the
/// startup fetch completion; both run on the event loop thread, the
/// mutex just makes the sharing explicit.
pub struct AppState {
    pub view: Mutex<ViewState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: Mutex::new(ViewState::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
