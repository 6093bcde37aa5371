//! View model bindings for the Slint UI

mod classrooms;

use std::sync::Arc;

use crate::state::AppState;
use crate::MainWindow;

pub use classrooms::refresh;

pub fn setup_bindings(window: &MainWindow, state: Arc<AppState>) {
    classrooms::setup_classroom_bindings(window, state);
}
