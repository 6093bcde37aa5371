//! Aula - free classrooms viewer
//!
//! A single-window desktop viewer for the campus free-classrooms feed:
//! one fetch at startup, a building-name filter, and a paginated table.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod fetcher;
mod state;
mod viewmodel;

slint::include_modules!();

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Aula");

    // Initialize tokio runtime for the startup fetch
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let _guard = runtime.enter();

    // Initialize application state
    let app_state = Arc::new(state::AppState::new());

    // Create main window
    let main_window = MainWindow::new().unwrap();

    // Set up view model bindings and push the initial (loading) state
    viewmodel::setup_bindings(&main_window, app_state.clone());
    viewmodel::refresh(&main_window, &app_state);

    // Kick off the one-shot fetch of the classroom list
    fetcher::spawn_initial_fetch(&main_window, app_state);

    // Run the application
    main_window.run().unwrap();
}
