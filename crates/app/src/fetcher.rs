//! Startup fetch of the classroom list
//!
//! One request per process lifetime. Success or failure funnels into a
//! single view-state update on the UI event loop; a failure just leaves
//! the table empty.

use std::sync::Arc;

use slint::ComponentHandle;
use tracing::{error, info};

use aula_net::ApiClient;

use crate::state::AppState;
use crate::viewmodel;
use crate::MainWindow;

pub fn spawn_initial_fetch(window: &MainWindow, state: Arc<AppState>) {
    let window_weak = window.as_weak();

    tokio::spawn(async move {
        let fetched = match ApiClient::new() {
            Ok(client) => client.fetch_free_classrooms().await,
            Err(e) => Err(e),
        };

        let _ = window_weak.upgrade_in_event_loop(move |window| {
            {
                let mut view = state.view.lock().unwrap();
                match fetched {
                    Ok(classrooms) => {
                        info!("Loaded {} free classrooms", classrooms.len());
                        view.load_records(classrooms);
                    }
                    Err(e) => {
                        error!("Failed to fetch classrooms: {}", e);
                        view.load_failed();
                    }
                }
            }

            viewmodel::refresh(&window, &state);
        });
    });
}
