//! Classroom table view model

use std::rc::Rc;
use std::sync::Arc;

use slint::{ComponentHandle, ModelRc, VecModel};

use aula_core::{format_lecture_time, Classroom, PageSize};

use crate::state::AppState;
use crate::ClassroomRow;
use crate::MainWindow;

pub fn setup_classroom_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Filter input, re-derives the filtered list on every keystroke
    let state_filter = state.clone();
    let window_weak = window.as_weak();
    window.on_filter_edited(move |query| {
        state_filter.view.lock().unwrap().set_query(query.as_str());

        if let Some(w) = window_weak.upgrade() {
            refresh(&w, &state_filter);
        }
    });

    // Next page
    let state_next = state.clone();
    let window_weak = window.as_weak();
    window.on_next_page(move || {
        state_next.view.lock().unwrap().next_page();

        if let Some(w) = window_weak.upgrade() {
            refresh(&w, &state_next);
        }
    });

    // Previous page
    let state_prev = state.clone();
    let window_weak = window.as_weak();
    window.on_prev_page(move || {
        state_prev.view.lock().unwrap().prev_page();

        if let Some(w) = window_weak.upgrade() {
            refresh(&w, &state_prev);
        }
    });

    // Items-per-page selector
    let state_size = state.clone();
    let window_weak = window.as_weak();
    window.on_page_size_selected(move |index| {
        let size = match PageSize::from_index(index as usize) {
            Some(s) => s,
            None => return,
        };

        state_size.view.lock().unwrap().set_page_size(size);

        if let Some(w) = window_weak.upgrade() {
            refresh(&w, &state_size);
        }
    });
}

/// Push the current view state into the window properties
pub fn refresh(window: &MainWindow, state: &AppState) {
    let view = state.view.lock().unwrap();

    let rows: Vec<ClassroomRow> = view.current_rows().iter().map(to_row).collect();

    window.set_loading(view.is_loading());
    window.set_free_count(view.filtered_len() as i32);
    window.set_current_page(view.current_page() as i32);
    window.set_max_page(view.max_page() as i32);
    window.set_rows(ModelRc::from(Rc::new(VecModel::from(rows))));
}

fn to_row(classroom: &Classroom) -> ClassroomRow {
    ClassroomRow {
        room_number: classroom.room_number.clone().into(),
        building_name: classroom.building_name.clone().into(),
        next_lecture: format_lecture_time(classroom.next_lecture_time).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_row_formats_lecture_time() {
        let room = Classroom::new("101", "Main Hall")
            .with_next_lecture(NaiveTime::from_hms_opt(14, 30, 0).unwrap());

        let row = to_row(&room);
        assert_eq!(row.room_number, "101");
        assert_eq!(row.building_name, "Main Hall");
        assert_eq!(row.next_lecture, "2:30 PM");
    }

    #[test]
    fn test_row_without_lecture_shows_placeholder() {
        let row = to_row(&Classroom::new("B2", "Annex"));
        assert_eq!(row.next_lecture, "No lectures today");
    }
}
