//! View state for the classroom table

mod display;
mod filter;
mod pagination;
mod state;

pub use display::{format_lecture_time, NO_LECTURES_TODAY};
pub use filter::filter_classrooms;
pub use pagination::{PageSize, Paginator};
pub use state::ViewState;
