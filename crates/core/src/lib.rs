//! Aula Core Library
//!
//! Data model and table view state for the free-classrooms viewer.

pub mod error;
pub mod models;
pub mod view;

pub use error::{Error, Result};
pub use models::*;
pub use view::{filter_classrooms, format_lecture_time, PageSize, Paginator, ViewState};
