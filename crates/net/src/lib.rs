//! Aula Network Library
//!
//! HTTP client for the classroom-availability API: one unauthenticated
//! GET returning the JSON array of currently-free classrooms.

pub mod client;
pub mod error;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
