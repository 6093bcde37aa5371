//! API client error types

/// API client result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the free-classrooms API.
///
/// The app treats every variant the same way (log, render an empty
/// table); the distinction only shows up in the log line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),
}
