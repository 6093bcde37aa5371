//! Error types for Aula Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported page size: {0}")]
    UnsupportedPageSize(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
