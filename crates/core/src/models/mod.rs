//! Data models for Aula

mod classroom;

pub use classroom::*;
