//! Domain types, errors, and upload validation shared by every crate.

pub mod error;
pub mod types;
pub mod upload;
