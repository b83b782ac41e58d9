//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the DTOs the repositories accept.

pub mod category;
pub mod image;
pub mod user;
