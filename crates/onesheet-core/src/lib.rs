//! onesheet-core
//!
//! Pure domain types and validation for the one-pager generator.
//! No AWS dependency — this is the shared vocabulary of the onesheet system.

pub mod error;
pub mod models;
