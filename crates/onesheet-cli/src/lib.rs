//! onesheet-cli library root.
//!
//! Exposes the config layer and command implementations so integration
//! tests can exercise them without going through the binary.

pub mod commands;
pub mod config;
