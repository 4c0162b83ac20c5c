//! onesheet-session
//!
//! The editable-document state: a store for field-level edits and the
//! input → generating → preview view-state machine that sequences user
//! input, async generation, and presentation.

pub mod controller;
pub mod error;
pub mod session;
pub mod store;

pub use controller::{Controller, ViewState};
pub use error::SessionError;
pub use session::Session;
pub use store::DocumentStore;
