//! onesheet-export
//!
//! Renders a one-pager into downloadable artifacts. The document is
//! transpiled to Typst markup, laid out as a single page of standard width
//! with height following content, and exported as PDF bytes or a rasterized
//! PNG. Also hosts the (stub) share-link generator.

pub mod error;
pub mod share;
pub mod snapshot;
pub mod transpile;

pub use error::ExportError;
pub use snapshot::{CompiledOnePager, compile};
pub use transpile::transpile;
