//! onesheet-generate
//!
//! One-pager generation: prompt assembly, text-generation backends, and
//! structured output parsing. The model's output is untrusted and is
//! schema-validated before anything downstream sees it.

pub mod bedrock;
pub mod capability;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod prompt;

pub use capability::{GenerationBackend, TextGenerationCapability};
pub use error::GenerateError;
pub use generator::OnePagerGenerator;
