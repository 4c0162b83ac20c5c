//! The seam between the generator and whatever produces text.
//!
//! Backends are selected at configuration time: the live Bedrock call for
//! real use, the deterministic fixture for development and tests. The
//! generator and everything above it depend only on this trait.

use crate::bedrock::BedrockCapability;
use crate::error::GenerateError;
use crate::fixture::FixtureCapability;

/// An opaque text-generation capability.
///
/// `complete` submits one system/user instruction pair and resolves to the
/// raw response text. Exactly one outbound call per invocation, no retries;
/// the first error surfaces to the caller.
pub trait TextGenerationCapability {
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<String, GenerateError>>;

    /// Short backend name for logs.
    fn describe(&self) -> &'static str;
}

/// Runtime-selected backend. Static dispatch everywhere else; this enum is
/// the one place the choice is made.
#[derive(Debug)]
pub enum GenerationBackend {
    Bedrock(BedrockCapability),
    Fixture(FixtureCapability),
}

impl TextGenerationCapability for GenerationBackend {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerateError> {
        match self {
            GenerationBackend::Bedrock(capability) => {
                capability.complete(system_prompt, user_prompt).await
            }
            GenerationBackend::Fixture(capability) => {
                capability.complete(system_prompt, user_prompt).await
            }
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            GenerationBackend::Bedrock(capability) => capability.describe(),
            GenerationBackend::Fixture(capability) => capability.describe(),
        }
    }
}
