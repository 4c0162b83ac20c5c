//! Generation request orchestration: validate, prompt, invoke, parse, check.

use tracing::info;
use uuid::Uuid;

use onesheet_core::models::document::OnePagerDocument;
use onesheet_core::models::request::GenerationRequest;

use crate::capability::TextGenerationCapability;
use crate::error::GenerateError;
use crate::prompt;

/// Turns a [`GenerationRequest`] into a validated [`OnePagerDocument`]
/// through the configured capability.
///
/// All-or-nothing: a document missing any field is a failure, never a
/// partial result. No caching and no retries — resubmitting identical
/// input performs a fresh call, and the underlying capability is
/// non-deterministic by design, so output is not reproducible.
#[derive(Debug)]
pub struct OnePagerGenerator<C> {
    capability: C,
}

impl<C: TextGenerationCapability> OnePagerGenerator<C> {
    pub fn new(capability: C) -> Self {
        Self { capability }
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<OnePagerDocument, GenerateError> {
        // Empty input is caught here, before any outbound call.
        request.validate()?;

        let request_id = Uuid::new_v4();
        let user_prompt = prompt::build_user_prompt(request.tone, &request.raw_input);

        info!(
            request_id = %request_id,
            backend = self.capability.describe(),
            tone = %request.tone,
            "starting one-pager generation"
        );

        let raw = self
            .capability
            .complete(prompt::SYSTEM_PROMPT, &user_prompt)
            .await?;

        let body = strip_code_fences(&raw);

        let document: OnePagerDocument = serde_json::from_str(body).map_err(|e| {
            GenerateError::ResponseParse(format!("failed to parse one-pager document: {e}"))
        })?;

        document
            .validate()
            .map_err(|e| GenerateError::SchemaViolation(e.to_string()))?;

        info!(request_id = %request_id, "one-pager generation complete");

        Ok(document)
    }
}

/// Models sometimes wrap the JSON object in a markdown code fence even when
/// told not to. Strip it; leave anything else untouched.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
