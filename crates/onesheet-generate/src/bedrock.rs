//! Live generation backend via the Bedrock Converse API.

use aws_sdk_bedrockruntime::config::ProvideCredentials as _;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::info;

use crate::capability::TextGenerationCapability;
use crate::error::GenerateError;

/// Generation backed by a Bedrock model (e.g. a Claude inference profile).
#[derive(Debug)]
pub struct BedrockCapability {
    sdk_config: aws_config::SdkConfig,
    model_id: String,
}

impl BedrockCapability {
    pub fn new(sdk_config: aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            sdk_config,
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl TextGenerationCapability for BedrockCapability {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerateError> {
        // Absent credentials are reported before any client is built —
        // no model call is ever attempted. The chain is resolved here so
        // an installed-but-empty default chain also fails early.
        let provider = self
            .sdk_config
            .credentials_provider()
            .ok_or(GenerateError::CredentialsMissing)?;
        provider
            .provide_credentials()
            .await
            .map_err(|_| GenerateError::CredentialsMissing)?;

        let client = aws_sdk_bedrockruntime::Client::new(&self.sdk_config);

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user_prompt.to_string()))
            .build()
            .map_err(|e| GenerateError::Invocation(e.to_string()))?;

        info!(model_id = %self.model_id, "invoking generation model");

        let response = client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .messages(message)
            .send()
            .await
            .map_err(|e| GenerateError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| GenerateError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(t) = block {
                    Some(t.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        info!(model_id = %self.model_id, response_len = text.len(), "model response received");

        Ok(text)
    }

    fn describe(&self) -> &'static str {
        "bedrock"
    }
}
