use std::sync::atomic::{AtomicUsize, Ordering};

use onesheet_core::models::request::{GenerationRequest, InputMode, Tone};
use onesheet_generate::bedrock::BedrockCapability;
use onesheet_generate::fixture::FixtureCapability;
use onesheet_generate::{GenerateError, OnePagerGenerator, TextGenerationCapability};

/// Capability that counts invocations and replays a fixed response body.
struct ScriptedCapability {
    calls: AtomicUsize,
    body: String,
}

impl ScriptedCapability {
    fn replaying(body: impl Into<String>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            body: body.into(),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextGenerationCapability for ScriptedCapability {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }

    fn describe(&self) -> &'static str {
        "scripted"
    }
}

fn saas_request() -> GenerationRequest {
    GenerationRequest::new(
        "A SaaS platform for e-commerce support automation",
        InputMode::Prompt,
        Tone::Marketing,
    )
}

#[tokio::test]
async fn empty_input_fails_without_invoking_the_capability() {
    let capability = ScriptedCapability::replaying("{}");
    let generator = OnePagerGenerator::new(capability);

    let request = GenerationRequest::new("   ", InputMode::Prompt, Tone::Marketing);
    let result = generator.generate(&request).await;

    assert!(matches!(result, Err(GenerateError::InvalidRequest(_))));
    assert_eq!(generator.capability().call_count(), 0);
}

#[tokio::test]
async fn fixture_generation_yields_a_valid_document() {
    let generator = OnePagerGenerator::new(FixtureCapability::new());
    let document = generator.generate(&saas_request()).await.unwrap();

    assert!(document.validate().is_ok());
    assert_eq!(document.benefits.len(), 4);
    assert_eq!(document.features.len(), 6);
    assert_eq!(document.stats.len(), 3);
    assert!(!document.headline.trim().is_empty());
    assert!(document.headline.split_whitespace().count() <= 10);
}

#[tokio::test]
async fn fixture_headlines_distinguish_distinct_inputs() {
    let generator = OnePagerGenerator::new(FixtureCapability::new());

    let saas = generator.generate(&saas_request()).await.unwrap();
    let fitness_request = GenerationRequest::new(
        "A mobile app for fitness enthusiasts to track workouts",
        InputMode::Prompt,
        Tone::Marketing,
    );
    let fitness = generator.generate(&fitness_request).await.unwrap();

    assert_ne!(saas.headline, fitness.headline);
    // The keyword is drawn from the product description, not from the
    // instruction wrapped around it.
    assert!(!saas.headline.contains("Generate"), "got: {}", saas.headline);
    assert!(fitness.headline.contains("mobile"), "got: {}", fitness.headline);
}

#[tokio::test]
async fn fixture_failure_surfaces_as_invocation_error() {
    let generator = OnePagerGenerator::new(FixtureCapability::failing("backend unreachable"));
    let err = generator.generate(&saas_request()).await.unwrap_err();

    match err {
        GenerateError::Invocation(message) => assert!(message.contains("backend unreachable")),
        other => panic!("expected Invocation, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_response_is_a_parse_error() {
    let capability = ScriptedCapability::replaying("Sure! Here is your one-pager: ...");
    let generator = OnePagerGenerator::new(capability);

    let err = generator.generate(&saas_request()).await.unwrap_err();
    assert!(matches!(err, GenerateError::ResponseParse(_)));
    assert_eq!(generator.capability().call_count(), 1);
}

#[tokio::test]
async fn wrong_cardinality_is_a_schema_violation_not_a_truncation() {
    // Structurally valid JSON, but only two benefits.
    let mut value: serde_json::Value = {
        let generator = OnePagerGenerator::new(FixtureCapability::new());
        let doc = generator.generate(&saas_request()).await.unwrap();
        serde_json::to_value(doc).unwrap()
    };
    value["benefits"].as_array_mut().unwrap().truncate(2);

    let generator = OnePagerGenerator::new(ScriptedCapability::replaying(value.to_string()));
    let err = generator.generate(&saas_request()).await.unwrap_err();

    match err {
        GenerateError::SchemaViolation(message) => assert!(message.contains("benefits")),
        other => panic!("expected SchemaViolation, got {other:?}"),
    }
}

#[tokio::test]
async fn code_fenced_response_still_parses() {
    let generator = OnePagerGenerator::new(FixtureCapability::new());
    let doc = generator.generate(&saas_request()).await.unwrap();
    let fenced = format!("```json\n{}\n```", serde_json::to_string(&doc).unwrap());

    let generator = OnePagerGenerator::new(ScriptedCapability::replaying(fenced));
    let parsed = generator.generate(&saas_request()).await.unwrap();
    assert_eq!(parsed, doc);
}

#[tokio::test]
async fn bedrock_without_credentials_reports_before_any_call() {
    // An SDK config with no credentials provider at all.
    let sdk_config = aws_config::SdkConfig::builder()
        .region(aws_config::Region::new("us-east-1"))
        .build();

    let generator = OnePagerGenerator::new(BedrockCapability::new(
        sdk_config,
        "us.anthropic.claude-sonnet-4-20250514-v1:0",
    ));

    let err = generator.generate(&saas_request()).await.unwrap_err();
    assert!(matches!(err, GenerateError::CredentialsMissing));
}

#[tokio::test]
async fn bedrock_with_an_empty_credential_chain_reports_before_any_call() {
    // The loader installs a provider, but one that never yields credentials.
    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .no_credentials()
        .load()
        .await;

    let generator = OnePagerGenerator::new(BedrockCapability::new(
        sdk_config,
        "us.anthropic.claude-sonnet-4-20250514-v1:0",
    ));

    let err = generator.generate(&saas_request()).await.unwrap_err();
    assert!(matches!(err, GenerateError::CredentialsMissing));
}
