//! Deterministic generation backend for development and tests.
//!
//! Produces a canned one-pager whose headline is derived from the prompt,
//! so distinct inputs remain distinguishable in the preview. Requires no
//! credentials and makes no network calls.

use serde_json::json;

use crate::capability::TextGenerationCapability;
use crate::error::GenerateError;

/// Words too generic to anchor a headline on.
const STOPWORDS: [&str; 4] = ["about", "using", "helps", "platform"];

#[derive(Debug, Clone, Default)]
pub struct FixtureCapability {
    failure: Option<String>,
}

impl FixtureCapability {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fixture that fails every call with the given message. Used to
    /// exercise the failure paths without a live backend.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
        }
    }
}

impl TextGenerationCapability for FixtureCapability {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerateError> {
        if let Some(message) = &self.failure {
            return Err(GenerateError::Invocation(message.clone()));
        }
        Ok(fixture_document(user_prompt))
    }

    fn describe(&self) -> &'static str {
        "fixture"
    }
}

/// First meaningful word of the prompt, or "Business" when nothing stands out.
fn extract_keyword(text: &str) -> &str {
    text.split_whitespace()
        .find(|word| {
            word.len() > 4
                && word.chars().all(char::is_alphanumeric)
                && !STOPWORDS.contains(&word.to_ascii_lowercase().as_str())
        })
        .unwrap_or("Business")
}

fn fixture_document(user_prompt: &str) -> String {
    // The instruction prefix ends at the first blank line; only the raw
    // product description after it feeds the keyword.
    let input = user_prompt
        .split_once("\n\n")
        .map_or(user_prompt, |(_, rest)| rest);
    let keyword = extract_keyword(input);

    json!({
        "headline": format!("Transform Your {keyword} Workflow"),
        "subheadline": "Streamline operations, boost productivity, and scale faster with our innovative solution",
        "problem": "Traditional approaches are slow, expensive, and inefficient. Teams struggle with fragmented workflows and lack of visibility into what matters most.",
        "solution": "Our platform unifies your entire workflow in one place, automating repetitive tasks and providing real-time insights to help you make better decisions faster.",
        "benefits": [
            {"title": "Save Time", "description": "Automate 80% of manual tasks"},
            {"title": "Reduce Costs", "description": "Cut operational expenses by 50%"},
            {"title": "Scale Faster", "description": "Grow without adding headcount"},
            {"title": "Better Insights", "description": "Real-time analytics and reporting"}
        ],
        "features": [
            "Automated workflow management",
            "Real-time collaboration tools",
            "Advanced analytics dashboard",
            "Seamless integrations",
            "Enterprise-grade security",
            "24/7 customer support"
        ],
        "cta": {
            "primary": "Start Free Trial",
            "secondary": "Schedule Demo",
            "text": "Join 10,000+ companies already using our platform"
        },
        "stats": [
            {"value": "10,000+", "label": "Active Users"},
            {"value": "98%", "label": "Satisfaction Rate"},
            {"value": "50%", "label": "Cost Reduction"}
        ]
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_skips_short_and_stop_words() {
        assert_eq!(extract_keyword("An app using helps about fitness"), "fitness");
        assert_eq!(extract_keyword("a b c"), "Business");
    }

    #[test]
    fn keyword_comes_from_the_description_not_the_instruction() {
        let prompt = "Generate a marketing one-pager (persuasive and engaging) \
                      for the following product or notes:\n\nA fitness tracking app";
        let body = fixture_document(prompt);
        assert!(body.contains("Transform Your fitness Workflow"), "got: {body}");
    }
}
