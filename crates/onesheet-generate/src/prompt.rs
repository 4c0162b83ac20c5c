//! The fixed instruction pair sent to the generation capability.
//!
//! The system prompt describes the exact target schema; the user prompt
//! embeds the tone and the raw product description. Both are stable across
//! backends so the fixture and the live model see identical instructions.

use onesheet_core::models::request::Tone;

/// Fixed system instruction describing the one-pager schema and writing
/// guidelines. The response must be a single JSON object — nothing else.
pub const SYSTEM_PROMPT: &str = r#"You are an expert marketing copywriter and one-pager designer.
Your task is to transform user input into a professional, persuasive one-pager structure.

Return a single JSON object with this exact structure and nothing else:
{
  "headline": "Compelling headline (max 10 words)",
  "subheadline": "Supporting subheadline (max 20 words)",
  "problem": "Clear problem statement (2-3 sentences)",
  "solution": "Your solution description (2-3 sentences)",
  "benefits": [
    {"title": "Benefit name", "description": "Brief description"}
  ],
  "features": ["Feature text"],
  "cta": {
    "primary": "Primary CTA button text",
    "secondary": "Secondary CTA button text",
    "text": "Supporting CTA text"
  },
  "stats": [
    {"value": "10,000+", "label": "Stat label"}
  ]
}

Cardinality is fixed: exactly 4 benefits, exactly 6 features, exactly 3 stats.

Guidelines:
- Be concise and impactful
- Use action-oriented language
- Focus on benefits, not just features
- Make it scannable and easy to read
- Adapt phrasing to the requested tone"#;

/// Build the user instruction embedding tone and raw input.
pub fn build_user_prompt(tone: Tone, raw_input: &str) -> String {
    format!(
        "Generate a {} one-pager ({}) for the following product or notes:\n\n{}",
        tone.label(),
        tone.style(),
        raw_input
    )
}
