use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Canned example prompts offered on the input screen.
pub const EXAMPLE_PROMPTS: [&str; 3] = [
    "A SaaS platform that helps e-commerce businesses automate their customer support using AI",
    "A mobile app for fitness enthusiasts to track workouts and nutrition with personalized coaching",
    "An enterprise solution for managing remote teams and improving productivity",
];

/// How the raw input was provided. Passthrough only — generation semantics
/// do not change between the two modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    Prompt,
    Paste,
}

/// Stylistic parameter influencing generated phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Marketing,
    Sales,
    Investor,
    Internal,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Marketing => "marketing",
            Tone::Sales => "sales",
            Tone::Investor => "investor",
            Tone::Internal => "internal",
        }
    }

    /// One-line style description, embedded in the user prompt.
    pub fn style(&self) -> &'static str {
        match self {
            Tone::Marketing => "persuasive and engaging",
            Tone::Sales => "direct and conversion-focused",
            Tone::Investor => "professional and data-driven",
            Tone::Internal => "clear and informative",
        }
    }

    pub const ALL: [Tone; 4] = [Tone::Marketing, Tone::Sales, Tone::Investor, Tone::Internal];
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "marketing" => Ok(Tone::Marketing),
            "sales" => Ok(Tone::Sales),
            "investor" => Ok(Tone::Investor),
            "internal" => Ok(Tone::Internal),
            other => Err(CoreError::UnknownTone(other.to_string())),
        }
    }
}

/// A single generation request: free-form product description (or pasted
/// notes) plus the tone to write in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub raw_input: String,
    pub input_mode: InputMode,
    pub tone: Tone,
}

impl GenerationRequest {
    pub fn new(raw_input: impl Into<String>, input_mode: InputMode, tone: Tone) -> Self {
        Self {
            raw_input: raw_input.into(),
            input_mode,
            tone,
        }
    }

    /// Reject empty input before anything else happens — in particular,
    /// before any network call.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.raw_input.trim().is_empty() {
            return Err(CoreError::EmptyInput);
        }
        Ok(())
    }
}
