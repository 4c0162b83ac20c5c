//! The canonical generated artifact.
//!
//! An `OnePagerDocument` is created once per successful generation call and
//! afterwards mutated only through field-level edits. The model's output is
//! untrusted: [`OnePagerDocument::validate`] enforces the full shape,
//! including the fixed cardinalities, before a document is accepted.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Exact number of benefit cards in a one-pager.
pub const BENEFIT_COUNT: usize = 4;
/// Exact number of feature lines in a one-pager.
pub const FEATURE_COUNT: usize = 6;
/// Exact number of stat callouts in a one-pager.
pub const STAT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub primary: String,
    pub secondary: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// A structured marketing one-pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnePagerDocument {
    pub headline: String,
    pub subheadline: String,
    pub problem: String,
    pub solution: String,
    pub benefits: Vec<Benefit>,
    pub features: Vec<String>,
    pub cta: CallToAction,
    pub stats: Vec<Stat>,
}

impl OnePagerDocument {
    /// Check that every field is present, non-empty, and of the exact
    /// expected cardinality.
    ///
    /// A document failing any check is a generation failure, never a
    /// partially usable result — callers must not truncate or pad.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("headline", &self.headline)?;
        require("subheadline", &self.subheadline)?;
        require("problem", &self.problem)?;
        require("solution", &self.solution)?;

        if self.benefits.len() != BENEFIT_COUNT {
            return Err(CoreError::Cardinality {
                name: "benefits",
                expected: BENEFIT_COUNT,
                actual: self.benefits.len(),
            });
        }
        for (i, benefit) in self.benefits.iter().enumerate() {
            require(&format!("benefits[{i}].title"), &benefit.title)?;
            require(&format!("benefits[{i}].description"), &benefit.description)?;
        }

        if self.features.len() != FEATURE_COUNT {
            return Err(CoreError::Cardinality {
                name: "features",
                expected: FEATURE_COUNT,
                actual: self.features.len(),
            });
        }
        for (i, feature) in self.features.iter().enumerate() {
            require(&format!("features[{i}]"), feature)?;
        }

        require("cta.primary", &self.cta.primary)?;
        require("cta.secondary", &self.cta.secondary)?;
        require("cta.text", &self.cta.text)?;

        if self.stats.len() != STAT_COUNT {
            return Err(CoreError::Cardinality {
                name: "stats",
                expected: STAT_COUNT,
                actual: self.stats.len(),
            });
        }
        for (i, stat) in self.stats.iter().enumerate() {
            require(&format!("stats[{i}].value"), &stat.value)?;
            require(&format!("stats[{i}].label"), &stat.label)?;
        }

        Ok(())
    }
}

fn require(name: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::EmptyField(name.to_string()));
    }
    Ok(())
}
