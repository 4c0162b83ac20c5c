//! Scalar leaf addressing for in-place document edits.
//!
//! A [`FieldPath`] names exactly one editable string in an
//! `OnePagerDocument`, using a bracketed dotted syntax: `headline`,
//! `benefits[2].title`, `features[5]`, `cta.primary`, `stats[0].label`.
//! Indices are bounds-checked at parse time against the fixed
//! cardinalities, so a parsed path is always applicable.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::models::document::{BENEFIT_COUNT, FEATURE_COUNT, STAT_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenefitPart {
    Title,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CtaPart {
    Primary,
    Secondary,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatPart {
    Value,
    Label,
}

/// Address of a single scalar leaf in an `OnePagerDocument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Headline,
    Subheadline,
    Problem,
    Solution,
    Benefit(usize, BenefitPart),
    Feature(usize),
    Cta(CtaPart),
    Stat(usize, StatPart),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Headline => f.write_str("headline"),
            FieldPath::Subheadline => f.write_str("subheadline"),
            FieldPath::Problem => f.write_str("problem"),
            FieldPath::Solution => f.write_str("solution"),
            FieldPath::Benefit(i, BenefitPart::Title) => write!(f, "benefits[{i}].title"),
            FieldPath::Benefit(i, BenefitPart::Description) => {
                write!(f, "benefits[{i}].description")
            }
            FieldPath::Feature(i) => write!(f, "features[{i}]"),
            FieldPath::Cta(CtaPart::Primary) => f.write_str("cta.primary"),
            FieldPath::Cta(CtaPart::Secondary) => f.write_str("cta.secondary"),
            FieldPath::Cta(CtaPart::Text) => f.write_str("cta.text"),
            FieldPath::Stat(i, StatPart::Value) => write!(f, "stats[{i}].value"),
            FieldPath::Stat(i, StatPart::Label) => write!(f, "stats[{i}].label"),
        }
    }
}

impl FromStr for FieldPath {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidFieldPath(s.to_string());

        match s {
            "headline" => return Ok(FieldPath::Headline),
            "subheadline" => return Ok(FieldPath::Subheadline),
            "problem" => return Ok(FieldPath::Problem),
            "solution" => return Ok(FieldPath::Solution),
            "cta.primary" => return Ok(FieldPath::Cta(CtaPart::Primary)),
            "cta.secondary" => return Ok(FieldPath::Cta(CtaPart::Secondary)),
            "cta.text" => return Ok(FieldPath::Cta(CtaPart::Text)),
            _ => {}
        }

        // Indexed forms: `name[i]` or `name[i].part`.
        let (name, rest) = s.split_once('[').ok_or_else(invalid)?;
        let (index, part) = rest.split_once(']').ok_or_else(invalid)?;
        let index: usize = index.parse().map_err(|_| invalid())?;

        match (name, part) {
            ("features", "") if index < FEATURE_COUNT => Ok(FieldPath::Feature(index)),
            ("benefits", ".title") if index < BENEFIT_COUNT => {
                Ok(FieldPath::Benefit(index, BenefitPart::Title))
            }
            ("benefits", ".description") if index < BENEFIT_COUNT => {
                Ok(FieldPath::Benefit(index, BenefitPart::Description))
            }
            ("stats", ".value") if index < STAT_COUNT => Ok(FieldPath::Stat(index, StatPart::Value)),
            ("stats", ".label") if index < STAT_COUNT => Ok(FieldPath::Stat(index, StatPart::Label)),
            _ => Err(invalid()),
        }
    }
}
