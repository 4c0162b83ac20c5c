//! Presentation settings independent of the generated document.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::request::Tone;

/// Closed set of typeface choices for the rendered one-pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Inter,
    Georgia,
    Monospace,
}

impl FontStyle {
    pub fn label(&self) -> &'static str {
        match self {
            FontStyle::Inter => "Inter",
            FontStyle::Georgia => "Georgia",
            FontStyle::Monospace => "Monospace",
        }
    }

    /// Typeface names for the typesetter, preferred first. The trailing
    /// entries are fallbacks guaranteed to resolve.
    pub fn typefaces(&self) -> &'static [&'static str] {
        match self {
            FontStyle::Inter => &["Inter", "Libertinus Serif"],
            FontStyle::Georgia => &["Georgia", "Libertinus Serif"],
            FontStyle::Monospace => &["Monospace", "DejaVu Sans Mono"],
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FontStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inter" => Ok(FontStyle::Inter),
            "georgia" => Ok(FontStyle::Georgia),
            "monospace" | "mono" => Ok(FontStyle::Monospace),
            other => Err(CoreError::UnknownFontStyle(other.to_string())),
        }
    }
}

/// User-tunable presentation settings. Mutable at any time; the renderer
/// reads all of it, the generator reads only `tone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizationSettings {
    pub tone: Tone,
    /// CSS hex color, `#RGB` or `#RRGGBB`. Validated on set.
    pub primary_color: String,
    pub font_style: FontStyle,
    pub logo: Option<PathBuf>,
}

impl Default for CustomizationSettings {
    fn default() -> Self {
        Self {
            tone: Tone::Marketing,
            primary_color: "#0ea5e9".to_string(),
            font_style: FontStyle::Inter,
            logo: None,
        }
    }
}

impl CustomizationSettings {
    pub fn set_primary_color(&mut self, color: &str) -> Result<(), CoreError> {
        parse_css_color(color)?;
        self.primary_color = color.to_string();
        Ok(())
    }

    /// The primary color as RGB components. Falls back to the default
    /// accent if the stored string was never validated.
    pub fn primary_rgb(&self) -> (u8, u8, u8) {
        parse_css_color(&self.primary_color).unwrap_or((0x0e, 0xa5, 0xe9))
    }
}

/// Parse a CSS hex color (`#RGB` or `#RRGGBB`) into RGB components.
pub fn parse_css_color(color: &str) -> Result<(u8, u8, u8), CoreError> {
    let invalid = || CoreError::InvalidColor(color.to_string());

    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    match hex.len() {
        // #RGB: each digit doubles, e.g. #f80 → (0xff, 0x88, 0x00).
        3 => {
            let nibble = |range: std::ops::Range<usize>| channel(range).map(|v| v << 4 | v);
            Ok((nibble(0..1)?, nibble(1..2)?, nibble(2..3)?))
        }
        6 => Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(invalid()),
    }
}
