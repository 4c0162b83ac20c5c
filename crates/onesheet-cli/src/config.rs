//! Versioned JSON config in the platform config directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use onesheet_core::models::customization::FontStyle;
use onesheet_core::models::request::Tone;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Which text-generation backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Live Bedrock call; requires AWS credentials.
    Live,
    /// Deterministic canned output; no credentials needed.
    Fixture,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnesheetConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub backend: BackendKind,
    pub region: String,
    /// Bedrock inference profile ID used by the live backend.
    pub model_id: String,
    pub default_tone: Tone,
    pub default_color: String,
    pub default_font: FontStyle,
    pub created_at: jiff::Timestamp,
}

impl Default for OnesheetConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            backend: BackendKind::Fixture,
            region: "us-east-1".to_string(),
            model_id: "us.anthropic.claude-sonnet-4-20250514-v1:0".to_string(),
            default_tone: Tone::Marketing,
            default_color: "#0ea5e9".to_string(),
            default_font: FontStyle::Inter,
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.onesheet.cli"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<OnesheetConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &std::path::Path) -> eyre::Result<OnesheetConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so migrations can run before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: OnesheetConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

pub fn save_config(config: &OnesheetConfig) -> eyre::Result<()> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;
    save_config_to(&dir.join("config.json"), config)
}

pub fn save_config_to(path: &std::path::Path, config: &OnesheetConfig) -> eyre::Result<()> {
    let contents = serde_json::to_string_pretty(config)?;
    std::fs::write(path, contents)
        .map_err(|e| eyre::eyre!("failed to write config at {}: {e}", path.display()))?;
    Ok(())
}

/// Bring an on-disk config up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    if from_version < 1 {
        // v0 configs predate backend selection; they were fixture-only.
        let object = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        object
            .entry("backend")
            .or_insert_with(|| serde_json::json!("fixture"));
        object.insert("config_version".to_string(), serde_json::json!(1));
    }

    Ok(json)
}
