use onesheet_cli::config::{BackendKind, OnesheetConfig, load_config_from, save_config_to};
use onesheet_core::models::customization::FontStyle;
use onesheet_core::models::request::Tone;

#[test]
fn config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = OnesheetConfig {
        backend: BackendKind::Live,
        region: "eu-west-1".to_string(),
        default_tone: Tone::Sales,
        default_color: "#123456".to_string(),
        default_font: FontStyle::Georgia,
        ..OnesheetConfig::default()
    };
    save_config_to(&path, &config).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.backend, BackendKind::Live);
    assert_eq!(loaded.region, "eu-west-1");
    assert_eq!(loaded.default_tone, Tone::Sales);
    assert_eq!(loaded.default_color, "#123456");
    assert_eq!(loaded.default_font, FontStyle::Georgia);
}

#[test]
fn pre_versioned_config_migrates_to_fixture_backend() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    // A v0 config: no config_version, no backend field.
    let v0 = serde_json::json!({
        "region": "us-east-1",
        "model_id": "us.anthropic.claude-sonnet-4-20250514-v1:0",
        "default_tone": "marketing",
        "default_color": "#0ea5e9",
        "default_font": "inter",
        "created_at": "2025-01-01T00:00:00Z",
    });
    std::fs::write(&path, serde_json::to_string_pretty(&v0).unwrap()).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.backend, BackendKind::Fixture);
}

#[test]
fn future_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let future = serde_json::json!({
        "config_version": 99,
        "backend": "fixture",
        "region": "us-east-1",
        "model_id": "m",
        "default_tone": "marketing",
        "default_color": "#0ea5e9",
        "default_font": "inter",
        "created_at": "2025-01-01T00:00:00Z",
    });
    std::fs::write(&path, serde_json::to_string(&future).unwrap()).unwrap();

    assert!(load_config_from(&path).is_err());
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config_from(&dir.path().join("absent.json")).is_err());
}
