//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub grouper: GrouperSettings,
    pub expansion: ExpansionSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrouperSettings {
    /// Comments learned before any history, e.g. recurring activities.
    #[serde(default)]
    pub baseline: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionSettings {
    pub max_results: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.expansion.max_results == 0 {
        return Err(SettingsError::InvalidValue {
            field: "expansion.max_results".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if let Some(i) = s.grouper.baseline.iter().position(|c| c.trim().is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: format!("grouper.baseline[{i}]"),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!(s.grouper.baseline.is_empty());
        assert_eq!(s.expansion.max_results, 20);
    }

    #[test]
    fn global_settings_use_defaults() {
        assert_eq!(settings().expansion.max_results, 20);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[grouper]
baseline = ["meeting", "support ticket"]

[expansion]
max_results = 5
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.grouper.baseline, vec!["meeting", "support ticket"]);
        assert_eq!(s.expansion.max_results, 5);
    }

    #[test]
    fn baseline_may_be_omitted() {
        let toml = r#"
[grouper]

[expansion]
max_results = 5
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.grouper.baseline.is_empty());
    }

    #[test]
    fn error_zero_max_results() {
        let toml = r#"
[grouper]
baseline = []

[expansion]
max_results = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("expansion.max_results"));
    }

    #[test]
    fn error_blank_baseline_entry() {
        let toml = r#"
[grouper]
baseline = ["meeting", "   "]

[expansion]
max_results = 5
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("grouper.baseline[1]"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[grouper]
baseline = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
