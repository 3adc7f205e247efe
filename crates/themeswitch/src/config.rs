//! Names and glyphs the controller reads and writes.
//!
//! The defaults match the Bootstrap convention of a `data-bs-theme`
//! attribute on the root element, a `theme` key in local storage and a
//! `themeToggle` button. Hosts with other conventions can load a
//! [`ThemeConfig`] from JSON or YAML:
//!
//! ```yaml
//! attribute: data-theme
//! storage_key: site-theme
//! ```
//!
//! Fields that are left out keep their defaults.

use serde::{Deserialize, Serialize};

/// Root element attribute carrying the active theme.
pub const DEFAULT_ATTRIBUTE: &str = "data-bs-theme";

/// Storage key for the persisted preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Identifier of the optional toggle button.
pub const DEFAULT_TOGGLE_ID: &str = "themeToggle";

/// Label shown while dark is active (offers a switch to light).
pub const DEFAULT_DARK_GLYPH: &str = "\u{2600}";

/// Label shown while light is active (offers a switch to dark).
pub const DEFAULT_LIGHT_GLYPH: &str = "\u{1F319}";

/// Error returned when a configuration document cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid JSON theme config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML theme config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("theme config field '{field}' must not be empty")]
    EmptyField { field: &'static str },
}

/// Attribute, key, element and label names used by
/// [`ThemeController`](crate::ThemeController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub attribute: String,
    pub storage_key: String,
    pub toggle_id: String,
    pub dark_glyph: String,
    pub light_glyph: String,
}

impl ThemeConfig {
    /// Parses a config from a JSON object.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a config from a YAML mapping.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the config as YAML, every field included.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Rejects empty names. Glyphs may be empty (the label is then cleared).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("attribute", &self.attribute),
            ("storage_key", &self.storage_key),
            ("toggle_id", &self.toggle_id),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        Ok(())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            dark_glyph: DEFAULT_DARK_GLYPH.to_string(),
            light_glyph: DEFAULT_LIGHT_GLYPH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let config = ThemeConfig::default();
        assert_eq!(config.attribute, "data-bs-theme");
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.toggle_id, "themeToggle");
        assert_eq!(config.dark_glyph, "☀");
        assert_eq!(config.light_glyph, "🌙");
    }

    #[test]
    fn test_json_partial_keeps_defaults() {
        let config = ThemeConfig::from_json_str(r#"{"storage_key": "site-theme"}"#).unwrap();
        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.attribute, DEFAULT_ATTRIBUTE);
    }

    #[test]
    fn test_yaml_overrides() {
        let config = ThemeConfig::from_yaml_str("attribute: data-theme\ntoggle_id: modeButton\n")
            .unwrap();
        assert_eq!(config.attribute, "data-theme");
        assert_eq!(config.toggle_id, "modeButton");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ThemeConfig::from_json_str(r#"{"colour": "red"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = ThemeConfig::from_yaml_str("storage_key: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("storage_key"));
    }

    #[test]
    fn test_yaml_output_reloads() {
        let config = ThemeConfig {
            storage_key: "site-theme".to_string(),
            ..ThemeConfig::default()
        };
        let yaml = config.to_yaml_string().unwrap();
        assert!(yaml.contains("storage_key: site-theme"));
        assert!(yaml.contains("attribute: data-bs-theme"));
        assert_eq!(ThemeConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_empty_glyph_allowed() {
        let config = ThemeConfig::from_json_str(r#"{"dark_glyph": ""}"#).unwrap();
        assert!(config.dark_glyph.is_empty());
    }
}
