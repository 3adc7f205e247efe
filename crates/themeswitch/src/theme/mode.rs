//! The two recognised theme values.

use std::fmt;
use std::str::FromStr;

use crate::config::ThemeConfig;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// The string written to the root attribute and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Interprets an arbitrary theme string.
    ///
    /// Only exactly `"dark"` is dark; everything else, including other
    /// casings and unknown names, reads as light.
    pub fn from_theme(theme: &str) -> Self {
        if theme == "dark" {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Label for the toggle button while this mode is active.
    pub fn glyph(self, config: &ThemeConfig) -> &str {
        match self {
            ColorMode::Dark => &config.dark_glyph,
            ColorMode::Light => &config.light_glyph,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color mode '{0}' (expected 'light' or 'dark')")]
pub struct ParseColorModeError(pub String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(ParseColorModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips() {
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
    }

    #[test]
    fn test_from_theme_only_exact_dark() {
        assert_eq!(ColorMode::from_theme("dark"), ColorMode::Dark);
        assert_eq!(ColorMode::from_theme("light"), ColorMode::Light);
        assert_eq!(ColorMode::from_theme("Dark"), ColorMode::Light);
        assert_eq!(ColorMode::from_theme(""), ColorMode::Light);
        assert_eq!(ColorMode::from_theme("solarized"), ColorMode::Light);
    }

    #[test]
    fn test_glyphs() {
        let config = ThemeConfig::default();
        assert_eq!(ColorMode::Dark.glyph(&config), "☀");
        assert_eq!(ColorMode::Light.glyph(&config), "🌙");
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!("dark".parse::<ColorMode>(), Ok(ColorMode::Dark));
        assert_eq!("light".parse::<ColorMode>(), Ok(ColorMode::Light));
        let err = "sepia".parse::<ColorMode>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ColorMode::Dark.to_string(), "dark");
        assert_eq!(ColorMode::Light.to_string(), "light");
    }
}
