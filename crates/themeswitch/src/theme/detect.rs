//! Sources for the user's OS-level dark-mode preference.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::mode::ColorMode;

/// Answers whether the user prefers a dark color scheme.
///
/// Consulted by the controller only when no theme has been persisted.
/// Implementations must not fail: an unknown preference is `false`.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

impl<F> ColorSchemeQuery for F
where
    F: Fn() -> bool,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// Reads the desktop color scheme through the `dark-light` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl SystemColorScheme {
    pub fn new() -> Self {
        Self
    }

    /// Current OS color mode.
    pub fn detect(&self) -> ColorMode {
        match detect_os_theme() {
            OsThemeMode::Dark => ColorMode::Dark,
            OsThemeMode::Light => ColorMode::Light,
        }
    }
}

impl ColorSchemeQuery for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        let mode = self.detect();
        tracing::debug!(%mode, "detected OS color scheme");
        mode == ColorMode::Dark
    }
}

/// A preference that never changes. Useful for tests and for forcing a
/// mode from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColorScheme(pub ColorMode);

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0 == ColorMode::Dark
    }
}
