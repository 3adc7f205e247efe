//! Applying, initializing and toggling the active theme.

use crate::config::ThemeConfig;
use crate::host::{Document, PreferenceStore};
use crate::theme::{ColorMode, ColorSchemeQuery};

/// Where the theme chosen by [`ThemeController::initialize`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialTheme {
    /// A persisted value, applied verbatim.
    Stored(String),
    /// No persisted value; the OS prefers dark, so `dark` was applied.
    System,
    /// Nothing was applied. The host's default presentation stands.
    Default,
}

impl InitialTheme {
    /// The theme that was applied, if any.
    pub fn applied(&self) -> Option<&str> {
        match self {
            InitialTheme::Stored(theme) => Some(theme.as_str()),
            InitialTheme::System => Some(ColorMode::Dark.as_str()),
            InitialTheme::Default => None,
        }
    }
}

/// Determines and applies the active theme.
///
/// The controller owns its three collaborators. Pass `&mut` references to
/// keep access to them from the outside, or recover them with
/// [`into_parts`](Self::into_parts).
///
/// # Example
///
/// ```rust
/// use themeswitch::{FixedColorScheme, ColorMode, MemoryDocument, MemoryStore, ThemeController};
///
/// let mut controller = ThemeController::new(
///     MemoryDocument::new().with_element("themeToggle"),
///     MemoryStore::new(),
///     FixedColorScheme(ColorMode::Dark),
/// );
///
/// controller.initialize();
/// assert_eq!(controller.current_mode(), ColorMode::Dark);
///
/// controller.toggle_theme();
/// assert_eq!(controller.current_theme().as_deref(), Some("light"));
/// ```
#[derive(Debug)]
pub struct ThemeController<D, S, Q> {
    document: D,
    store: S,
    scheme: Q,
    config: ThemeConfig,
}

impl<D, S, Q> ThemeController<D, S, Q>
where
    D: Document,
    S: PreferenceStore,
    Q: ColorSchemeQuery,
{
    /// Creates a controller with the default attribute, key and glyphs.
    pub fn new(document: D, store: S, scheme: Q) -> Self {
        Self::with_config(document, store, scheme, ThemeConfig::default())
    }

    /// Creates a controller using custom names.
    pub fn with_config(document: D, store: S, scheme: Q, config: ThemeConfig) -> Self {
        Self {
            document,
            store,
            scheme,
            config,
        }
    }

    /// Picks the initial theme on page load.
    ///
    /// A persisted value wins and is applied as-is, even if it is not
    /// `light` or `dark`. Without one, `dark` is applied when the OS
    /// prefers it. Otherwise nothing is written, not even `light`.
    pub fn initialize(&mut self) -> InitialTheme {
        let stored = self
            .store
            .get(&self.config.storage_key)
            .filter(|theme| !theme.is_empty());

        let initial = match stored {
            Some(theme) => {
                self.apply_theme(&theme);
                InitialTheme::Stored(theme)
            }
            None if self.scheme.prefers_dark() => {
                self.apply_theme(ColorMode::Dark.as_str());
                InitialTheme::System
            }
            None => InitialTheme::Default,
        };
        tracing::debug!(?initial, "theme initialized");
        initial
    }

    /// Sets the root attribute to `theme` and relabels the toggle button.
    ///
    /// The button shows the dark glyph only for exactly `dark`. A missing
    /// button is not an error.
    pub fn apply_theme(&mut self, theme: &str) {
        self.document.set_root_attribute(&self.config.attribute, theme);

        let glyph = ColorMode::from_theme(theme).glyph(&self.config);
        let labelled = self.document.set_element_text(&self.config.toggle_id, glyph);
        tracing::debug!(theme, labelled, "theme applied");
    }

    /// Flips between light and dark, persists the result and applies it.
    ///
    /// Any current attribute other than `dark`, including none at all,
    /// counts as light.
    pub fn toggle_theme(&mut self) -> ColorMode {
        let next = self.current_mode().toggled();
        self.store.set(&self.config.storage_key, next.as_str());
        self.apply_theme(next.as_str());
        tracing::debug!(theme = %next, "theme toggled");
        next
    }

    /// Persists `theme` verbatim and applies it.
    pub fn set_theme(&mut self, theme: &str) {
        self.store.set(&self.config.storage_key, theme);
        self.apply_theme(theme);
    }

    /// Raw value of the root attribute.
    pub fn current_theme(&self) -> Option<String> {
        self.document.root_attribute(&self.config.attribute)
    }

    /// The root attribute read as a mode.
    pub fn current_mode(&self) -> ColorMode {
        self.current_theme()
            .as_deref()
            .map_or(ColorMode::Light, ColorMode::from_theme)
    }

    /// The persisted preference, if any.
    pub fn stored_theme(&self) -> Option<String> {
        self.store.get(&self.config.storage_key)
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the collaborators.
    pub fn into_parts(self) -> (D, S, Q) {
        (self.document, self.store, self.scheme)
    }
}
