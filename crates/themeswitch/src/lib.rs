//! # Themeswitch - light/dark theme toggling
//!
//! `themeswitch` applies a light or dark theme to a document, remembers the
//! user's choice and falls back to the OS color scheme when nothing has been
//! remembered yet.
//!
//! ## Core Concepts
//!
//! - [`ThemeController`]: Applies, initializes and toggles the theme
//! - [`Document`] / [`PreferenceStore`]: Where the theme is shown and kept
//! - [`ColorSchemeQuery`]: The OS dark-mode preference
//! - [`ThemeConfig`]: Attribute, storage key, button id and glyphs
//!
//! ## Quick Start
//!
//! ```rust
//! use themeswitch::{InitialTheme, MemoryDocument, MemoryStore, ThemeController};
//!
//! let store = MemoryStore::new().with_entry("theme", "dark");
//! let mut controller = ThemeController::new(MemoryDocument::new(), store, || false);
//!
//! assert_eq!(controller.initialize(), InitialTheme::Stored("dark".into()));
//! assert_eq!(controller.current_theme().as_deref(), Some("dark"));
//! ```
//!
//! ## Precedence
//!
//! On load a persisted value wins, then an OS preference for dark. When
//! neither applies nothing is written and the host's default stands.
//! Toggling always persists and applies the opposite of the current root
//! attribute, reading anything that is not exactly `dark` as light.
//!
//! ## Adapters
//!
//! - [`host::memory`]: In-memory document and store, for tests and embedding
//! - [`FileStore`]: JSON file on disk
//! - [`SystemColorScheme`]: Desktop preference via `dark-light`
//! - `web` (feature `web`): `web-sys` document, `localStorage` and
//!   `matchMedia`, plus a `toggleTheme` export for click handlers

pub mod config;
mod controller;
pub mod host;
pub mod store;
pub mod theme;

#[cfg(feature = "web")]
pub mod web;

pub use config::{ConfigError, ThemeConfig};
pub use controller::{InitialTheme, ThemeController};
pub use host::{Document, MemoryDocument, MemoryStore, PreferenceStore};
pub use store::{FileStore, StoreError};
pub use theme::{
    ColorMode, ColorSchemeQuery, FixedColorScheme, ParseColorModeError, SystemColorScheme,
};
