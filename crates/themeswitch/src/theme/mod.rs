//! Color modes and OS color-scheme detection.
//!
//! This module provides:
//!
//! - [`ColorMode`]: Light or dark color mode enum
//! - [`ColorSchemeQuery`]: Source of the user's dark-mode preference
//! - [`SystemColorScheme`]: Asks the operating system through `dark-light`
//! - [`FixedColorScheme`]: Always answers with one mode
//!
//! Any `Fn() -> bool` closure is also a [`ColorSchemeQuery`], which keeps
//! test setups short.

mod detect;
mod mode;

pub use detect::{ColorSchemeQuery, FixedColorScheme, SystemColorScheme};
pub use mode::{ColorMode, ParseColorModeError};
