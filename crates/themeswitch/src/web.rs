//! Browser bindings through `web-sys`.
//!
//! [`install`] runs [`ThemeController::initialize`] once the DOM is parsed,
//! and [`toggle_theme`] is exported to JavaScript as `toggleTheme` so a
//! button can call it directly:
//!
//! ```html
//! <button id="themeToggle" onclick="toggleTheme()"></button>
//! ```
//!
//! Every adapter looks the window up on each call and treats a missing
//! window, document, storage or exception as absent.

use wasm_bindgen::prelude::*;

use crate::controller::ThemeController;
use crate::host::{Document, PreferenceStore};
use crate::theme::ColorSchemeQuery;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// The live page.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDocument;

impl Document for WebDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        document()
            .and_then(|doc| doc.document_element())
            .and_then(|root| root.get_attribute(name))
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        let Some(root) = document().and_then(|doc| doc.document_element()) else {
            tracing::warn!("no document element to apply the theme to");
            return;
        };
        if let Err(err) = root.set_attribute(name, value) {
            tracing::warn!(error = ?err, name, "failed to set root attribute");
        }
    }

    fn set_element_text(&mut self, id: &str, text: &str) -> bool {
        match document().and_then(|doc| doc.get_element_by_id(id)) {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        let result = Self::storage()
            .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
            .and_then(|s| s.set_item(key, value));
        if let Err(err) = result {
            tracing::warn!(error = ?err, key, "failed to persist preference");
        }
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryScheme;

impl ColorSchemeQuery for MediaQueryScheme {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .is_some_and(|list| list.matches())
    }
}

/// A controller wired to the live page with the default names.
pub fn controller() -> ThemeController<WebDocument, LocalStorage, MediaQueryScheme> {
    ThemeController::new(WebDocument, LocalStorage, MediaQueryScheme)
}

/// Flips the page theme. Exported to JavaScript as `toggleTheme`.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    controller().toggle_theme();
}

/// Initializes the theme when `DOMContentLoaded` fires.
///
/// Call once from the module's start function, before the DOM is parsed.
#[wasm_bindgen(js_name = installTheme)]
pub fn install() {
    let Some(doc) = document() else {
        tracing::warn!("no document; theme not installed");
        return;
    };
    let on_ready = Closure::<dyn FnMut()>::new(|| {
        controller().initialize();
    });
    if let Err(err) =
        doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        tracing::warn!(error = ?err, "failed to listen for DOMContentLoaded");
    }
    on_ready.forget();
}
