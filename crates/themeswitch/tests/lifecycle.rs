//! Page-load and toggle behavior against in-memory and file-backed hosts.

use proptest::prelude::*;
use tempfile::TempDir;
use themeswitch::{
    ColorMode, Document, FileStore, FixedColorScheme, InitialTheme, MemoryDocument, MemoryStore,
    PreferenceStore, ThemeController,
};

const ATTR: &str = "data-bs-theme";
const BUTTON: &str = "themeToggle";

fn page() -> MemoryDocument {
    MemoryDocument::new().with_element(BUTTON)
}

#[test]
fn test_stored_value_is_restored_on_load() {
    for stored in ["light", "dark"] {
        for os in [ColorMode::Light, ColorMode::Dark] {
            let store = MemoryStore::new().with_entry("theme", stored);
            let mut ctl = ThemeController::new(page(), store, FixedColorScheme(os));
            ctl.initialize();
            assert_eq!(ctl.current_theme().as_deref(), Some(stored));
        }
    }
}

#[test]
fn test_os_dark_applies_dark_without_persisting() {
    let mut ctl = ThemeController::new(page(), MemoryStore::new(), || true);
    assert_eq!(ctl.initialize(), InitialTheme::System);
    assert_eq!(ctl.current_theme().as_deref(), Some("dark"));
    assert_eq!(ctl.document().element_text(BUTTON), Some("☀"));
    assert_eq!(ctl.stored_theme(), None);
}

#[test]
fn test_os_light_leaves_host_default() {
    let document = page().with_root_attribute(ATTR, "host-default");
    let mut ctl = ThemeController::new(document, MemoryStore::new(), || false);
    assert_eq!(ctl.initialize(), InitialTheme::Default);
    assert_eq!(ctl.current_theme().as_deref(), Some("host-default"));
    assert_eq!(ctl.document().attribute_writes(), 0);
}

#[test]
fn test_load_then_click() {
    let mut ctl = ThemeController::new(page(), MemoryStore::new(), || true);
    ctl.initialize();

    assert_eq!(ctl.toggle_theme(), ColorMode::Light);
    assert_eq!(ctl.stored_theme().as_deref(), Some("light"));
    assert_eq!(ctl.document().element_text(BUTTON), Some("🌙"));

    assert_eq!(ctl.toggle_theme(), ColorMode::Dark);
    assert_eq!(ctl.stored_theme().as_deref(), Some("dark"));
    assert_eq!(ctl.document().element_text(BUTTON), Some("☀"));
}

#[test]
fn test_choice_survives_reload_through_file_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let store = FileStore::open(&path).unwrap();
        let mut ctl = ThemeController::new(page(), store, || false);
        assert_eq!(ctl.initialize(), InitialTheme::Default);
        ctl.toggle_theme();
    }

    let store = FileStore::open(&path).unwrap();
    let mut ctl = ThemeController::new(page(), store, || false);
    assert_eq!(ctl.initialize(), InitialTheme::Stored("dark".into()));
    assert_eq!(ctl.document().element_text(BUTTON), Some("☀"));
}

proptest! {
    #[test]
    fn prop_double_toggle_restores_state(start in prop::sample::select(vec!["light", "dark"])) {
        let mut document = page().with_root_attribute(ATTR, start);
        let mut store = MemoryStore::new().with_entry("theme", start);
        {
            let mut ctl = ThemeController::new(&mut document, &mut store, || false);
            ctl.toggle_theme();
            ctl.toggle_theme();
        }
        let attribute = document.root_attribute(ATTR);
        let stored = store.get("theme");
        prop_assert_eq!(attribute.as_deref(), Some(start));
        prop_assert_eq!(stored.as_deref(), Some(start));
    }

    #[test]
    fn prop_any_non_dark_attribute_toggles_to_dark(current in "[a-zA-Z-]{0,12}") {
        prop_assume!(current != "dark");
        let document = page().with_root_attribute(ATTR, &current);
        let mut ctl = ThemeController::new(document, MemoryStore::new(), || false);
        prop_assert_eq!(ctl.toggle_theme(), ColorMode::Dark);
        let stored = ctl.stored_theme();
        prop_assert_eq!(stored.as_deref(), Some("dark"));
        prop_assert_eq!(ctl.document().element_text(BUTTON), Some("☀"));
    }

    #[test]
    fn prop_stored_value_passes_through(stored in "[a-z]{1,12}") {
        let store = MemoryStore::new().with_entry("theme", &stored);
        let mut ctl = ThemeController::new(MemoryDocument::new(), store, || true);
        ctl.initialize();
        prop_assert_eq!(ctl.current_theme(), Some(stored));
    }
}
