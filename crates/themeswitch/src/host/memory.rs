//! In-memory collaborators.
//!
//! Both fakes count writes so callers can tell "never written" apart from
//! "written with the same value".

use std::collections::HashMap;

use super::{Document, PreferenceStore};

/// A document with a root element and a set of text elements.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    attributes: HashMap<String, String>,
    elements: HashMap<String, String>,
    attribute_writes: usize,
}

impl MemoryDocument {
    /// Creates a document with no attributes and no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element with empty text, returning the document for chaining.
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string(), String::new());
        self
    }

    /// Presets a root attribute without counting it as a write.
    pub fn with_root_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Text of an element, or `None` if it does not exist.
    pub fn element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    /// Number of `set_root_attribute` calls so far.
    pub fn attribute_writes(&self) -> usize {
        self.attribute_writes
    }
}

impl Document for MemoryDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.attribute_writes += 1;
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_element_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(current) => {
                text.clone_into(current);
                true
            }
            None => false,
        }
    }
}

/// A key-value store that lives as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presets an entry without counting it as a write.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
    }
}
