//! Collaborators the controller writes through.
//!
//! The controller never touches a browser or a file directly. It talks to a
//! [`Document`] for the root attribute and the toggle label, and to a
//! [`PreferenceStore`] for the persisted choice. The [`memory`] fakes back
//! both with hash maps.

pub mod memory;

pub use memory::{MemoryDocument, MemoryStore};

/// The page the theme is applied to.
pub trait Document {
    /// Reads an attribute of the root element. Missing means `None`.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Sets an attribute of the root element.
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Replaces the text of the element with the given id.
    ///
    /// Returns `false` when no such element exists; nothing is written then.
    fn set_element_text(&mut self, id: &str, text: &str) -> bool;
}

/// Durable key-value storage for the user's choice.
pub trait PreferenceStore {
    /// Reads a value. Missing keys and unreadable storage are `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value. Failures are the implementation's to log.
    fn set(&mut self, key: &str, value: &str);
}

impl<D: Document + ?Sized> Document for &mut D {
    fn root_attribute(&self, name: &str) -> Option<String> {
        (**self).root_attribute(name)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        (**self).set_root_attribute(name, value)
    }

    fn set_element_text(&mut self, id: &str, text: &str) -> bool {
        (**self).set_element_text(id, text)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}
