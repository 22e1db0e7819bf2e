//! Game attribute storage
//!
//! The host framework keeps persistent settings as named attributes.
//! Only read access is needed here.

use std::collections::HashMap;

/// Attribute holding the ntfy topic
pub const ATTR_NTFY_TOPIC: &str = "NtfyTopic";
/// Attribute holding the ntfy server base URL
pub const ATTR_NTFY_SERVER: &str = "NtfyServer";
/// Attribute holding the game title
pub const ATTR_APPLICATION_NAME: &str = "Application Name";

/// Read access to game attributes
///
/// A missing attribute reads as the empty string.
pub trait AttributeStore: Send + Sync {
    fn get_attribute(&self, name: &str) -> String;
}

/// In-memory attribute store
#[derive(Debug, Clone, Default)]
pub struct MemoryAttributeStore {
    values: HashMap<String, String>,
}

impl MemoryAttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for MemoryAttributeStore {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl AttributeStore for MemoryAttributeStore {
    fn get_attribute(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }
}

impl<S: AttributeStore + ?Sized> AttributeStore for std::sync::Arc<S> {
    fn get_attribute(&self, name: &str) -> String {
        (**self).get_attribute(name)
    }
}
