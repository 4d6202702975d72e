//! Map-backed embedded resource store.

use matisse_interface::ResourceStore;
use std::collections::HashMap;

/// In-memory [`ResourceStore`] for images bundled with the application.
///
/// # Examples
///
/// ```
/// use matisse::{ResourceStore, StaticResources};
///
/// let mut resources = StaticResources::new();
/// resources.insert(42, vec![0x89, 0x50, 0x4E, 0x47]);
///
/// assert!(resources.load(42).is_some());
/// assert!(resources.load(7).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticResources {
    entries: HashMap<u32, Vec<u8>>,
}

impl StaticResources {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the encoded bytes for a resource id.
    ///
    /// Id zero is reserved to mean "no resource" and will never be looked
    /// up by the resolver.
    pub fn insert(&mut self, id: u32, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(id, bytes.into());
    }
}

impl From<HashMap<u32, Vec<u8>>> for StaticResources {
    fn from(entries: HashMap<u32, Vec<u8>>) -> Self {
        Self { entries }
    }
}

impl ResourceStore for StaticResources {
    fn load(&self, id: u32) -> Option<Vec<u8>> {
        self.entries.get(&id).cloned()
    }
}
