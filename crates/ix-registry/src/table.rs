//! A bidirectional index ↔ handle table.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{RegistryError, RegistryResult};

/// Maps authored array indices to shared handles, and back.
///
/// Forward lookup is a hash probe.  Reverse lookup compares handle identity
/// (`Arc::ptr_eq`), not value equality — two distinct instances with equal
/// state are distinct entries.  Tables are scene-sized (tens of entries), so
/// the reverse scan is linear without ceremony.
pub struct CapabilityTable<T: ?Sized> {
    entries: FxHashMap<u32, Arc<T>>,
}

impl<T: ?Sized> Default for CapabilityTable<T> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<T: ?Sized> CapabilityTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle at an index.  Indices are assigned by the authoring
    /// data and must be unique; a duplicate is a load-time error.
    pub fn register(&mut self, index: u32, handle: Arc<T>) -> RegistryResult<()> {
        if self.entries.contains_key(&index) {
            return Err(RegistryError::DuplicateIndex { index });
        }
        self.entries.insert(index, handle);
        Ok(())
    }

    /// Resolve an index to its handle.
    pub fn resolve(&self, index: u32) -> RegistryResult<Arc<T>> {
        self.entries
            .get(&index)
            .cloned()
            .ok_or(RegistryError::NotFound { index })
    }

    /// Find the index a handle was registered under.
    pub fn reverse_resolve(&self, handle: &Arc<T>) -> RegistryResult<u32> {
        self.entries
            .iter()
            .find(|(_, h)| Arc::ptr_eq(h, handle))
            .map(|(&index, _)| index)
            .ok_or(RegistryError::Unregistered)
    }

    pub fn contains(&self, index: u32) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(index, handle)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Arc<T>)> {
        self.entries.iter().map(|(&index, handle)| (index, handle))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
