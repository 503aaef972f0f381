#[cfg(test)]
#[path = "../../tests/unit/store/shared_test.rs"]
mod shared_test;

use super::MarkerStore;
use crate::models::{LabelPolicy, Marker};
use std::sync::{Arc, PoisonError, RwLock};

/// A marker store shared between the map surface, which mutates it, and the components which only
/// read it. The lock is the only point where access to the collection is serialized.
#[derive(Clone, Default)]
pub struct SharedMarkerStore {
    inner: Arc<RwLock<MarkerStore>>,
}

impl SharedMarkerStore {
    /// Creates a new shared store from the given one.
    pub fn new(store: MarkerStore) -> Self {
        Self { inner: Arc::new(RwLock::new(store)) }
    }

    /// Creates a new empty shared store with given label policy.
    pub fn with_policy(policy: LabelPolicy) -> Self {
        Self::new(MarkerStore::new(policy))
    }

    /// Returns a copy of current collection.
    pub fn snapshot(&self) -> Vec<Marker> {
        self.read(|store| store.snapshot())
    }

    /// Returns a read only view on the store.
    pub fn reader(&self) -> MarkerStoreReader {
        MarkerStoreReader { inner: self.inner.clone() }
    }

    /// Runs an action with read access to the store.
    pub fn read<R>(&self, action: impl FnOnce(&MarkerStore) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        action(&guard)
    }

    /// Runs an action with write access to the store. Only the map surface mutates markers.
    pub(crate) fn write<R>(&self, action: impl FnOnce(&mut MarkerStore) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        action(&mut guard)
    }
}

/// A read only view on the shared marker store.
#[derive(Clone)]
pub struct MarkerStoreReader {
    inner: Arc<RwLock<MarkerStore>>,
}

impl MarkerStoreReader {
    /// Returns a copy of current collection.
    pub fn snapshot(&self) -> Vec<Marker> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).snapshot()
    }

    /// Returns amount of markers.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if there are no markers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of marker which currently has given label.
    pub fn find_by_label(&self, label: &str) -> Option<Marker> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).find_by_label(label).cloned()
    }
}
