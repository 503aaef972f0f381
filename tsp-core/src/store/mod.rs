//! A marker store keeps the ordered collection of markers and is the single source of truth
//! for labels.

#[cfg(test)]
#[path = "../../tests/unit/store/store_test.rs"]
mod store_test;

use crate::models::{Coordinates, LabelPolicy, Marker, MarkerId, label_for, relabel_all};
use rustc_hash::FxHashSet;
use std::fmt;

mod shared;
pub use self::shared::*;

/// An error returned by store mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Label policy does not allow more markers.
    CapacityExceeded {
        /// Max amount of markers.
        capacity: usize,
    },
    /// The same marker id is used more than once.
    DuplicateId(MarkerId),
    /// There are no free marker ids left.
    IdsExhausted,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::CapacityExceeded { capacity } => {
                write!(f, "cannot place more than {capacity} markers with bounded labels")
            }
            StoreError::DuplicateId(id) => write!(f, "marker id {id} is used more than once"),
            StoreError::IdsExhausted => write!(f, "no marker ids are left"),
        }
    }
}

impl std::error::Error for StoreError {}

/// An ordered collection of markers.
///
/// Insertion order is significant: it determines the label of every marker. After each mutation
/// the label of every marker equals the label derived from its position.
#[derive(Clone, Debug)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    /// Next id to assign, none when all ids are used up.
    next_id: Option<u64>,
    policy: LabelPolicy,
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new(LabelPolicy::default())
    }
}

impl MarkerStore {
    /// Creates a new empty store with given label policy.
    pub fn new(policy: LabelPolicy) -> Self {
        Self { markers: Vec::new(), next_id: Some(0), policy }
    }

    /// Returns label policy used by the store.
    pub fn policy(&self) -> LabelPolicy {
        self.policy
    }

    /// Appends a new marker at the end of collection. Existing labels are not touched.
    pub fn add(&mut self, coordinates: Coordinates) -> Result<Marker, StoreError> {
        self.check_capacity(self.markers.len() + 1)?;

        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;

        let marker = Marker { id: MarkerId::new(id), coordinates, label: label_for(self.markers.len()) };
        self.next_id = id.checked_add(1);
        self.markers.push(marker.clone());

        Ok(marker)
    }

    /// Removes marker with the given id and relabels the remaining ones.
    /// Returns the removed marker or none if there was no marker with such id.
    pub fn remove(&mut self, id: MarkerId) -> Option<Marker> {
        let position = self.markers.iter().position(|marker| marker.id == id)?;
        let removed = self.markers.remove(position);

        self.markers = relabel_all(std::mem::take(&mut self.markers));

        Some(removed)
    }

    /// Replaces the whole collection. Labels are derived from the new order, so labels of passed
    /// markers are ignored.
    pub fn replace_all(&mut self, markers: Vec<Marker>) -> Result<(), StoreError> {
        self.check_capacity(markers.len())?;

        let mut ids = FxHashSet::default();
        if let Some(marker) = markers.iter().find(|marker| !ids.insert(marker.id)) {
            return Err(StoreError::DuplicateId(marker.id));
        }

        if let Some(max_id) = markers.iter().map(|marker| marker.id.value()).max() {
            self.next_id =
                self.next_id.and_then(|next_id| if next_id > max_id { Some(next_id) } else { max_id.checked_add(1) });
        }
        self.markers = relabel_all(markers);

        Ok(())
    }

    /// Returns a copy of current collection.
    pub fn snapshot(&self) -> Vec<Marker> {
        self.markers.clone()
    }

    /// Returns current collection.
    pub fn markers(&self) -> &[Marker] {
        self.markers.as_slice()
    }

    /// Returns marker with given id.
    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    /// Returns marker which currently has given label.
    pub fn find_by_label(&self, label: &str) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.label == label)
    }

    /// Returns amount of markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns true if there are no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    fn check_capacity(&self, required: usize) -> Result<(), StoreError> {
        match self.policy.capacity() {
            Some(capacity) if required > capacity => Err(StoreError::CapacityExceeded { capacity }),
            _ => Ok(()),
        }
    }
}
