//! A collection of models which describe markers placed on the map.

#[cfg(test)]
#[path = "../../tests/unit/models/marker_test.rs"]
mod marker_test;

use serde::{Deserialize, Serialize};
use std::fmt;

mod label;
pub use self::label::*;

/// Represents a geocoordinate as longitude and latitude pair.
///
/// Longitude is expected in `[-180, 180]` and latitude in `[-90, 90]`, but the range is not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Longitude.
    pub lng: f64,
    /// Latitude.
    pub lat: f64,
}

impl Coordinates {
    /// Creates a new instance of `Coordinates`.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Returns true if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    /// Returns coordinates as `(lng, lat)` tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lng, self.lat)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lng, self.lat)
    }
}

/// An opaque marker identity assigned at creation time.
///
/// Unlike a label, it never changes during marker lifetime and is never reused by a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(u64);

impl MarkerId {
    /// Creates a new marker id from the raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns raw value of the id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point marker placed by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// A stable marker identity.
    pub id: MarkerId,
    /// Marker location.
    pub coordinates: Coordinates,
    /// A label derived from marker position in the collection.
    pub label: Label,
}
