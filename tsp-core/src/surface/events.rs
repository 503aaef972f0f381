use crate::models::{Coordinates, MarkerId};

/// A map center used when the map is created.
pub const INITIAL_CENTER: Coordinates = Coordinates { lng: 74.21531, lat: 31.40021 };

/// A zoom level used when the map is created.
pub const INITIAL_ZOOM: f64 = 12.;

/// An event consumed from the map collaborator or produced by marker affordances.
#[derive(Clone, Debug, PartialEq)]
pub enum MapEvent {
    /// The map became interactive.
    Load,
    /// The camera was moved.
    CameraMoved {
        /// New map center.
        center: Coordinates,
        /// New zoom level.
        zoom: f64,
    },
    /// The user issued a placement gesture (secondary click) at given location.
    SecondaryGesture {
        /// Longitude.
        lng: f64,
        /// Latitude.
        lat: f64,
    },
    /// The user invoked a removal affordance of the marker.
    RemovalRequested(MarkerId),
}

/// A camera state of the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Map center.
    pub center: Coordinates,
    /// Zoom level.
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { center: INITIAL_CENTER, zoom: INITIAL_ZOOM }
    }
}

impl Camera {
    /// Returns a status line shown over the map.
    pub fn info_line(&self) -> String {
        format!("Longitude: {:.4} | Latitude: {:.4} | Zoom: {:.2}", self.center.lng, self.center.lat, self.zoom)
    }
}
