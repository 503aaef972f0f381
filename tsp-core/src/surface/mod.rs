//! The map interaction surface turns map gestures into marker lifecycle changes and keeps the pins
//! rendered on the map consistent with the marker store.
//!
//! Each marker goes through two states only: it is `Placed` on a placement gesture and `Removed`
//! when its removal affordance is invoked. Removal is followed by a label refresh pass which runs
//! against the store snapshot taken after the store has relabeled the remaining markers.

#[cfg(test)]
#[path = "../../tests/unit/surface/surface_test.rs"]
mod surface_test;

mod events;
pub use self::events::*;

mod layer;
pub use self::layer::*;

use crate::models::{Coordinates, Label, Marker, MarkerId};
use crate::store::{SharedMarkerStore, StoreError};
use crate::utils::InfoLogger;
use rustc_hash::FxHashMap;
use std::sync::mpsc::{Receiver, Sender, channel};

/// A result of handling a single map event.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOutcome {
    /// The map became interactive.
    Loaded,
    /// Camera state was updated.
    CameraMoved(Camera),
    /// A new marker was placed.
    Placed(Marker),
    /// A marker was removed.
    Removed {
        /// The removed marker with the label it had before removal.
        removed: Marker,
        /// Amount of remaining pins which got a new label.
        relabeled: usize,
    },
    /// The event had no effect.
    Ignored(IgnoreReason),
}

/// A reason why an event had no effect.
#[derive(Clone, Debug, PartialEq)]
pub enum IgnoreReason {
    /// The map is not loaded yet.
    NotLoaded,
    /// Gesture coordinates are not finite numbers.
    InvalidCoordinates,
    /// The store refused a new marker.
    Store(StoreError),
    /// There is no marker with such id, e.g. removal was invoked twice.
    UnknownMarker(MarkerId),
}

struct PinEntry<P> {
    pin: P,
    label: Label,
}

/// Consumes map events and mirrors marker changes into the map layer and the marker store.
///
/// The surface is the only component which mutates the store.
pub struct MapInteractionSurface<L: MapLayer> {
    layer: L,
    store: SharedMarkerStore,
    pins: FxHashMap<MarkerId, PinEntry<L::Pin>>,
    camera: Camera,
    initial_camera: Camera,
    is_loaded: bool,
    sender: Sender<MapEvent>,
    receiver: Receiver<MapEvent>,
    logger: InfoLogger,
}

impl<L: MapLayer> MapInteractionSurface<L> {
    /// Creates a new surface with the default camera.
    pub fn new(layer: L, store: SharedMarkerStore, logger: InfoLogger) -> Self {
        Self::with_camera(layer, store, Camera::default(), logger)
    }

    /// Creates a new surface with the given initial camera.
    pub fn with_camera(layer: L, store: SharedMarkerStore, camera: Camera, logger: InfoLogger) -> Self {
        let (sender, receiver) = channel();

        Self {
            layer,
            store,
            pins: FxHashMap::default(),
            camera,
            initial_camera: camera,
            is_loaded: false,
            sender,
            receiver,
            logger,
        }
    }

    /// Returns a sender which can be used by the map collaborator to queue events.
    pub fn event_sender(&self) -> Sender<MapEvent> {
        self.sender.clone()
    }

    /// Handles all queued events in order, each one to completion.
    pub fn process_events(&mut self) -> Vec<SurfaceOutcome> {
        let mut outcomes = Vec::new();

        while let Ok(event) = self.receiver.try_recv() {
            outcomes.push(self.handle_event(event));
        }

        outcomes
    }

    /// Handles a single event.
    pub fn handle_event(&mut self, event: MapEvent) -> SurfaceOutcome {
        match event {
            MapEvent::Load => {
                self.is_loaded = true;
                (self.logger)("map is loaded");
                SurfaceOutcome::Loaded
            }
            MapEvent::CameraMoved { center, zoom } => {
                self.camera = Camera { center, zoom };
                SurfaceOutcome::CameraMoved(self.camera)
            }
            MapEvent::SecondaryGesture { lng, lat } => self.place(Coordinates::new(lng, lat)),
            MapEvent::RemovalRequested(id) => self.remove(id),
        }
    }

    /// Returns true if the map has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Returns current camera.
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Returns camera used to fly back to the initial view.
    pub fn reset_camera(&mut self) -> Camera {
        self.camera = self.initial_camera;
        self.camera
    }

    /// Returns a status line with current camera.
    pub fn info_line(&self) -> String {
        self.camera.info_line()
    }

    /// Returns the marker store handle.
    pub fn store(&self) -> &SharedMarkerStore {
        &self.store
    }

    /// Returns the map layer.
    pub fn layer(&self) -> &L {
        &self.layer
    }

    /// Returns the map layer as mutable.
    pub fn layer_mut(&mut self) -> &mut L {
        &mut self.layer
    }

    /// Returns labels currently displayed by pins, in store order.
    pub fn pin_labels(&self) -> Vec<(MarkerId, Label)> {
        self.store.read(|store| {
            store
                .markers()
                .iter()
                .filter_map(|marker| self.pins.get(&marker.id).map(|entry| (marker.id, entry.label.clone())))
                .collect()
        })
    }

    /// Returns amount of pins on the map.
    pub fn pins_count(&self) -> usize {
        self.pins.len()
    }

    fn place(&mut self, coordinates: Coordinates) -> SurfaceOutcome {
        if !self.is_loaded {
            (self.logger)("placement ignored: map is not loaded");
            return SurfaceOutcome::Ignored(IgnoreReason::NotLoaded);
        }

        if !coordinates.is_finite() {
            (self.logger)("placement ignored: coordinates are not finite");
            return SurfaceOutcome::Ignored(IgnoreReason::InvalidCoordinates);
        }

        let marker = match self.store.write(|store| store.add(coordinates)) {
            Ok(marker) => marker,
            Err(err) => {
                (self.logger)(format!("placement ignored: {err}").as_str());
                return SurfaceOutcome::Ignored(IgnoreReason::Store(err));
            }
        };

        let popup = self.create_popup(&marker);
        let pin = self.layer.create_pin(marker.id, marker.coordinates, &marker.label, popup);
        self.pins.insert(marker.id, PinEntry { pin, label: marker.label.clone() });

        (self.logger)(format!("placed marker {} at ({})", marker.label, marker.coordinates).as_str());

        SurfaceOutcome::Placed(marker)
    }

    fn remove(&mut self, id: MarkerId) -> SurfaceOutcome {
        if let Some(entry) = self.pins.remove(&id) {
            self.layer.remove_pin(entry.pin);
        }

        let Some(removed) = self.store.write(|store| store.remove(id)) else {
            return SurfaceOutcome::Ignored(IgnoreReason::UnknownMarker(id));
        };

        let relabeled = self.refresh_labels();

        (self.logger)(format!("removed marker {}, relabeled {relabeled} marker(s)", removed.label).as_str());

        SurfaceOutcome::Removed { removed, relabeled }
    }

    fn refresh_labels(&mut self) -> usize {
        let snapshot = self.store.snapshot();
        let mut relabeled = 0;

        for marker in snapshot {
            let Some(entry) = self.pins.get_mut(&marker.id) else { continue };

            if entry.label != marker.label {
                self.layer.set_pin_label(&mut entry.pin, &marker.label);
                entry.label = marker.label;
                relabeled += 1;
            }
        }

        relabeled
    }

    fn create_popup(&self, marker: &Marker) -> Popup {
        let sender = self.sender.clone();
        let id = marker.id;

        Popup {
            text: format!("Longitude: {:.4}, Latitude: {:.4}", marker.coordinates.lng, marker.coordinates.lat),
            on_remove: RemovalAffordance::new(id, move || {
                // NOTE the receiver is gone only when the surface is dropped
                let _ = sender.send(MapEvent::RemovalRequested(id));
            }),
        }
    }
}
