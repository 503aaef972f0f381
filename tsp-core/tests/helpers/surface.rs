use crate::helpers::models::test_logger;
use crate::models::{Coordinates, Label, MarkerId};
use crate::store::SharedMarkerStore;
use crate::surface::{MapEvent, MapInteractionSurface, MapLayer, Popup};
use std::collections::BTreeMap;

/// A pin handle which is given to the surface by the test layer.
pub struct TestPin {
    pub id: MarkerId,
}

/// A pin state as it is visible on the test map.
pub struct VisiblePin {
    pub coordinates: Coordinates,
    pub label: Label,
    pub popup: Popup,
}

/// A map layer which keeps visible pins in memory.
#[derive(Default)]
pub struct TestLayer {
    pub pins: BTreeMap<MarkerId, VisiblePin>,
    pub removed: Vec<MarkerId>,
    pub label_updates: usize,
}

impl TestLayer {
    pub fn visible_label(&self, id: MarkerId) -> Option<String> {
        self.pins.get(&id).map(|pin| pin.label.to_string())
    }

    pub fn popup(&self, id: MarkerId) -> Option<&Popup> {
        self.pins.get(&id).map(|pin| &pin.popup)
    }
}

impl MapLayer for TestLayer {
    type Pin = TestPin;

    fn create_pin(&mut self, id: MarkerId, coordinates: Coordinates, label: &Label, popup: Popup) -> Self::Pin {
        self.pins.insert(id, VisiblePin { coordinates, label: label.clone(), popup });
        TestPin { id }
    }

    fn remove_pin(&mut self, pin: Self::Pin) {
        self.pins.remove(&pin.id);
        self.removed.push(pin.id);
    }

    fn set_pin_label(&mut self, pin: &mut Self::Pin, label: &Label) {
        if let Some(visible) = self.pins.get_mut(&pin.id) {
            visible.label = label.clone();
            self.label_updates += 1;
        }
    }
}

pub fn create_test_surface() -> (MapInteractionSurface<TestLayer>, SharedMarkerStore) {
    create_test_surface_with_store(SharedMarkerStore::default())
}

pub fn create_test_surface_with_store(
    store: SharedMarkerStore,
) -> (MapInteractionSurface<TestLayer>, SharedMarkerStore) {
    let mut surface = MapInteractionSurface::new(TestLayer::default(), store.clone(), test_logger());
    surface.handle_event(MapEvent::Load);

    (surface, store)
}

/// Places markers at given locations through placement gestures.
pub fn place_all(surface: &mut MapInteractionSurface<TestLayer>, coordinates: &[(f64, f64)]) {
    coordinates.iter().for_each(|&(lng, lat)| {
        surface.handle_event(MapEvent::SecondaryGesture { lng, lat });
    });
}

/// Checks that every visible pin shows the label stored for its marker and that there are no
/// orphan pins or phantom store entries.
pub fn assert_pins_match_store(surface: &MapInteractionSurface<TestLayer>, store: &SharedMarkerStore) {
    let markers = store.snapshot();
    let layer = surface.layer();

    assert_eq!(layer.pins.len(), markers.len());
    assert_eq!(surface.pins_count(), markers.len());
    markers.iter().for_each(|marker| {
        assert_eq!(layer.visible_label(marker.id), Some(marker.label.to_string()));
    });
}
