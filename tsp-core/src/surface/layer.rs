use crate::models::{Coordinates, Label, MarkerId};
use std::fmt;
use std::sync::Arc;

/// A visual map layer which renders marker pins. It is an external collaborator: a tile engine,
/// a web map or a terminal.
pub trait MapLayer {
    /// A handle of the rendered pin together with its popup.
    type Pin;

    /// Renders a new pin at the given location.
    fn create_pin(&mut self, id: MarkerId, coordinates: Coordinates, label: &Label, popup: Popup) -> Self::Pin;

    /// Detaches the pin from the map.
    fn remove_pin(&mut self, pin: Self::Pin);

    /// Changes the label displayed by the pin.
    fn set_pin_label(&mut self, pin: &mut Self::Pin, label: &Label);
}

/// An informational overlay attached to the pin.
#[derive(Clone, Debug)]
pub struct Popup {
    /// Text shown in the overlay.
    pub text: String,
    /// An affordance which removes the marker.
    pub on_remove: RemovalAffordance,
}

/// A removal action captured for a specific marker at its creation time.
#[derive(Clone)]
pub struct RemovalAffordance {
    id: MarkerId,
    action: Arc<dyn Fn() + Send + Sync>,
}

impl RemovalAffordance {
    /// Creates a new affordance for the marker.
    pub fn new(id: MarkerId, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self { id, action: Arc::new(action) }
    }

    /// Returns id of the marker this affordance removes.
    pub fn marker_id(&self) -> MarkerId {
        self.id
    }

    /// Invokes the affordance. Invoking it more than once has the same effect as once.
    pub fn invoke(&self) {
        (self.action)()
    }
}

impl fmt::Debug for RemovalAffordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemovalAffordance").field("id", &self.id).finish_non_exhaustive()
    }
}
