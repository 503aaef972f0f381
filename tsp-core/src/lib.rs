//! Core crate contains the marker lifecycle and label consistency engine of a map based
//! ***Traveling Salesman Problem*** planner.
//!
//! A user places point markers on a slippy map, the engine keeps them labeled `A`, `B`, `C`, ...
//! in placement order across the map layer, the shared marker store and the outbound request
//! payload, and hands the request to a solving service through a [`client::SolverClient`].
//!
//! # Examples
//!
//! ```
//! use tsp_core::prelude::*;
//! use std::sync::Arc;
//!
//! struct NoPins;
//!
//! impl MapLayer for NoPins {
//!     type Pin = ();
//!
//!     fn create_pin(&mut self, _: MarkerId, _: Coordinates, _: &Label, _: Popup) -> Self::Pin {}
//!     fn remove_pin(&mut self, _: Self::Pin) {}
//!     fn set_pin_label(&mut self, _: &mut Self::Pin, _: &Label) {}
//! }
//!
//! let store = SharedMarkerStore::default();
//! let mut surface = MapInteractionSurface::new(NoPins, store.clone(), Arc::new(|_: &str| ()));
//!
//! surface.handle_event(MapEvent::Load);
//! surface.handle_event(MapEvent::SecondaryGesture { lng: 10., lat: 20. });
//! surface.handle_event(MapEvent::SecondaryGesture { lng: 30., lat: 40. });
//!
//! let first = store.snapshot()[0].id;
//! surface.handle_event(MapEvent::RemovalRequested(first));
//!
//! let markers = store.snapshot();
//! assert_eq!(markers.len(), 1);
//! assert_eq!(markers[0].label.as_str(), "A");
//! assert_eq!(markers[0].coordinates, Coordinates::new(30., 40.));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
mod discovery;

pub mod client;
pub mod format;
pub mod models;
pub mod planner;
pub mod prelude;
pub mod presenter;
pub mod store;
pub mod surface;
pub mod utils;
