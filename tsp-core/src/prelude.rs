//! This module reimports a common used types.

pub use crate::client::{SolverClient, TransportError};

pub use crate::format::request::{RequestConfig, RequestError, TspRequest, build_request};
pub use crate::format::response::{TspResponse, TspResult};
pub use crate::format::{ExecutionType, MethodType};

pub use crate::models::{Coordinates, Label, LabelPolicy, Marker, MarkerId};

pub use crate::planner::{Planner, SubmitOutcome};
pub use crate::presenter::{ResultPresenter, ResultView};

pub use crate::store::{MarkerStore, MarkerStoreReader, SharedMarkerStore, StoreError};

pub use crate::surface::{Camera, MapEvent, MapInteractionSurface, MapLayer, Popup, RemovalAffordance};
pub use crate::surface::{IgnoreReason, SurfaceOutcome};

pub use crate::utils::{GenericError, GenericResult, InfoLogger, Timer};
