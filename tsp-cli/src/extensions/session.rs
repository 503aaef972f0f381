//! A headless, line oriented front-end: every line is a command which drives the map interaction
//! surface, changes request options or submits markers to the solving service.

#[cfg(test)]
#[path = "../../tests/unit/extensions/session_test.rs"]
mod session_test;

use super::config::Config;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use tsp_core::client::SolverClient;
use tsp_core::format::{ExecutionType, MethodType};
use tsp_core::models::{Coordinates, Label, MarkerId};
use tsp_core::planner::{Planner, SubmitOutcome};
use tsp_core::store::SharedMarkerStore;
use tsp_core::surface::*;
use tsp_core::utils::InfoLogger;

/// A help text listing all session commands.
pub const HELP_TEXT: &str = "\
commands:
  load                                  makes the map interactive
  move <lng> <lat> <zoom>               moves the camera
  reset                                 flies back to the initial view
  place <lng> <lat>                     places a marker
  remove <label>                        removes a marker through its popup
  list                                  lists placed markers
  pins                                  shows pins rendered on the map
  options                               lists start node options
  info                                  shows camera state
  set <execution|method|start> <value>  selects a request option, `-` clears it
  submit                                sends markers to the solving service
  copy                                  copies minimum cost of the shown result
  close                                 closes the results dialog
  quit                                  ends the session";

/// A pin handle of the terminal map layer.
pub struct TerminalPin {
    id: MarkerId,
}

struct PinView {
    coordinates: Coordinates,
    label: Label,
    popup: Popup,
}

/// A map layer which keeps pins in memory and renders them as text.
#[derive(Default)]
pub struct TerminalLayer {
    pins: BTreeMap<MarkerId, PinView>,
}

impl TerminalLayer {
    /// Returns removal affordance of the pin.
    pub fn affordance(&self, id: MarkerId) -> Option<RemovalAffordance> {
        self.pins.get(&id).map(|pin| pin.popup.on_remove.clone())
    }

    /// Returns amount of pins.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Returns true if there are no pins.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Renders pins as text, one per line.
    pub fn render(&self) -> String {
        self.pins
            .values()
            .map(|pin| format!("[{}] {} ({})", pin.label, pin.popup.text, pin.coordinates))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl MapLayer for TerminalLayer {
    type Pin = TerminalPin;

    fn create_pin(&mut self, id: MarkerId, coordinates: Coordinates, label: &Label, popup: Popup) -> Self::Pin {
        self.pins.insert(id, PinView { coordinates, label: label.clone(), popup });
        TerminalPin { id }
    }

    fn remove_pin(&mut self, pin: Self::Pin) {
        self.pins.remove(&pin.id);
    }

    fn set_pin_label(&mut self, pin: &mut Self::Pin, label: &Label) {
        if let Some(view) = self.pins.get_mut(&pin.id) {
            view.label = label.clone();
        }
    }
}

/// A reply to a single command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionReply {
    /// Text to be shown to the user.
    Text(String),
    /// Nothing to show.
    Empty,
    /// The session is over.
    Quit,
}

/// Connects map surface, planner and solving service client.
pub struct Session {
    surface: MapInteractionSurface<TerminalLayer>,
    planner: Planner,
    client: Box<dyn SolverClient>,
}

impl Session {
    /// Creates a new session. The planner must read the store mutated by the surface.
    pub fn new(surface: MapInteractionSurface<TerminalLayer>, planner: Planner, client: Box<dyn SolverClient>) -> Self {
        Self { surface, planner, client }
    }

    /// Returns map surface.
    pub fn surface(&self) -> &MapInteractionSurface<TerminalLayer> {
        &self.surface
    }

    /// Returns planner.
    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    /// Returns planner as mutable.
    pub fn planner_mut(&mut self) -> &mut Planner {
        &mut self.planner
    }

    /// Passes a map event to the surface.
    pub fn dispatch(&mut self, event: MapEvent) -> SurfaceOutcome {
        self.surface.handle_event(event)
    }

    /// Submits current markers with selected options to the solving service.
    pub fn submit_markers(&mut self) -> SubmitOutcome {
        self.planner.execute(self.client.as_ref())
    }

    /// Reads commands line by line and writes replies until input ends or `quit` is read.
    /// A failed command is reported and the session goes on.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<(), String> {
        for line in reader.lines() {
            let line = line.map_err(|err| format!("cannot read command: '{err}'"))?;

            let output = match self.execute(line.as_str()) {
                Ok(SessionReply::Quit) => break,
                Ok(SessionReply::Empty) => continue,
                Ok(SessionReply::Text(text)) => text,
                Err(err) => format!("error: {err}"),
            };

            writeln!(writer, "{output}").map_err(|err| format!("cannot write reply: '{err}'"))?;
        }

        writer.flush().map_err(|err| format!("cannot write reply: '{err}'"))
    }

    /// Executes a single command.
    pub fn execute(&mut self, line: &str) -> Result<SessionReply, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(SessionReply::Empty);
        }

        let args = line.split_whitespace().collect::<Vec<_>>();

        match args.as_slice() {
            ["load"] => Ok(self.handle(MapEvent::Load)),
            ["move", lng, lat, zoom] => {
                let center = Coordinates::new(parse_float(lng, "longitude")?, parse_float(lat, "latitude")?);
                let zoom = parse_float(zoom, "zoom")?;
                Ok(self.handle(MapEvent::CameraMoved { center, zoom }))
            }
            ["reset"] => {
                self.surface.reset_camera();
                Ok(SessionReply::Text(self.surface.info_line()))
            }
            ["place", lng, lat] => {
                let (lng, lat) = (parse_float(lng, "longitude")?, parse_float(lat, "latitude")?);
                Ok(self.handle(MapEvent::SecondaryGesture { lng, lat }))
            }
            ["remove", label] => self.remove(label),
            ["list"] => Ok(SessionReply::Text(self.planner.listing())),
            ["pins"] => Ok(SessionReply::Text(self.surface.layer().render())),
            ["options"] => Ok(SessionReply::Text(self.planner.start_node_options().join("\n"))),
            ["info"] => Ok(SessionReply::Text(self.surface.info_line())),
            ["set", option, value] => self.set_option(option, value),
            ["submit"] => Ok(self.submit()),
            ["copy"] => {
                let cost = self.planner.presenter().copy_cost();
                Ok(SessionReply::Text(cost.unwrap_or_else(|| "nothing to copy".to_string())))
            }
            ["close"] => {
                self.planner.presenter_mut().close();
                Ok(SessionReply::Empty)
            }
            ["help"] => Ok(SessionReply::Text(HELP_TEXT.to_string())),
            ["quit"] | ["exit"] => Ok(SessionReply::Quit),
            _ => Err(format!("unknown command: '{line}', type `help` to list commands")),
        }
    }

    fn handle(&mut self, event: MapEvent) -> SessionReply {
        let outcome = self.surface.handle_event(event);
        describe_outcome(&outcome).map_or(SessionReply::Empty, SessionReply::Text)
    }

    fn remove(&mut self, label: &str) -> Result<SessionReply, String> {
        let marker = self
            .surface
            .store()
            .read(|store| store.find_by_label(label).cloned())
            .ok_or_else(|| format!("no marker with label '{label}'"))?;

        let affordance = self
            .surface
            .layer()
            .affordance(marker.id)
            .ok_or_else(|| format!("marker '{label}' has no pin on the map"))?;

        affordance.invoke();

        let replies = self.surface.process_events().iter().filter_map(describe_outcome).collect::<Vec<_>>();

        Ok(if replies.is_empty() { SessionReply::Empty } else { SessionReply::Text(replies.join("\n")) })
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<SessionReply, String> {
        let value = Some(value).filter(|value| *value != "-");

        match option {
            "execution" => self.planner.set_execution_type(value.map(str::parse::<ExecutionType>).transpose()?),
            "method" => self.planner.set_method_type(value.map(str::parse::<MethodType>).transpose()?),
            "start" => self.planner.set_start_node(value.map(str::to_string)),
            _ => return Err(format!("unknown option: '{option}'")),
        }

        Ok(SessionReply::Empty)
    }

    fn submit(&mut self) -> SessionReply {
        match self.submit_markers() {
            SubmitOutcome::Blocked(prompt) => SessionReply::Text(format!("prompt: {prompt}")),
            SubmitOutcome::Failed(notification) => SessionReply::Text(format!("notification: {notification}")),
            SubmitOutcome::Presented => SessionReply::Text(
                self.planner.presenter().view().map(|view| view.to_string().trim_end().to_string()).unwrap_or_default(),
            ),
        }
    }
}

/// Creates a session with an empty marker store, initial camera and request options taken from
/// the config.
pub fn create_session(config: &Config, client: Box<dyn SolverClient>, logger: InfoLogger) -> Session {
    let store = SharedMarkerStore::with_policy(config.label_policy());
    let surface =
        MapInteractionSurface::with_camera(TerminalLayer::default(), store.clone(), config.camera(), logger.clone());
    let planner = Planner::new(store.reader(), config.request_config(), logger);

    Session::new(surface, planner, client)
}

fn describe_outcome(outcome: &SurfaceOutcome) -> Option<String> {
    match outcome {
        SurfaceOutcome::Loaded => Some("map is loaded".to_string()),
        SurfaceOutcome::CameraMoved(camera) => Some(camera.info_line()),
        SurfaceOutcome::Placed(marker) => Some(format!("placed {} at ({})", marker.label, marker.coordinates)),
        SurfaceOutcome::Removed { removed, relabeled } => {
            Some(format!("removed {} at ({}), relabeled: {relabeled}", removed.label, removed.coordinates))
        }
        SurfaceOutcome::Ignored(IgnoreReason::UnknownMarker(_)) => None,
        SurfaceOutcome::Ignored(IgnoreReason::NotLoaded) => Some("ignored: map is not loaded".to_string()),
        SurfaceOutcome::Ignored(IgnoreReason::InvalidCoordinates) => {
            Some("ignored: coordinates are not finite".to_string())
        }
        SurfaceOutcome::Ignored(IgnoreReason::Store(err)) => Some(format!("ignored: {err}")),
    }
}

fn parse_float(value: &str, description: &str) -> Result<f64, String> {
    value.parse::<f64>().map_err(|err| format!("cannot parse {description} '{value}': '{err}'"))
}
