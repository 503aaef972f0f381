#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::Command;
use tsp_cli::core::format::response::serialize_response;
use tsp_cli::core::planner::SubmitOutcome;
use tsp_cli::core::surface::{MapEvent, SurfaceOutcome};
use tsp_cli::extensions::import::{get_markers_format, import_markers};
use tsp_cli::extensions::session::create_session;

const MARKERS_ARG_NAME: &str = "MARKERS";
const FORMAT_ARG_NAME: &str = "format";
const EXECUTION_TYPE_ARG_NAME: &str = "execution-type";
const METHOD_TYPE_ARG_NAME: &str = "method-type";
const START_NODE_ARG_NAME: &str = "start-node";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Places markers from a file on the map and solves TSP over them")
        .arg(Arg::new(MARKERS_ARG_NAME).help("Sets the markers file").required(true).index(1))
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies markers file format, guessed from file extension by default")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .value_parser(["json", "csv"]),
        )
        .arg(
            Arg::new(EXECUTION_TYPE_ARG_NAME)
                .help("Specifies execution type")
                .short('e')
                .long(EXECUTION_TYPE_ARG_NAME)
                .required(false)
                .value_parser(["parallel", "serial"]),
        )
        .arg(
            Arg::new(METHOD_TYPE_ARG_NAME)
                .help("Specifies method type")
                .short('m')
                .long(METHOD_TYPE_ARG_NAME)
                .required(false)
                .value_parser(["brute", "nearest"]),
        )
        .arg(
            Arg::new(START_NODE_ARG_NAME)
                .help("Specifies label of the start node")
                .short('s')
                .long(START_NODE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for response output in json format")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .args(get_service_args())
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let config = get_config(matches)?;
    let logger = get_logger(matches, &config);
    let client = get_solver_client(matches, &config, logger.clone())?;

    let markers_path = matches.get_one::<String>(MARKERS_ARG_NAME).ok_or("markers file is not specified")?;
    let markers_format = matches
        .get_one::<String>(FORMAT_ARG_NAME)
        .map(|format| format.as_str())
        .unwrap_or_else(|| get_markers_format(markers_path));
    let markers = import_markers(markers_format, BufReader::new(open_file(markers_path, "markers")?))?;

    let mut session = create_session(&config, client, logger);
    session.dispatch(MapEvent::Load);

    markers.iter().try_for_each(|coordinates| {
        match session.dispatch(MapEvent::SecondaryGesture { lng: coordinates.lng, lat: coordinates.lat }) {
            SurfaceOutcome::Placed(_) => Ok(()),
            outcome => Err(format!("cannot place marker at ({coordinates}): {outcome:?}")),
        }
    })?;

    let planner = session.planner_mut();
    if let Some(execution_type) = matches.get_one::<String>(EXECUTION_TYPE_ARG_NAME) {
        planner.set_execution_type(Some(execution_type.parse()?));
    }
    if let Some(method_type) = matches.get_one::<String>(METHOD_TYPE_ARG_NAME) {
        planner.set_method_type(Some(method_type.parse()?));
    }
    if let Some(start_node) = matches.get_one::<String>(START_NODE_ARG_NAME) {
        planner.set_start_node(Some(start_node.clone()));
    }

    match session.submit_markers() {
        SubmitOutcome::Presented => {
            let presenter = session.planner().presenter();
            let view = presenter.view().ok_or("results dialog is not open")?;

            if let Some(out_path) = matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
                let response = presenter.response().ok_or("results dialog is not open")?;
                serialize_response(out_writer_func(Some(create_file(out_path, "out result")?)), response)?;
            }

            let mut writer = out_writer_func(None);
            write!(writer, "{view}").map_err(|err| format!("cannot write result: '{err}'"))?;
            writer.flush().map_err(|err| format!("cannot write result: '{err}'"))
        }
        SubmitOutcome::Blocked(prompt) => Err(prompt),
        SubmitOutcome::Failed(notification) => Err(notification),
    }
}
