#[cfg(test)]
#[path = "../../tests/unit/commands/session_test.rs"]
mod session_test;

use super::*;
use clap::Command;
use tsp_cli::extensions::session::create_session;

const SCRIPT_ARG_NAME: &str = "script";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_session_app() -> Command {
    Command::new("session")
        .about("Runs an interactive text session: place and remove markers, select options and submit")
        .arg(
            Arg::new(SCRIPT_ARG_NAME)
                .help("Specifies path to a file with session commands, stdin is used by default")
                .long(SCRIPT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for session output, stdout is used by default")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .args(get_service_args())
}

pub fn run_session(
    matches: &ArgMatches,
    in_reader_func: fn(Option<File>) -> Box<dyn BufRead>,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let config = get_config(matches)?;
    let logger = get_logger(matches, &config);
    let client = get_solver_client(matches, &config, logger.clone())?;

    let script = matches.get_one::<String>(SCRIPT_ARG_NAME).map(|path| open_file(path, "script")).transpose()?;
    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    let mut writer = out_writer_func(out_result);

    create_session(&config, client, logger).run(in_reader_func(script), &mut writer)
}
