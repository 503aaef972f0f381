use clap::{Arg, ArgAction, ArgMatches};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write, stdin, stdout};
use std::sync::Arc;
use tsp_cli::core::client::SolverClient;
use tsp_cli::core::utils::{InfoLogger, create_stderr_logger};
use tsp_cli::extensions::config::{Config, read_config};
use tsp_cli::extensions::http::HttpSolverClient;
use tsp_cli::solver::{LocalSolverClient, SolverService};

pub mod session;
pub mod solve;

pub(crate) const CONFIG_ARG_NAME: &str = "config";
pub(crate) const URL_ARG_NAME: &str = "url";
pub(crate) const LOCAL_ARG_NAME: &str = "local";
pub(crate) const TIMEOUT_ARG_NAME: &str = "timeout";
pub(crate) const LOG_ARG_NAME: &str = "log";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

pub(crate) fn open_stdin_or_file(in_file: Option<File>) -> Box<dyn BufRead> {
    if let Some(in_file) = in_file { Box::new(BufReader::new(in_file)) } else { Box::new(BufReader::new(stdin())) }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_int_value<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Returns arguments shared by commands which talk to the solving service.
fn get_service_args() -> Vec<Arg> {
    vec![
        Arg::new(CONFIG_ARG_NAME)
            .help("Specifies path to config file")
            .short('c')
            .long(CONFIG_ARG_NAME)
            .required(false),
        Arg::new(URL_ARG_NAME)
            .help("Specifies base url of the solving service, `/tsp` is appended")
            .short('u')
            .long(URL_ARG_NAME)
            .required(false)
            .conflicts_with(LOCAL_ARG_NAME),
        Arg::new(LOCAL_ARG_NAME)
            .help("Solves with the in-process solver even if the service url is configured")
            .long(LOCAL_ARG_NAME)
            .action(ArgAction::SetTrue),
        Arg::new(TIMEOUT_ARG_NAME)
            .help("Specifies timeout of the solving service call in seconds")
            .short('t')
            .long(TIMEOUT_ARG_NAME)
            .required(false),
        Arg::new(LOG_ARG_NAME)
            .help("Specifies whether logging is enabled")
            .long(LOG_ARG_NAME)
            .action(ArgAction::SetTrue),
    ]
}

fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .unwrap_or_else(|| Ok(Config::default()))
}

fn get_logger(matches: &ArgMatches, config: &Config) -> InfoLogger {
    if matches.get_flag(LOG_ARG_NAME) { create_stderr_logger("tsp") } else { config.create_logger() }
}

/// Creates http client when service url is specified in args or config, otherwise in-process one.
fn get_solver_client(
    matches: &ArgMatches,
    config: &Config,
    logger: InfoLogger,
) -> Result<Box<dyn SolverClient>, String> {
    let url = if matches.get_flag(LOCAL_ARG_NAME) {
        None
    } else {
        matches.get_one::<String>(URL_ARG_NAME).map(|url| url.as_str()).or(config.service_url())
    };

    match url {
        Some(url) => {
            let timeout = parse_int_value::<u64>(matches, TIMEOUT_ARG_NAME, "timeout")?
                .map(std::time::Duration::from_secs)
                .unwrap_or_else(|| config.service_timeout());
            let client = HttpSolverClient::new(url, timeout)?;
            logger(format!("solving service endpoint: {}", client.endpoint()).as_str());

            Ok(Box::new(client))
        }
        None => {
            logger("solving with in-process solver");
            let service = SolverService::new_with_logger(config.service_config(), Arc::clone(&logger))?;

            Ok(Box::new(LocalSolverClient::new(service)))
        }
    }
}
