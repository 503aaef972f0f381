//! A command line interface to the map marker planner.

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}

mod cli {
    use super::commands::session::{get_session_app, run_session};
    use super::commands::solve::{get_solve_app, run_solve};
    use super::commands::{create_write_buffer, open_stdin_or_file};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Map TSP Planner")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to place labeled markers and solve TSP over them")
            .subcommand(get_solve_app())
            .subcommand(get_session_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
            Some(("session", session_matches)) => run_session(session_matches, open_stdin_or_file, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
