//! # Showdown CLI Library
//!
//! Command-line front end for `showdown-engine`: runs Texas Hold'em sessions
//! between model-backed seats, scripted policies and an optional human.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand; [`run_with_io`]
//! does the same with an explicit terminal for the human seat.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["showdown", "play", "--models", "baseline", "random", "--rounds", "10"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Run a session and print transcripts plus final standings
//! - `eval`: Evaluate seven cards
//! - `deal`: Deal one seeded sample hand for inspection
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod human;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, ShowdownCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
};

pub use commands::HumanIo;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "eval", "deal", "cfg"];

/// Parses `args` and runs the subcommand; a human seat reads stdin and
/// prompts on stdout.
///
/// Returns the process exit code: `0` on success, `2` on any error
/// (usage errors included).
///
/// ```
/// use std::io;
/// let args = vec!["showdown", "deal", "--seed", "42"];
/// let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let terminal = HumanIo {
        input: Box::new(std::io::BufReader::new(std::io::stdin())),
        output: Box::new(std::io::stdout()),
    };
    run_with_io(args, out, err, terminal)
}

/// [`run`] with the human seat's input and prompt streams supplied by the
/// caller.
pub fn run_with_io<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    terminal: HumanIo,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            let _ = writeln!(err, "{}", e);
            let _ = ui::write_usage(err, COMMANDS);
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play(args) => handle_play_command(&args, out, err, terminal),
        Commands::Eval { cards, json } => handle_eval_command(&cards, json, out),
        Commands::Deal { seed, seats } => handle_deal_command(seed, seats, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
