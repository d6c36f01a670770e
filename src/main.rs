//! growth CLI - compound-interest investment projections
//!
//! Usage: growth [COMMAND]
//!
//! Commands:
//!   project      Project growth and print the summary and charts
//!   charts       Print the chart specifications as JSON
//!   interactive  Prompt for each field and recompute after every answer
//!   version      Show version information

mod commands;
mod logging;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use growth_projector::presentation::{Cli, Commands, InputArgs};

use commands::Session;
use ui::primitives::text::Icon;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", Icon::Error.render(false), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let session = Session::open(cli.config.as_deref(), cli.json, cli.verbose, cli.color)?;

    match cli.command {
        None => commands::project::cmd_project(&session, &InputArgs::default()),
        Some(Commands::Project { input }) => commands::project::cmd_project(&session, &input),
        Some(Commands::Charts { input, pretty }) => {
            commands::charts::cmd_charts(&session, &input, pretty)
        }
        Some(Commands::Interactive) => commands::interactive::cmd_interactive(&session),
        Some(Commands::Version) => commands::version::cmd_version(&session),
    }
}
