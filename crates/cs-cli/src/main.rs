//! chartsight - session host CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in; emails containing "premium" get the premium plan
//! chartsight login bob@premium.io secret --pretty
//!
//! # Ask the route guard about a dashboard path
//! chartsight open /dashboard/analysis
//!
//! # Sign out
//! chartsight logout
//! ```

use cs_cli::{App, Cli, CliError, Result as CliResult, logger};
use cs_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::from_config(&config, cli.session_dir)?;
    let value = app.run(cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .map_err(CliError::from_json)?;

    println!("{output}");
    Ok(())
}
