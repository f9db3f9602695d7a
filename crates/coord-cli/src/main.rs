//! Coordinate Pictures CLI
//!
//! Inspects and edits the persisted settings file and builds the command
//! lines used to launch external tools.

mod cli;
mod commands;
mod error;
mod logging;

use std::io::Write;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, ConfigAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(&mut out, cli)?;
    out.flush()?;
    Ok(())
}

fn execute_command(out: &mut impl Write, cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Config { action } => {
            let path = cli
                .config
                .unwrap_or_else(coord_config::default_config_path);
            tracing::debug!(path = %path.display(), "using configuration file");
            match action {
                ConfigAction::Path => commands::run_config_path(out, &path),
                ConfigAction::Get { key } => commands::run_config_get(out, &path, &key),
                ConfigAction::Set { key, value } => {
                    commands::run_config_set(out, &path, &key, &value)
                }
                ConfigAction::List { json } => commands::run_config_list(out, &path, json),
            }
        }
        Commands::Quote { args } => Ok(commands::run_quote(out, &args)?),
        Commands::Split { line } => Ok(commands::run_split(out, &line)?),
    }
}
