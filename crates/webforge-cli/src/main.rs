#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod logging;

use clap::Parser;
use miette::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "webforge")]
#[command(author, version, about = "Inspect a project's resolved build configuration", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    /// Override the build mode (development, production, test); defaults to NODE_ENV
    #[arg(long, global = true, value_name = "MODE")]
    mode: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print every resolved project path
    Paths,

    /// Print the bundle entry map only
    Entries,

    /// Print the client-visible environment for the current mode
    Env,

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Determine working directory
    let cwd = cli
        .cwd
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::Paths => commands::paths::run(&cwd, cli.mode.as_deref(), cli.json),
        Commands::Entries => commands::entries::run(&cwd, cli.mode.as_deref(), cli.json),
        Commands::Env => commands::env::run(&cwd, cli.mode.as_deref(), cli.json),
        Commands::Version => commands::version::run(cli.json),
    }
}
