//! QuakeMap CLI - Command-line interface
//!
//! Renders the USGS earthquake feed onto an interactive web map.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::common::{MapArgs, SourceArgs};
use commands::config::ConfigCommands;

#[derive(Debug, Parser)]
#[command(name = "quakemap", version, about = "Live earthquake map from the USGS feed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the feed and write the interactive map page
    Render {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        map: MapArgs,

        /// Output HTML file (default: output.path from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch the feed and print per-depth-band counts
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            source,
            map,
            output,
        } => commands::render::run(commands::render::RenderArgs {
            source,
            map,
            output,
        }),
        Commands::Inspect { source } => commands::inspect::run(source),
        Commands::Config { command } => commands::config::run(command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", console::style("Error:").red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}
