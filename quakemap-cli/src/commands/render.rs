//! Render command - fetch the feed and write the map page.

use std::path::PathBuf;

use super::common::{resolve_source, resolve_view, MapArgs, SourceArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the render command.
pub struct RenderArgs {
    pub source: SourceArgs,
    pub map: MapArgs,
    pub output: Option<PathBuf>,
}

/// Run the render command.
pub fn run(args: RenderArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("render");
    let config = runner.config();

    // Resolve settings from CLI and config
    let source = resolve_source(&args.source, config)?;
    let view = resolve_view(&args.map, config)?;
    let output = args.output.unwrap_or_else(|| config.output.path.clone());

    let rendered = runner.render(&source, view)?;
    rendered.write_html(&output)?;

    println!(
        "{} {} earthquakes → {}",
        console::style("Mapped").green().bold(),
        rendered.view.marker_count(),
        output.display()
    );
    Ok(())
}
