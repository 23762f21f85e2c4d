//! Inspect command - summarize the feed by depth band.

use quakemap::app::FeedSummary;
use quakemap::map::ViewState;

use super::common::{resolve_source, SourceArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the inspect command.
pub fn run(args: SourceArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("inspect");

    let source = resolve_source(&args, runner.config())?;
    let rendered = runner.render(&source, ViewState::default())?;

    print_summary(&rendered.summary());
    Ok(())
}

fn print_summary(summary: &FeedSummary) {
    println!("Earthquake Feed Summary");
    println!("=======================");
    println!();
    println!("Events: {}", summary.total);
    if let (Some(min), Some(max)) = (summary.min_magnitude, summary.max_magnitude) {
        println!("Magnitude range: {:.1} to {:.1}", min, max);
    }
    if let Some(strongest) = &summary.strongest {
        println!("Strongest: {}", strongest);
    }
    println!();
    println!("Depth (km)    Color         Events");
    println!("──────────    ───────────   ──────");
    for band in &summary.bands {
        println!("{:<12}  {:<12}  {:>6}", band.label, band.color.as_css(), band.count);
    }
}
