//! Non-interactive run: wait out the simulated search behind a spinner,
//! then print the analysis.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::Config;
use crate::formatters::{OutputFormat, format_report};
use crate::interactive_ratatui::application::search_service::SearchService;
use crate::interactive_ratatui::domain::content::PROJECT_DESCRIPTION;
use crate::interactive_ratatui::domain::models::SearchRequest;

pub fn run_headless<W: Write>(
    config: &Config,
    format: OutputFormat,
    use_color: bool,
    out: &mut W,
) -> Result<()> {
    tracing::info!(delay_ms = config.delay_ms, "headless search started");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message("Searching...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    thread::sleep(Duration::from_millis(config.delay_ms));
    spinner.finish_and_clear();

    let response = SearchService::new().search(SearchRequest {
        id: 1,
        description: PROJECT_DESCRIPTION.to_string(),
    });
    tracing::info!(search_id = response.id, "headless search completed");

    let rendered = format_report(&response.report, format, use_color)?;
    out.write_all(rendered.as_bytes())
        .context("Failed to write report")?;
    if !rendered.ends_with('\n') {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
