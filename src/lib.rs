pub mod formatters;
pub mod headless;
pub mod interactive_ratatui;
pub mod logging;

use std::path::PathBuf;

use interactive_ratatui::constants::SEARCH_DELAY_MS;

/// Runtime settings shared by the interactive and headless modes
#[derive(Debug, Clone)]
pub struct Config {
    pub delay_ms: u64,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay_ms: SEARCH_DELAY_MS,
            log_file: None,
            verbose: false,
        }
    }
}

pub use interactive_ratatui::InteractiveSearch;
pub use interactive_ratatui::domain::content::canned_report;
pub use interactive_ratatui::domain::models::{AnalysisReport, ReportSection};
