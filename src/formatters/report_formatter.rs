use anyhow::Result;
use colored::Colorize;

use crate::AnalysisReport;

/// Output format for headless mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn format_report(
    report: &AnalysisReport,
    format: OutputFormat,
    use_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_report_text(report, use_color)),
        OutputFormat::Json => format_report_json(report),
    }
}

/// Plain-text rendering: title, then each section's heading and bulleted entries
pub fn format_report_text(report: &AnalysisReport, use_color: bool) -> String {
    let mut out = String::new();

    if use_color {
        out.push_str(&report.title.bright_magenta().bold().to_string());
    } else {
        out.push_str(&report.title);
    }
    out.push('\n');

    for section in &report.sections {
        out.push('\n');
        if use_color {
            out.push_str(&section.heading.bright_cyan().bold().to_string());
        } else {
            out.push_str(&section.heading);
        }
        out.push('\n');
        for entry in &section.entries {
            out.push_str("  - ");
            out.push_str(entry);
            out.push('\n');
        }
    }

    out
}

pub fn format_report_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
