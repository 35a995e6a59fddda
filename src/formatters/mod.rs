pub mod report_formatter;

pub use report_formatter::{OutputFormat, format_report, format_report_json, format_report_text};
