use crate::interactive_ratatui::domain::models::AnalysisReport;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search events
    SearchRequested,
    SearchCompleted(u64, AnalysisReport), // (search_id, report)

    // Overlays
    CloseDialog,
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,

    // Terminal events
    Quit,
}
