use serde::Serialize;

/// Phase of the simulated search triggered from the main panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
}

/// One titled block of the analysis dialog
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub heading: String,
    pub entries: Vec<String>,
}

/// Canned result shown once the simulated search completes
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub title: String,
    pub sections: Vec<ReportSection>,
}

impl AnalysisReport {
    pub fn section(&self, heading: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

// Search request and response exchanged between the event loop and the search service
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub id: u64,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct SearchResponse {
    pub id: u64,
    pub report: AnalysisReport,
}
