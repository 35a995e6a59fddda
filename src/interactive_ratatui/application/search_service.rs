use crate::interactive_ratatui::domain::content::canned_report;
use crate::interactive_ratatui::domain::models::{SearchRequest, SearchResponse};

/// Produces the analysis for a search request.
///
/// There is no backend: every request yields the same canned report. The
/// delay the user sees is owned by the event loop's timer, not by this service.
#[derive(Default)]
pub struct SearchService;

impl SearchService {
    pub fn new() -> Self {
        Self
    }

    pub fn search(&self, request: SearchRequest) -> SearchResponse {
        tracing::debug!(
            search_id = request.id,
            description_len = request.description.len(),
            "producing canned analysis"
        );

        SearchResponse {
            id: request.id,
            report: canned_report(),
        }
    }
}
