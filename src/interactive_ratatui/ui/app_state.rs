use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::content::PROJECT_DESCRIPTION;
use crate::interactive_ratatui::domain::models::{AnalysisReport, SearchPhase};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;

pub struct AppState {
    pub search: SearchState,
    pub dialog: DialogState,
    pub ui: UiState,
}

pub struct SearchState {
    pub phase: SearchPhase,
    pub current_search_id: u64,
    pub description: String,
    pub delay_ms: u64,
}

pub struct DialogState {
    pub open: bool,
    pub report: Option<AnalysisReport>,
}

pub struct UiState {
    pub message: Option<String>,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SEARCH_DELAY_MS)
    }
}

impl AppState {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            search: SearchState {
                phase: SearchPhase::Idle,
                current_search_id: 0,
                description: PROJECT_DESCRIPTION.to_string(),
                delay_ms,
            },
            dialog: DialogState {
                open: false,
                report: None,
            },
            ui: UiState {
                message: None,
                show_help: false,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.search.phase == SearchPhase::Searching
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::SearchRequested => {
                if self.is_loading() {
                    tracing::debug!(
                        search_id = self.search.current_search_id,
                        "search already in flight, ignoring request"
                    );
                    return Command::None;
                }
                self.search.phase = SearchPhase::Searching;
                self.search.current_search_id += 1;
                tracing::info!(
                    search_id = self.search.current_search_id,
                    delay_ms = self.search.delay_ms,
                    "search started"
                );
                Command::ScheduleSearch {
                    id: self.search.current_search_id,
                    delay_ms: self.search.delay_ms,
                }
            }
            Message::SearchCompleted(id, report) => {
                if !self.is_loading() || id != self.search.current_search_id {
                    tracing::debug!(
                        search_id = id,
                        current = self.search.current_search_id,
                        "dropping stale search completion"
                    );
                    return Command::None;
                }
                self.search.phase = SearchPhase::Idle;
                self.dialog.report = Some(report);
                self.dialog.open = true;
                tracing::info!(search_id = id, "search completed, opening analysis dialog");
                Command::None
            }
            Message::CloseDialog => {
                if self.dialog.open {
                    self.dialog.open = false;
                    tracing::info!("analysis dialog closed");
                }
                Command::None
            }
            Message::ShowHelp => {
                self.ui.show_help = true;
                Command::None
            }
            Message::CloseHelp => {
                self.ui.show_help = false;
                Command::None
            }
            Message::SetStatus(status) => {
                self.ui.message = Some(status);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }
}
