use crate::interactive_ratatui::constants::ANALYSIS_DIALOG_MAX_WIDTH;
use crate::interactive_ratatui::domain::content::REPORT_TITLE;
use crate::interactive_ratatui::ui::app_state::AppState;
use crate::interactive_ratatui::ui::components::{
    Component,
    dialog::Dialog,
    help_dialog::help_dialog,
    report_view::report_lines,
    search_panel::SearchPanel,
};
use crate::interactive_ratatui::ui::events::Message;
use crate::interactive_ratatui::ui::key_listeners::KeyListeners;
use ratatui::Frame;

pub struct Renderer {
    key_listeners: KeyListeners,
    search_panel: SearchPanel,
    analysis_dialog: Dialog,
    help_dialog: Dialog,
    rendered_search_id: Option<u64>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            key_listeners: KeyListeners::new(),
            search_panel: SearchPanel::new(),
            analysis_dialog: Dialog::new(REPORT_TITLE, Message::CloseDialog)
                .with_max_width(ANALYSIS_DIALOG_MAX_WIDTH),
            help_dialog: help_dialog(),
            rendered_search_id: None,
        }
    }

    /// Pushes the current state into the components and attaches or
    /// releases overlay listeners to match it
    pub fn sync(&mut self, state: &AppState) {
        self.search_panel.set_phase(state.search.phase);
        self.search_panel.set_message(state.ui.message.clone());

        if let Some(report) = &state.dialog.report {
            if self.rendered_search_id != Some(state.search.current_search_id) {
                self.analysis_dialog.set_content(report_lines(report));
                self.rendered_search_id = Some(state.search.current_search_id);
            }
        }

        let analysis_opening = state.dialog.open && !self.analysis_dialog.is_open();
        self.analysis_dialog
            .sync_open(state.dialog.open, &self.key_listeners);
        // Help is drawn above the analysis, so it must also answer Escape first
        if analysis_opening {
            self.help_dialog.raise(&self.key_listeners);
        }
        self.help_dialog
            .sync_open(state.ui.show_help, &self.key_listeners);
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.sync(state);

        let area = f.area();
        self.search_panel.render(f, area);
        self.analysis_dialog.render(f, area);
        self.help_dialog.render(f, area);
    }

    /// Closes every overlay, releasing their listeners
    pub fn unmount(&mut self) {
        self.analysis_dialog.sync_open(false, &self.key_listeners);
        self.help_dialog.sync_open(false, &self.key_listeners);
    }

    pub fn key_listeners(&self) -> &KeyListeners {
        &self.key_listeners
    }

    pub fn get_search_panel_mut(&mut self) -> &mut SearchPanel {
        &mut self.search_panel
    }

    pub fn get_analysis_dialog(&self) -> &Dialog {
        &self.analysis_dialog
    }

    pub fn get_analysis_dialog_mut(&mut self) -> &mut Dialog {
        &mut self.analysis_dialog
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut Dialog {
        &mut self.help_dialog
    }
}
