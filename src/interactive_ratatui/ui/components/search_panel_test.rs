#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::search_panel::*;
    use crate::interactive_ratatui::domain::content::{DESCRIPTION_LABEL, PAGE_TITLE};
    use crate::interactive_ratatui::domain::models::SearchPhase;
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };
    use ratatui::{Terminal, backend::TestBackend};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn render_text(panel: &mut SearchPanel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_idle_panel_shows_label() {
        let mut panel = SearchPanel::new();

        let text = render_text(&mut panel);

        assert!(panel.is_trigger_enabled());
        assert!(text.contains(PAGE_TITLE));
        assert!(text.contains(DESCRIPTION_LABEL));
        assert!(text.contains("Search"));
        assert!(!text.contains("Searching..."));
    }

    #[test]
    fn test_searching_panel_shows_busy_indicator() {
        let mut panel = SearchPanel::new();
        panel.set_phase(SearchPhase::Searching);

        let text = render_text(&mut panel);

        assert!(!panel.is_trigger_enabled());
        assert!(text.contains("Searching..."));
        assert!(text.contains('⠋'));
    }

    #[test]
    fn test_spinner_advances_between_frames() {
        let mut panel = SearchPanel::new();
        panel.set_phase(SearchPhase::Searching);

        render_text(&mut panel);
        let second = render_text(&mut panel);

        assert!(second.contains('⠙'));
    }

    #[test]
    fn test_enter_requests_search_when_idle() {
        let mut panel = SearchPanel::new();

        assert_eq!(
            panel.handle_key(create_key_event(KeyCode::Enter)),
            Some(Message::SearchRequested)
        );
        assert_eq!(
            panel.handle_key(create_key_event(KeyCode::Char('s'))),
            Some(Message::SearchRequested)
        );
    }

    #[test]
    fn test_trigger_disabled_while_searching() {
        let mut panel = SearchPanel::new();
        panel.set_phase(SearchPhase::Searching);
        render_text(&mut panel);

        assert!(panel.handle_key(create_key_event(KeyCode::Enter)).is_none());

        let area = panel.trigger_area().unwrap();
        assert!(panel.handle_mouse(left_click(area.x + 1, area.y + 1)).is_none());
    }

    #[test]
    fn test_click_on_trigger_requests_search() {
        let mut panel = SearchPanel::new();
        render_text(&mut panel);

        let area = panel.trigger_area().unwrap();
        assert_eq!(
            panel.handle_mouse(left_click(area.x + 1, area.y + 1)),
            Some(Message::SearchRequested)
        );
        assert!(panel.handle_mouse(left_click(0, 0)).is_none());
    }

    #[test]
    fn test_help_and_quit_keys() {
        let mut panel = SearchPanel::new();

        assert_eq!(
            panel.handle_key(create_key_event(KeyCode::Char('?'))),
            Some(Message::ShowHelp)
        );
        assert_eq!(
            panel.handle_key(create_key_event(KeyCode::Char('q'))),
            Some(Message::Quit)
        );
        assert_eq!(
            panel.handle_key(create_key_event(KeyCode::Esc)),
            Some(Message::Quit)
        );
        assert!(panel.handle_key(create_key_event(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn test_status_message_replaces_hint() {
        let mut panel = SearchPanel::new();
        panel.set_message(Some("Press Ctrl+C again to exit".to_string()));

        let text = render_text(&mut panel);

        assert!(text.contains("Press Ctrl+C again to exit"));
        assert!(!text.contains("?: help"));
    }
}
