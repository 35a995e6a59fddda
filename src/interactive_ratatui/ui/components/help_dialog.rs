use crate::interactive_ratatui::constants::HELP_DIALOG_MAX_WIDTH;
use crate::interactive_ratatui::ui::components::dialog::Dialog;
use crate::interactive_ratatui::ui::events::Message;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Key-binding overlay, built on the shared [`Dialog`]
pub fn help_dialog() -> Dialog {
    let mut dialog =
        Dialog::new("Help", Message::CloseHelp).with_max_width(HELP_DIALOG_MAX_WIDTH);
    dialog.set_content(help_text());
    dialog
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

pub fn help_text() -> Vec<Line<'static>> {
    vec![
        section("Search Panel:"),
        Line::from("  Enter / s   - Start the search"),
        Line::from("  Click       - Start the search (on the button)"),
        Line::from("  ?           - Show this help"),
        Line::from("  q / Esc     - Quit"),
        Line::from("  Ctrl+C x2   - Quit"),
        Line::from(""),
        section("Dialogs:"),
        Line::from("  Esc         - Close"),
        Line::from("  Enter / q   - Close"),
        Line::from("  Click [x]   - Close"),
        Line::from("  Click outside the dialog - Close"),
        Line::from("  ↑/↓ PgUp/PgDn Home - Scroll"),
    ]
}
