use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::content::{
    DESCRIPTION_LABEL, PAGE_TAGLINE, PAGE_TITLE, PROJECT_DESCRIPTION,
};
use crate::interactive_ratatui::domain::models::SearchPhase;
use crate::interactive_ratatui::ui::components::{Component, is_exit_prompt};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Default)]
pub struct SearchPanel {
    phase: SearchPhase,
    message: Option<String>,
    spinner_frame: usize,
    trigger_area: Option<Rect>,
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_phase(&mut self, phase: SearchPhase) {
        if phase != self.phase {
            self.spinner_frame = 0;
        }
        self.phase = phase;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// The trigger is disabled while a search is in flight
    pub fn is_trigger_enabled(&self) -> bool {
        self.phase == SearchPhase::Idle
    }

    pub fn trigger_area(&self) -> Option<Rect> {
        self.trigger_area
    }

    fn trigger_label(&self) -> Line<'static> {
        match self.phase {
            SearchPhase::Idle => Line::from(vec![
                Span::styled("⌕ ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    "Search",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            SearchPhase::Searching => Line::from(vec![
                Span::styled(
                    format!("{} ", SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled("Searching...", Style::default().fg(Color::DarkGray)),
            ]),
        }
    }

    fn status_line(&self) -> Line<'static> {
        match &self.message {
            Some(msg) if is_exit_prompt(&self.message) => {
                Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Red)))
            }
            Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Yellow))),
            None => Line::from(Span::styled(
                "Enter: search · ?: help · q: quit",
                Style::default().fg(Color::DarkGray),
            )),
        }
    }
}

impl Component for SearchPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let [header_area, description_area, trigger_row, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(TRIGGER_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                PAGE_TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(PAGE_TAGLINE, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center);
        f.render_widget(header, header_area);

        let description = Paragraph::new(PROJECT_DESCRIPTION)
            .block(
                Block::default()
                    .title(format!(" {DESCRIPTION_LABEL} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false });
        f.render_widget(description, description_area);

        let width = TRIGGER_WIDTH.min(trigger_row.width);
        let trigger_area = Rect::new(
            trigger_row.x + trigger_row.width - width,
            trigger_row.y,
            width,
            trigger_row.height,
        );
        let border_color = if self.is_trigger_enabled() {
            Color::Magenta
        } else {
            Color::DarkGray
        };
        let trigger = Paragraph::new(self.trigger_label())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        f.render_widget(trigger, trigger_area);
        self.trigger_area = Some(trigger_area);

        f.render_widget(Paragraph::new(self.status_line()), status_area);

        if self.phase == SearchPhase::Searching {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char(' ') => {
                self.is_trigger_enabled().then_some(Message::SearchRequested)
            }
            KeyCode::Char('?') => Some(Message::ShowHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Message> {
        let trigger_area = self.trigger_area?;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left)
                if trigger_area.contains(Position::new(mouse.column, mouse.row)) =>
            {
                self.is_trigger_enabled().then_some(Message::SearchRequested)
            }
            _ => None,
        }
    }
}
