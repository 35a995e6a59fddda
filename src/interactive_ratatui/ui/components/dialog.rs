//! Modal overlay shared by the analysis result and the help screen.
//!
//! The dialog owns no application data. Its caller decides when it is open
//! (via [`Dialog::sync_open`]), what it shows, and which [`Message`] is
//! emitted when the user dismisses it. Dismissal never mutates state here;
//! `AppState::update` reacts to the close message.

use crate::interactive_ratatui::constants::{DIALOG_MARGIN, PAGE_SIZE};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crate::interactive_ratatui::ui::key_listeners::{KeyListeners, ListenerGuard};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const CLOSE_LABEL: &str = "[x]";

/// Screen regions of an open dialog, recorded at render time for mouse routing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogHitAreas {
    pub backdrop: Rect,
    pub panel: Rect,
    pub close_button: Rect,
}

pub struct Dialog {
    title: String,
    on_close: Message,
    content: Vec<Line<'static>>,
    max_width: u16,
    scroll_offset: u16,
    max_scroll: u16,
    escape_listener: Option<ListenerGuard>,
    hit_areas: Option<DialogHitAreas>,
}

impl Dialog {
    pub fn new(title: impl Into<String>, on_close: Message) -> Self {
        Self {
            title: title.into(),
            on_close,
            content: Vec::new(),
            max_width: 80,
            scroll_offset: 0,
            max_scroll: 0,
            escape_listener: None,
            hit_areas: None,
        }
    }

    pub fn with_max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn set_content(&mut self, content: Vec<Line<'static>>) {
        self.content = content;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_open(&self) -> bool {
        self.escape_listener.is_some()
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn hit_areas(&self) -> Option<DialogHitAreas> {
        self.hit_areas
    }

    /// Brings the dialog in line with the caller's open flag.
    ///
    /// Opening registers one Escape listener; closing drops it. Calling this
    /// repeatedly with the same flag does nothing.
    pub fn sync_open(&mut self, is_open: bool, listeners: &KeyListeners) {
        match (is_open, self.escape_listener.is_some()) {
            (true, false) => {
                let guard = self.register_escape(listeners);
                tracing::debug!(dialog = %self.title, listener = guard.id(), "dialog opened");
                self.escape_listener = Some(guard);
                self.scroll_offset = 0;
            }
            (false, true) => {
                if let Some(guard) = self.escape_listener.take() {
                    tracing::debug!(dialog = %self.title, listener = guard.id(), "dialog closed");
                }
                self.hit_areas = None;
            }
            _ => {}
        }
    }

    /// Re-registers the Escape listener of an open dialog so it answers
    /// before any dialog opened after it. Scroll position is kept.
    pub fn raise(&mut self, listeners: &KeyListeners) {
        if self.escape_listener.take().is_some() {
            let guard = self.register_escape(listeners);
            tracing::debug!(dialog = %self.title, listener = guard.id(), "dialog raised");
            self.escape_listener = Some(guard);
        }
    }

    fn register_escape(&self, listeners: &KeyListeners) -> ListenerGuard {
        let on_close = self.on_close.clone();
        listeners.register(move |key| {
            (key.code == KeyCode::Esc && key.kind == KeyEventKind::Press).then(|| on_close.clone())
        })
    }

    fn body(&self) -> Paragraph<'static> {
        Paragraph::new(self.content.clone()).wrap(Wrap { trim: false })
    }

    fn layout(&self, area: Rect) -> (DialogHitAreas, u16) {
        let width = self
            .max_width
            .min(area.width.saturating_sub(DIALOG_MARGIN * 2));
        let width = if width < 8 { area.width } else { width };

        let content_height = self.body().line_count(width.saturating_sub(2)) as u16;
        let height = (content_height + 2)
            .min(area.height.saturating_sub(DIALOG_MARGIN * 2))
            .max(3)
            .min(area.height);

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let panel = Rect::new(x, y, width, height);

        let label_width = CLOSE_LABEL.len() as u16;
        let close_button = Rect::new(
            panel.x + panel.width.saturating_sub(label_width + 1),
            panel.y,
            label_width.min(panel.width),
            1,
        );

        let visible_rows = height.saturating_sub(2);
        (
            DialogHitAreas {
                backdrop: area,
                panel,
                close_button,
            },
            content_height.saturating_sub(visible_rows),
        )
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll_offset as i32 + delta).clamp(0, self.max_scroll as i32);
        self.scroll_offset = next as u16;
    }
}

impl Component for Dialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.is_open() {
            self.hit_areas = None;
            return;
        }

        let (areas, max_scroll) = self.layout(area);
        self.max_scroll = max_scroll;
        self.scroll_offset = self.scroll_offset.min(max_scroll);
        self.hit_areas = Some(areas);

        // Dim everything behind the panel
        f.buffer_mut().set_style(
            areas.backdrop,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        );
        f.render_widget(Clear, areas.panel);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(" Esc close · ↑/↓ scroll ").right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));

        let body = self
            .body()
            .block(block)
            .style(Style::default().fg(Color::White))
            .scroll((self.scroll_offset, 0));
        f.render_widget(body, areas.panel);

        f.render_widget(
            Paragraph::new(CLOSE_LABEL).style(Style::default().fg(Color::Red)),
            areas.close_button,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if !self.is_open() {
            return None;
        }

        // Escape arrives through the registered listener
        match key.code {
            KeyCode::Enter | KeyCode::Char('q') => Some(self.on_close.clone()),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_by(-1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_by(1);
                None
            }
            KeyCode::PageUp => {
                self.scroll_by(-(PAGE_SIZE as i32));
                None
            }
            KeyCode::PageDown => {
                self.scroll_by(PAGE_SIZE as i32);
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Message> {
        let areas = self.hit_areas?;
        let position = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if areas.close_button.contains(position) {
                    Some(self.on_close.clone())
                } else if areas.panel.contains(position) {
                    // Clicks inside the panel stop here
                    None
                } else {
                    Some(self.on_close.clone())
                }
            }
            MouseEventKind::ScrollUp if areas.panel.contains(position) => {
                self.scroll_by(-1);
                None
            }
            MouseEventKind::ScrollDown if areas.panel.contains(position) => {
                self.scroll_by(1);
                None
            }
            _ => None,
        }
    }
}
