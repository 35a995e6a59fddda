use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, poll,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crate::Config;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::{search_service::SearchService, timer::DeadlineTimer};
use self::constants::*;
use self::domain::models::SearchRequest;
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    search_service: SearchService,
    search_timer: DeadlineTimer,
    scheduled_search_id: Option<u64>,
    message_timer: DeadlineTimer,
    last_ctrl_c_press: Option<Instant>,
    should_quit: bool,
    disposed: bool,
}

impl InteractiveSearch {
    pub fn new(config: &Config) -> Self {
        Self {
            state: AppState::new(config.delay_ms),
            renderer: Renderer::new(),
            search_service: SearchService::new(),
            search_timer: DeadlineTimer::new(),
            scheduled_search_id: None,
            message_timer: DeadlineTimer::new(),
            last_ctrl_c_press: None,
            should_quit: false,
            disposed: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        tracing::info!("interactive session started");

        let result = self.run_app(&mut terminal);

        self.shutdown();
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.tick(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_input(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Fires whichever deadlines have been reached at `now`
    pub(crate) fn tick(&mut self, now: Instant) {
        if self.search_timer.fire_if_due(now).is_some() {
            if let Some(id) = self.scheduled_search_id.take() {
                let response = self.search_service.search(SearchRequest {
                    id,
                    description: self.state.search.description.clone(),
                });
                self.handle_message(Message::SearchCompleted(response.id, response.report));
            }
        }

        if self.message_timer.fire_if_due(now).is_some() {
            self.handle_message(Message::ClearStatus);
        }
    }

    pub(crate) fn handle_input(&mut self, key: KeyEvent) {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.should_quit = true;
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::SetStatus(EXIT_PROMPT.to_string()));
            return;
        }

        // Overlay listeners see every key before focus routing
        self.renderer.sync(&self.state);
        if let Some(msg) = self.renderer.key_listeners().dispatch(&key) {
            self.handle_message(msg);
            return;
        }

        let message = if self.state.ui.show_help {
            self.renderer.get_help_dialog_mut().handle_key(key)
        } else if self.state.dialog.open {
            self.renderer.get_analysis_dialog_mut().handle_key(key)
        } else {
            self.renderer.get_search_panel_mut().handle_key(key)
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.renderer.sync(&self.state);

        // Only the topmost surface receives the click
        let message = if self.state.ui.show_help {
            self.renderer.get_help_dialog_mut().handle_mouse(mouse)
        } else if self.state.dialog.open {
            self.renderer.get_analysis_dialog_mut().handle_mouse(mouse)
        } else {
            self.renderer.get_search_panel_mut().handle_mouse(mouse)
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    pub(crate) fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleSearch { id, delay_ms } => {
                if self.disposed {
                    tracing::debug!(search_id = id, "view disposed, not scheduling search");
                    return;
                }
                self.search_timer
                    .arm(Instant::now(), Duration::from_millis(delay_ms));
                self.scheduled_search_id = Some(id);
            }
            Command::ScheduleClearMessage(delay) => {
                if self.disposed {
                    return;
                }
                self.message_timer
                    .arm(Instant::now(), Duration::from_millis(delay));
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Cancels pending timers and releases overlay listeners.
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn shutdown(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if self.search_timer.cancel().is_some() {
            tracing::info!(
                search_id = ?self.scheduled_search_id,
                "cancelled pending search on shutdown"
            );
        }
        self.scheduled_search_id = None;
        self.message_timer.cancel();
        self.renderer.unmount();
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[cfg(test)]
    pub(crate) fn draw(&mut self, f: &mut ratatui::Frame) {
        self.renderer.render(f, &self.state);
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub(crate) fn search_deadline(&self) -> Option<Instant> {
        self.search_timer.deadline()
    }
}

impl Drop for InteractiveSearch {
    fn drop(&mut self) {
        self.shutdown();
    }
}
