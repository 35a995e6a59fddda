//! Constants for the interactive TUI module
//!
//! Timing and layout values shared by the event loop and the components.

// Timing constants
/// Default duration of the simulated search in milliseconds
pub const SEARCH_DELAY_MS: u64 = 2000;

/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Status line shown after the first Ctrl+C
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// UI Layout constants
/// Height of the page header (title, tagline, spacer)
pub const HEADER_HEIGHT: u16 = 3;

/// Width of the search trigger button
pub const TRIGGER_WIDTH: u16 = 20;

/// Height of the search trigger button
pub const TRIGGER_HEIGHT: u16 = 3;

/// Page size for PageUp/PageDown scrolling inside dialogs
pub const PAGE_SIZE: u16 = 10;

// Dialog dimensions
/// Maximum width for the analysis dialog
pub const ANALYSIS_DIALOG_MAX_WIDTH: u16 = 76;

/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 60;

/// Minimum margin around dialogs
pub const DIALOG_MARGIN: u16 = 2;
