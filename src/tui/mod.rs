//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! loop {
//!     draw (only if something changed)
//!     poll input (250ms) → drain all pending input → keymap → update()
//!     drain pipeline messages (rx.try_recv) → update()
//!     each Effect::Run(cmd) → pipeline.submit(cmd)
//! }
//! ```
//!
//! Input and storage results funnel through the same `update()` calls on this
//! thread, one at a time. Storage work happens on the pipeline task and
//! never blocks the loop.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
pub mod event;
pub mod keymap;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::widgets::ListState;

use crate::core::action::{Command, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::pipeline::Pipeline;
use crate::storage::Store;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent list scroll state, one per list view
    pub note_list: ListState,
    pub todo_list: ListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            note_list: ListState::default(),
            todo_list: ListState::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for text editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// What the loop does with one `Effect`. Returns `true` on quit.
fn apply_effect(effect: Effect, pipeline: &Pipeline) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Run(command) => {
            pipeline.submit(command);
            false
        }
    }
}

/// Run an interactive session until the user quits.
///
/// Nothing is saved on exit; edits that were never saved are dropped.
pub fn run(config: ResolvedConfig, store: Arc<dyn Store>) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    // Channel for result messages from the pipeline task
    let (tx, rx) = mpsc::channel();
    let pipeline = Pipeline::spawn(store, tx);
    for command in Command::startup() {
        pipeline.submit(command);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resizes only need the redraw; ratatui picks up the new size in draw()
            if let TuiEvent::Resize(cols, rows) = event {
                debug!("Resized to {}x{}", cols, rows);
                continue;
            }

            let Some(action) = keymap::action_for(&app, &event) else {
                continue;
            };
            if apply_effect(update(&mut app, action), &pipeline) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle pipeline results (loads, saves, deletes)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply_effect(update(&mut app, action), &pipeline) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Session ended");
    ratatui::restore();
    Ok(())
}
