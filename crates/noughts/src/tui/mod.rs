//! Terminal window for tic-tac-toe.
//!
//! One thread, one loop: draw, block on the next terminal event, translate
//! it into a [`Command`], dispatch it to the [`App`], repeat.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};
pub use input::{Command, Direction, command_for_key, command_for_mouse, move_cursor};
pub use ui::{Hitmap, Target, draw};

use crate::config::ShellConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, info, instrument, warn};

/// Raw mode, alternate screen and mouse capture for the lifetime of the value.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore();
                return Err(e.into());
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore();
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
    }
}

fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to leave raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs the game window until the user quits.
#[instrument(skip_all)]
pub fn run(config: ShellConfig) -> Result<()> {
    let mut app = App::new(config)?;

    info!("Opening game window");
    let mut session = TerminalSession::enter()?;
    event_loop(&mut session.terminal, &mut app)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut hitmap = Hitmap::default();

    loop {
        terminal.draw(|frame| hitmap = ui::draw(frame, app))?;

        let command = match event::read()? {
            Event::Key(key) => input::command_for_key(key),
            Event::Mouse(mouse) => input::command_for_mouse(mouse, &hitmap),
            // Resizes and focus changes just redraw.
            _ => None,
        };

        if let Some(command) = command
            && app.dispatch(command) == Flow::Quit
        {
            return Ok(());
        }
    }
}
