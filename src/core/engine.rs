use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::core::screen::Screen;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Terminal event loop: draw, poll input, hand keys to the active screen.
pub struct Engine {
    poll_interval: Duration,
}

impl Engine {
    pub fn new() -> Self {
        Self { poll_interval: POLL_INTERVAL }
    }

    /// Run `screen` until it exits or the user presses Esc (`Ok(None)`).
    pub fn run<S: Screen>(&self, screen: &mut S, terminal: &mut DefaultTerminal) -> Result<Option<S::Exit>> {
        loop {
            terminal
                .draw(|f| screen.render(f))
                .context("failed to draw frame")?;

            // INPUT (blocking up to the poll interval, then redraw)
            if !event::poll(self.poll_interval)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Esc {
                debug!("escape pressed, leaving screen");
                return Ok(None);
            }
            if let Some(exit) = screen.handle_key(key) {
                return Ok(Some(exit));
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
