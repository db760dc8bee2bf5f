use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use ratatui::Frame;
use tracing::warn;

use crate::core::renderer::GameRenderer;
use crate::core::screen::Screen;
use crate::games::hangman::error::HangmanError;
use crate::games::hangman::game::{GameEngine, Outcome, ResetMode, WordEntry};
use crate::games::hangman::renderer::{HangmanRenderer, HangmanView};
use crate::games::hangman::words::Category;

pub const WIN_MESSAGE: &str = "YOU WIN!";
pub const LOSS_MESSAGE: &str = "OOPS... YOU DIED!";

/// Leaving the game screen always goes back to category selection.
#[derive(Debug, PartialEq, Eq)]
pub struct BackToMenu;

/// Game screen for one category. Borrows the engine so the random source outlives it.
pub struct HangmanScreen<'e, R> {
    engine: &'e mut GameEngine<R>,
    renderer: HangmanRenderer,
    message: String,
}

impl<'e, R: Rng> HangmanScreen<'e, R> {
    /// Start a round with the loaded entries. Fails with `NoWordsAvailable` for an empty list.
    pub fn start(
        engine: &'e mut GameEngine<R>,
        category: Category,
        entries: Vec<WordEntry>,
    ) -> Result<Self, HangmanError> {
        engine
            .start_round(entries)
            .map_err(|e| e.in_category(&category))?;

        Ok(Self {
            engine,
            renderer: HangmanRenderer::new(category),
            message: String::from("Guess a letter!"),
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn guess(&mut self, letter: char) {
        self.message = match self.engine.guess(letter) {
            Ok(round) => match round.outcome() {
                Outcome::Won => WIN_MESSAGE.to_string(),
                Outcome::Lost => LOSS_MESSAGE.to_string(),
                Outcome::InProgress if round.contains(letter) => {
                    format!("Good guess! '{}' is in the word.", letter.to_ascii_uppercase())
                }
                Outcome::InProgress => format!(
                    "Sorry, '{}' is not in the word. {} tries left.",
                    letter.to_ascii_uppercase(),
                    round.mistakes_remaining()
                ),
            },
            Err(e) => Self::describe(e),
        };
    }

    /// Inline message for a failed action; anything the round cannot shrug off is logged too.
    fn describe(e: HangmanError) -> String {
        if !e.is_recoverable() {
            warn!(error = %e, "action failed");
        }
        e.to_string()
    }

    fn reset(&mut self, mode: ResetMode) {
        self.message = match self.engine.reset_round(mode) {
            Ok(_) => String::from("Guess a letter!"),
            Err(e) => Self::describe(e),
        };
    }

    fn outcome(&self) -> Outcome {
        self.engine
            .round()
            .map_or(Outcome::InProgress, |round| round.outcome())
    }
}

impl<R: Rng> Screen for HangmanScreen<'_, R> {
    type Exit = BackToMenu;

    fn handle_key(&mut self, key: KeyEvent) -> Option<BackToMenu> {
        let KeyCode::Char(c) = key.code else {
            return None;
        };

        match (self.outcome(), c.to_ascii_lowercase()) {
            (Outcome::InProgress, _) => self.guess(c),
            (Outcome::Won, 'n') => self.reset(ResetMode::NextWord),
            (Outcome::Lost, 'r') => self.reset(ResetMode::SameWord),
            (_, 'x') => {
                self.engine.end_round();
                return Some(BackToMenu);
            }
            // The round is over; letters no longer count
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame) {
        if let Some(round) = self.engine.round() {
            self.renderer.render(
                frame,
                &HangmanView {
                    round,
                    message: &self.message,
                },
            );
        }
    }
}
