pub mod cli;
pub mod config;
pub mod core;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::config::Settings;
pub use crate::games::hangman::{Category, GameEngine, HangmanError, Outcome, ResetMode, RoundState, WordEntry};
