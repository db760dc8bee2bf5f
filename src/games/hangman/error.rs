use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading words or playing a round.
///
/// Winning and losing are not errors; they are [`Outcome`](super::Outcome) values.
#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("Word list for category '{category}' is unavailable. Path: '{}'.", .path.display())]
    ResourceUnavailable {
        category: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No words available{}.", .category.as_ref().map(|c| format!(" in category '{c}'")).unwrap_or_default())]
    NoWordsAvailable { category: Option<String> },
    #[error("Invalid guess '{0}'. Please guess a letter A-Z.")]
    InvalidInput(char),
    #[error("Invalid category '{0}'. A category key cannot be empty.")]
    InvalidCategory(String),
    #[error("No round is in progress. Start a round first.")]
    NoActiveRound,
}

impl HangmanError {
    /// Attach the category to a `NoWordsAvailable` raised without one.
    pub fn in_category(self, category: &super::Category) -> Self {
        match self {
            Self::NoWordsAvailable { category: None } => Self::NoWordsAvailable {
                category: Some(category.key().to_string()),
            },
            other => other,
        }
    }

    /// True for the errors that leave the current round untouched and can be shown inline.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NoActiveRound)
    }
}
