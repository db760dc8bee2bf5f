/// Hangman: category word lists, the round state machine and its terminal screen.
pub mod error;
pub mod game;
pub mod renderer;
pub mod screen;
pub mod words;

pub use error::HangmanError;
pub use game::{compute_reveal, GameEngine, Outcome, ResetMode, RoundState, WordEntry, BLANK, MISTAKE_LIMIT};
pub use screen::HangmanScreen;
pub use words::{discover_categories, load_word_list, parse_word_list, Category};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use ratatui::DefaultTerminal;
use tokio::task::block_in_place;
use tracing::{info, warn};

use crate::config::Settings;
use crate::core::engine::Engine;
use crate::core::menu::{CategoryMenu, MenuChoice};

/// Run the menu -> game loop until the player quits.
///
/// With `category` set the first round skips the menu.
pub async fn run_game(settings: &Settings, category: Option<Category>) -> Result<()> {
    let categories = discover_categories(&settings.words_dir)
        .await
        .with_context(|| format!("cannot list categories in {}", settings.words_dir.display()))?;
    info!(count = categories.len(), dir = %settings.words_dir.display(), "categories discovered");

    let mut engine = match settings.seed {
        Some(seed) => GameEngine::seeded(seed),
        None => GameEngine::from_entropy(),
    };

    let mut terminal = ratatui::init();
    let result = play(&mut terminal, settings, &mut engine, categories, category).await;
    ratatui::restore();
    result
}

/// Word lists load asynchronously; the terminal loop itself blocks on input polling,
/// so each screen runs under `block_in_place` to hand the worker's other tasks off.
async fn play(
    terminal: &mut DefaultTerminal,
    settings: &Settings,
    engine: &mut GameEngine<StdRng>,
    categories: Vec<Category>,
    mut pending: Option<Category>,
) -> Result<()> {
    let runner = Engine::new();
    let mut menu = CategoryMenu::new(categories);

    loop {
        let category = match pending.take() {
            Some(category) => category,
            None => match block_in_place(|| runner.run(&mut menu, terminal))? {
                Some(MenuChoice::Play(category)) => category,
                Some(MenuChoice::Quit) | None => return Ok(()),
            },
        };

        let entries = match load_word_list(&settings.words_dir, &category).await {
            Ok(entries) => entries,
            Err(e) => {
                menu.set_status(format!("Category '{}' is unavailable.", category.display_name()));
                warn!(error = %e, "cannot start round");
                continue;
            }
        };

        let mut screen = match HangmanScreen::start(engine, category, entries) {
            Ok(screen) => screen,
            Err(e) => {
                menu.set_status(e.to_string());
                warn!(error = %e, "cannot start round");
                continue;
            }
        };

        block_in_place(|| runner.run(&mut screen, terminal))?;
        drop(screen);
        engine.end_round();
    }
}
