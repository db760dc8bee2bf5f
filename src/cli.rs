use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::games::hangman::{self, discover_categories, Category};
use crate::logging;

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "🎩 Terminal hangman - pick a category, guess the word")]
#[command(version)]
pub struct Cli {
    /// Settings file (YAML). Defaults to ./hangterm.yaml when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing <category>.txt word lists
    #[arg(short, long, global = true)]
    pub words_dir: Option<PathBuf>,

    /// Seed for word selection (repeatable games)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play in the terminal (default)
    Play {
        /// Start straight in this category instead of the menu
        #[arg(short = 'C', long)]
        category: Option<String>,
    },
    /// List available categories
    List {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())
        .context("failed to load settings")?
        .with_overrides(cli.words_dir, cli.seed);

    match cli.command.unwrap_or(Commands::Play { category: None }) {
        Commands::Play { category } => {
            logging::init(&settings)?;
            let category = category.map(Category::new).transpose()?;
            hangman::run_game(&settings, category).await
        }
        Commands::List { json } => list(&settings, json).await,
    }
}

async fn list(settings: &Settings, json: bool) -> Result<()> {
    let categories = discover_categories(&settings.words_dir).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    if categories.is_empty() {
        println!("No categories in {}", settings.words_dir.display());
        return Ok(());
    }

    println!("🎮 Available categories:");
    println!();
    for category in &categories {
        println!("📦 {} ({})", category.display_name(), category.key());
    }
    Ok(())
}
