use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

const CONFIG_NAME: &str = "hangterm";
const ENV_PREFIX: &str = "HANGTERM";
const DEFAULT_WORDS_DIR: &str = "hangman_words";
const DEFAULT_LOG_FILE: &str = "hangterm.log";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory holding one `<category>.txt` word list per category.
    pub words_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_filter: String,
    /// Fixed seed for word selection; random when absent.
    pub seed: Option<u64>,
}

impl Settings {
    /// Defaults, then `hangterm.yaml` (or the given file, which must exist), then `HANGTERM_*`.
    pub fn load(path: Option<&Path>) -> Result<Settings, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_NAME).required(false),
        };

        let config = config::Config::builder()
            .set_default("words_dir", DEFAULT_WORDS_DIR)?
            .set_default("log_file", DEFAULT_LOG_FILE)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        config.try_deserialize::<Settings>()
    }

    /// Command-line flags win over every other layer.
    pub fn with_overrides(mut self, words_dir: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(words_dir) = words_dir {
            self.words_dir = words_dir;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}
