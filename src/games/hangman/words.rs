//! Word lists: one `WORD~hint` entry per line, one file per category.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::HangmanError;
use super::game::WordEntry;

const SEPARATOR: char = '~';
const WORD_LIST_EXTENSION: &str = "txt";

/// Characters that show up in exported word lists and must never reach a word or hint.
const INVISIBLE: [char; 2] = ['\u{FEFF}', '\u{200B}'];

/// Parse the raw contents of a word-list file.
///
/// Malformed lines (no `~`, or an empty word) are skipped. An empty result is valid.
pub fn parse_word_list(raw: &str) -> Vec<WordEntry> {
    let cleaned: String = raw.chars().filter(|c| !INVISIBLE.contains(c)).collect();

    cleaned
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let (word, hint) = line.split_once(SEPARATOR)?;
            WordEntry::new(word, hint)
        })
        .collect()
}

/// Key selecting a word list, e.g. `animals` for `animals.txt`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(key: impl Into<String>) -> Result<Self, HangmanError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(HangmanError::InvalidCategory(key));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn key(&self) -> &str {
        &self.0
    }

    /// `animals` -> `Animals`
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Location of this category's word list inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.0, WORD_LIST_EXTENSION))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Category {
    type Error = HangmanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

/// Read and parse `<dir>/<category>.txt`.
///
/// Only I/O fails here; a file with no usable lines yields an empty list.
pub async fn load_word_list(dir: &Path, category: &Category) -> Result<Vec<WordEntry>, HangmanError> {
    let path = category.path_in(dir);
    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(source) => {
            warn!(category = %category, path = %path.display(), error = %source, "word list unavailable");
            return Err(HangmanError::ResourceUnavailable {
                category: category.key().to_string(),
                path,
                source,
            });
        }
    };

    let entries = parse_word_list(&raw);
    debug!(category = %category, count = entries.len(), "parsed word list");
    Ok(entries)
}

/// Every `*.txt` file in `dir` is a category. Sorted by key.
pub async fn discover_categories(dir: &Path) -> Result<Vec<Category>, HangmanError> {
    let unavailable = |source: std::io::Error| HangmanError::ResourceUnavailable {
        category: String::from("*"),
        path: dir.to_path_buf(),
        source,
    };

    let mut read_dir = tokio::fs::read_dir(dir).await.map_err(unavailable)?;
    let mut categories = Vec::new();

    while let Some(entry) = read_dir.next_entry().await.map_err(unavailable)? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(WORD_LIST_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if let Ok(category) = Category::new(stem) {
                categories.push(category);
            }
        }
    }

    categories.sort();
    Ok(categories)
}
