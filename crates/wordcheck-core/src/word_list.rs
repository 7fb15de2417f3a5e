use std::collections::HashSet;
use std::path::Path;

use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Immutable set of allowed words, stored in canonical lowercase form.
///
/// Built once from a newline-delimited text asset and only read afterwards,
/// so it can be shared behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    name: String,
    words: HashSet<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("Word list not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WordList {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: HashSet::new(),
        }
    }

    /// Build from raw file content, one word per line
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let words = text
            .split('\n')
            .map(|line| DefaultPreprocessor.process(line))
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            name: name.into(),
            words,
        }
    }

    pub fn load_from_file(name: &str, path: &Path) -> Result<Self, WordListError> {
        tracing::info!("Loading word list from file: {}", path.display());
        if !path.exists() {
            return Err(WordListError::NotFound(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        let list = Self::from_text(name, &text);
        tracing::info!(
            "Using {} word list: {} allowed words",
            list.name.to_uppercase(),
            list.len()
        );
        Ok(list)
    }

    /// Like `load_from_file`, but a missing or unreadable file yields an empty list
    pub fn load_or_empty(name: &str, path: &Path) -> Self {
        Self::load_from_file(name, path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load '{name}' word list: {e}, no words will match");
            Self::empty(name)
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = DefaultPreprocessor.process(word);
        !word.is_empty() && self.words.contains(&word)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
