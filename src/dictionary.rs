//! Loading and normalizing the word list.
//!
//! A dictionary is read once and never changes afterwards; it is stored as an
//! `Arc<[String]>` so every worker can share it without copying.
//!
//! Normalization of each line:
//! - surrounding whitespace is trimmed and the word is lowercased
//! - blank lines are skipped whatever the minimum length
//! - words shorter than the minimum length are dropped
//! - words with anything outside a-z are dropped
//! - repeated words are dropped, keeping the first occurrence

use crate::errors::FinderError;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Word list compiled into the binary.
const EMBEDDED_WORDS: &str = include_str!("../dictionary/dictionary.txt");

/// Ordered, normalized, read-only list of words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Arc<[String]>,
}

impl Dictionary {
    /// A dictionary with no words. Every query against it finds nothing.
    pub fn empty() -> Self {
        Self {
            words: Arc::from(Vec::new()),
        }
    }

    /// Parse a newline-separated word list held in memory.
    pub fn parse(contents: &str, min_word_length: usize) -> Self {
        let mut seen = HashSet::new();
        let words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let word = raw_line.trim().to_lowercase();
                if word.is_empty() || word.chars().count() < min_word_length {
                    return None;
                }
                if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                    return None;
                }
                Some(word)
            })
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self { words: words.into() }
    }

    /// Read and parse a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Load`] if the file is missing or unreadable.
    pub fn load_from_path<P: AsRef<Path>>(path: P, min_word_length: usize) -> Result<Self, FinderError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| FinderError::Load {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let dictionary = Self::parse(&data, min_word_length);
        log::info!("loaded {} words from '{}'", dictionary.len(), path_ref.display());
        Ok(dictionary)
    }

    /// The word list bundled with the crate.
    pub fn embedded(min_word_length: usize) -> Self {
        Self::parse(EMBEDDED_WORDS, min_word_length)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub(crate) fn shared(&self) -> Arc<[String]> {
        Arc::clone(&self.words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::empty()
    }
}
