//! The engine facade: dictionary, configuration and cache behind one query API.

use crate::cache::{CacheStats, ResultCache};
use crate::dictionary::Dictionary;
use crate::errors::FinderError;
use crate::evaluator::{self, CancelFlag};
use crate::letters::{normalize_query, LetterCount};
use crate::matcher::can_form;
use crate::organizer::{organize, FindResult};
use crate::{DEFAULT_MAX_INPUT_LETTERS, DEFAULT_MIN_WORD_LENGTH};
use std::path::Path;
use std::sync::Arc;

/// Tunables fixed when the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderConfig {
    /// Queries with more letters than this are rejected.
    pub max_input_letters: usize,
    /// Dictionary words shorter than this are dropped at load time.
    pub min_word_length: usize,
    /// Fixed worker count; `None` asks the OS on every query.
    pub workers: Option<usize>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_input_letters: DEFAULT_MAX_INPUT_LETTERS,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            workers: None,
        }
    }
}

/// Finds every dictionary word that can be spelled from a set of letters.
#[derive(Debug)]
pub struct WordFinder {
    config: FinderConfig,
    dictionary: Dictionary,
    cache: ResultCache,
}

impl WordFinder {
    /// An engine with an empty dictionary.
    pub fn new(config: FinderConfig) -> Self {
        Self::with_dictionary(config, Dictionary::empty())
    }

    pub fn with_dictionary(config: FinderConfig, dictionary: Dictionary) -> Self {
        Self {
            config,
            dictionary,
            cache: ResultCache::new(),
        }
    }

    /// Build an engine over a word list held in memory.
    pub fn from_words(config: FinderConfig, contents: &str) -> Self {
        let dictionary = Dictionary::parse(contents, config.min_word_length);
        Self::with_dictionary(config, dictionary)
    }

    /// Build an engine over the bundled word list.
    pub fn embedded(config: FinderConfig) -> Self {
        let dictionary = Dictionary::embedded(config.min_word_length);
        Self::with_dictionary(config, dictionary)
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Replace the dictionary with the contents of a word list file.
    ///
    /// On failure the dictionary is left empty and a warning is logged; the
    /// engine keeps answering queries, with no matches, until a later load
    /// succeeds. Cached results belong to the previous dictionary and are
    /// dropped either way.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<(), FinderError> {
        self.cache = ResultCache::new();
        match Dictionary::load_from_path(path, self.config.min_word_length) {
            Ok(dictionary) => {
                self.dictionary = dictionary;
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}; continuing with an empty dictionary");
                self.dictionary = Dictionary::empty();
                Err(e)
            }
        }
    }

    /// Find all words that can be formed from the letters in `raw_input`.
    ///
    /// # Errors
    ///
    /// - [`FinderError::InvalidInput`] if the input has no letters a-z
    /// - [`FinderError::InputTooLong`] if it has more than the configured maximum
    /// - [`FinderError::Evaluation`] if the parallel scan cannot complete
    pub fn find_words(&self, raw_input: &str) -> Result<FindResult, FinderError> {
        self.find_words_cancellable(raw_input, &CancelFlag::new())
    }

    /// Like [`WordFinder::find_words`], but aborts with
    /// [`FinderError::Cancelled`] once `cancel` is raised.
    pub fn find_words_cancellable(&self, raw_input: &str, cancel: &CancelFlag) -> Result<FindResult, FinderError> {
        self.find_with(raw_input, cancel, can_form)
    }

    fn find_with<F>(&self, raw_input: &str, cancel: &CancelFlag, accept: F) -> Result<FindResult, FinderError>
    where
        F: Fn(&str, &LetterCount) -> bool + Sync,
    {
        let key = normalize_query(raw_input);
        let letters = LetterCount::from_query(&key, self.config.max_input_letters)?;

        if let Some(words) = self.cache.get(&key) {
            return Ok(organize(&words));
        }

        let words = self.compute(&letters, cancel, accept)?;
        self.cache.put(key, Arc::clone(&words));
        Ok(organize(&words))
    }

    fn compute<F>(&self, letters: &LetterCount, cancel: &CancelFlag, accept: F) -> Result<Arc<[String]>, FinderError>
    where
        F: Fn(&str, &LetterCount) -> bool + Sync,
    {
        let workers = self.config.workers.unwrap_or_else(evaluator::available_workers);
        let shared = self.dictionary.shared();
        let matches = evaluator::evaluate_with(&shared, letters, workers, cancel, accept)?;
        Ok(matches.into_iter().collect())
    }
}
