//! # Word Finder
//!
//! A multithreaded engine that finds every dictionary word which can be
//! spelled from a handful of letters, each letter used at most as often as
//! it was given.
//!
//! Queries are normalized, turned into a letter multiset, checked against
//! the dictionary in parallel chunks, and memoized per normalized input.
//!
//! ```
//! use word_finder::{FinderConfig, WordFinder};
//!
//! let finder = WordFinder::from_words(FinderConfig::default(), "cat\nact\nat\ntack\ntact");
//! let result = finder.find_words("tacc").unwrap();
//! assert_eq!(result.total_count, 2);
//! assert_eq!(result.groups[&3], vec!["Act", "Cat"]);
//! ```

pub mod cache;
pub mod dictionary;
pub mod errors;
pub mod evaluator;
pub mod finder;
pub mod letters;
pub mod log;
pub mod matcher;
pub mod organizer;

pub use cache::CacheStats;
pub use dictionary::Dictionary;
pub use errors::FinderError;
pub use evaluator::CancelFlag;
pub use finder::{FinderConfig, WordFinder};
pub use letters::{normalize_query, LetterCount};
pub use matcher::can_form;
pub use organizer::{FindResult, GroupedResult};

/// Default ceiling on the number of letters in a query
pub const DEFAULT_MAX_INPUT_LETTERS: usize = 9;

/// Default minimum length of a dictionary word
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
