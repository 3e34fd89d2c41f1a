//! Error types for the word finder engine.
//!
//! # Error Codes
//!
//! Each variant has a unique code for documentation lookup:
//!
//! - F001: `Load` (Dictionary source missing or unreadable)
//! - F002: `InvalidInput` (No letters left after normalization)
//! - F003: `InputTooLong` (More letters than the configured ceiling)
//! - F004: `Evaluation` (A parallel chunk task failed)
//! - F005: `Cancelled` (Evaluation aborted through a cancel flag)
//!
//! None of these are fatal: the engine stays usable after any of them.
//!
//! # Examples
//!
//! ```
//! use word_finder::{FinderError, WordFinder, FinderConfig};
//!
//! let finder = WordFinder::new(FinderConfig::default());
//! match finder.find_words("1234") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "F002");
//!         eprintln!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Every failure the engine can report to its caller.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("failed to load dictionary from '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no letters provided")]
    InvalidInput,

    #[error("too many letters: {len} (maximum is {max})")]
    InputTooLong { len: usize, max: usize },

    #[error("evaluation failed: {reason}")]
    Evaluation { reason: String },

    #[error("evaluation cancelled")]
    Cancelled,
}

impl FinderError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            FinderError::Load { .. } => "F001",
            FinderError::InvalidInput => "F002",
            FinderError::InputTooLong { .. } => "F003",
            FinderError::Evaluation { .. } => "F004",
            FinderError::Cancelled => "F005",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            FinderError::Load { .. } => Some("Check the path; the engine keeps running with an empty dictionary"),
            FinderError::InvalidInput => Some("Enter at least one letter a-z (e.g., 'tacct')"),
            FinderError::InputTooLong { .. } => Some("Use fewer letters or raise the ceiling with --max-letters"),
            FinderError::Evaluation { .. } => Some("The query can be retried"),
            FinderError::Cancelled => None,
        }
    }

    /// True for errors that mean the caller should ask for different input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, FinderError::InvalidInput | FinderError::InputTooLong { .. })
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self.help() {
            Some(help) => format!("{self} ({})\n{help}", self.code()),
            None => format!("{self} ({})", self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn one_of_each() -> Vec<FinderError> {
        vec![
            FinderError::Load {
                path: PathBuf::from("missing.txt"),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
            FinderError::InvalidInput,
            FinderError::InputTooLong { len: 12, max: 9 },
            FinderError::Evaluation { reason: "worker panicked".to_string() },
            FinderError::Cancelled,
        ]
    }

    #[test]
    fn test_error_codes_are_unique() {
        let codes: HashSet<&str> = one_of_each().iter().map(FinderError::code).collect();
        assert_eq!(codes.len(), 5);
        assert!(codes.iter().all(|c| c.starts_with('F')));
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = FinderError::InputTooLong { len: 12, max: 9 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("F003"));
        assert!(detailed.contains("maximum is 9"));
        assert!(detailed.contains("--max-letters"));
    }

    #[test]
    fn test_display_detailed_without_help() {
        assert_eq!(FinderError::Cancelled.display_detailed(), "evaluation cancelled (F005)");
    }

    #[test]
    fn test_load_error_keeps_source() {
        use std::error::Error;
        let err = &one_of_each()[0];
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_input_errors() {
        let flags: Vec<bool> = one_of_each().iter().map(FinderError::is_input_error).collect();
        assert_eq!(flags, vec![false, true, true, false, false]);
    }
}
