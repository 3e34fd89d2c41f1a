//! Parallel evaluation of the whole dictionary against one letter multiset.
//!
//! The dictionary is split round-robin into one chunk per worker (word `i`
//! goes to chunk `i % n`), so chunk sizes differ by at most one regardless of
//! how the words cluster alphabetically. Each chunk is scanned on its own
//! rayon task into a local `Vec`, and the chunk results are unioned into a
//! set once every task has finished. Any failing chunk fails the whole scan.

use crate::errors::FinderError;
use crate::letters::LetterCount;
use crate::matcher::can_form;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Deduplicated matches, iterated in ascending order.
pub type ResultSet = BTreeSet<String>;

/// Shared flag that aborts a running evaluation between two words.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One worker's share of the dictionary, paired with the letters to test.
#[derive(Debug, Clone)]
pub struct WordCheckRequest<'a> {
    chunk: Vec<&'a str>,
    letters: &'a LetterCount,
}

impl<'a> WordCheckRequest<'a> {
    pub fn new(chunk: Vec<&'a str>, letters: &'a LetterCount) -> Self {
        Self { chunk, letters }
    }

    pub fn chunk(&self) -> &[&'a str] {
        &self.chunk
    }

    /// Scan the chunk, returning the words accepted by `accept` in chunk order.
    ///
    /// Returns `None` if `cancel` was raised before the scan finished.
    pub fn run<F>(&self, cancel: &CancelFlag, accept: &F) -> Option<Vec<String>>
    where
        F: Fn(&str, &LetterCount) -> bool,
    {
        let mut matches = Vec::new();
        for word in &self.chunk {
            if cancel.is_cancelled() {
                return None;
            }
            if accept(*word, self.letters) {
                matches.push((*word).to_string());
            }
        }
        Some(matches)
    }
}

/// Number of workers to use for the next evaluation.
///
/// Queried on every call so the count follows changes to the environment.
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Split `words` round-robin into `workers` requests.
///
/// Never produces more requests than there are words, and never fewer than
/// one unless `words` is empty.
pub fn partition<'a>(words: &'a [String], letters: &'a LetterCount, workers: usize) -> Vec<WordCheckRequest<'a>> {
    let n = workers.max(1).min(words.len());
    let mut chunks: Vec<Vec<&'a str>> = (0..n)
        .map(|_| Vec::with_capacity(words.len() / n + 1))
        .collect();

    for (i, word) in words.iter().enumerate() {
        chunks[i % n].push(word.as_str());
    }

    chunks
        .into_iter()
        .map(|chunk| WordCheckRequest::new(chunk, letters))
        .collect()
}

/// Evaluate every word in `words` against `letters` on `workers` threads.
///
/// # Errors
///
/// - [`FinderError::Evaluation`] if the thread pool cannot be built or a
///   chunk task panics
/// - [`FinderError::Cancelled`] if `cancel` is raised mid-scan
pub fn evaluate(
    words: &[String],
    letters: &LetterCount,
    workers: usize,
    cancel: &CancelFlag,
) -> Result<ResultSet, FinderError> {
    evaluate_with(words, letters, workers, cancel, can_form)
}

/// Like [`evaluate`], with `accept` deciding which words match instead of
/// [`can_form`].
pub fn evaluate_with<F>(
    words: &[String],
    letters: &LetterCount,
    workers: usize,
    cancel: &CancelFlag,
    accept: F,
) -> Result<ResultSet, FinderError>
where
    F: Fn(&str, &LetterCount) -> bool + Sync,
{
    if words.is_empty() {
        return Ok(ResultSet::new());
    }

    let requests = partition(words, letters, workers);
    log::debug!(
        "evaluating {} words for {letters} across {} chunks",
        words.len(),
        requests.len()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(requests.len())
        .build()
        .map_err(|e| FinderError::Evaluation {
            reason: format!("could not start workers: {e}"),
        })?;

    let outcomes: Vec<Result<Option<Vec<String>>, String>> = pool.install(|| {
        requests
            .par_iter()
            .enumerate()
            .map(|(i, request)| {
                panic::catch_unwind(AssertUnwindSafe(|| request.run(cancel, &accept)))
                    .map_err(|_| format!("chunk {i} panicked"))
            })
            .collect()
    });

    let mut results = ResultSet::new();
    for outcome in outcomes {
        match outcome {
            Ok(Some(matches)) => results.extend(matches),
            Ok(None) => return Err(FinderError::Cancelled),
            Err(reason) => return Err(FinderError::Evaluation { reason }),
        }
    }

    Ok(results)
}
