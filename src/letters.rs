//! Letter multisets built from raw user input.

use crate::errors::FinderError;
use std::fmt;

const ALPHABET_SIZE: usize = 26;

/// Trim and lowercase a raw query. The result is the cache key for the query.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Count of each letter a-z available to form words.
///
/// Letters absent from the input have no entry; every present letter has a
/// count of at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCount {
    counts: [usize; ALPHABET_SIZE],
}

impl LetterCount {
    /// Build the multiset for an already normalized query.
    ///
    /// Every character outside a-z is dropped first. Fails with
    /// [`FinderError::InvalidInput`] when nothing is left and with
    /// [`FinderError::InputTooLong`] when more than `max_letters` remain.
    pub fn from_query(normalized: &str, max_letters: usize) -> Result<Self, FinderError> {
        let letters: Vec<u8> = normalized
            .bytes()
            .filter(u8::is_ascii_lowercase)
            .collect();

        if letters.is_empty() {
            return Err(FinderError::InvalidInput);
        }
        if letters.len() > max_letters {
            return Err(FinderError::InputTooLong {
                len: letters.len(),
                max: max_letters,
            });
        }

        let mut counts = [0usize; ALPHABET_SIZE];
        for b in letters {
            counts[(b - b'a') as usize] += 1;
        }
        Ok(Self { counts })
    }

    /// Available count for `letter`, zero when absent or not a-z.
    pub fn get(&self, letter: char) -> usize {
        if letter.is_ascii_lowercase() {
            self.counts[(letter as u8 - b'a') as usize]
        } else {
            0
        }
    }

    pub(crate) fn get_byte(&self, b: u8) -> usize {
        if b.is_ascii_lowercase() {
            self.counts[(b - b'a') as usize]
        } else {
            0
        }
    }

    /// Present letters and their counts, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(i, count)| ((b'a' + i as u8) as char, *count))
    }

    /// Total number of letters in the multiset.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of distinct letters.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

impl fmt::Display for LetterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (letter, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{letter}:{count}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query_keeps_non_letters() {
        assert_eq!(normalize_query("  TaC-cT! \n"), "tac-ct!");
    }

    #[test]
    fn test_display() {
        let letters = LetterCount::from_query("tacct", 9).unwrap();
        assert_eq!(letters.to_string(), "{a:1, c:2, t:2}");
    }
}
