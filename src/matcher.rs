//! Sub-multiset containment check between a word and the available letters.

use crate::letters::LetterCount;

/// Check whether `word` can be spelled from `letters`.
///
/// Walks the word once, keeping a running count per letter, and bails out
/// as soon as any letter is used more often than it is available. Letters
/// outside a-z are never available.
pub fn can_form(word: &str, letters: &LetterCount) -> bool {
    let mut used = [0usize; 26];

    for b in word.bytes() {
        if !b.is_ascii_lowercase() {
            return false;
        }
        let slot = &mut used[(b - b'a') as usize];
        *slot += 1;
        if *slot > letters.get_byte(b) {
            return false;
        }
    }

    true
}
