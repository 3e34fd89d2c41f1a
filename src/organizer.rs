//! Turning a sorted list of matches into length groups for display.

use std::collections::BTreeMap;

/// Capitalized words grouped by length, groups in ascending length order.
pub type GroupedResult = BTreeMap<usize, Vec<String>>;

/// Matches for one query, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FindResult {
    pub groups: GroupedResult,
    pub total_count: usize,
}

impl FindResult {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// All words, shortest group first.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.groups.values().flatten().map(String::as_str)
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Group sorted matches by length.
///
/// The group key is the length of the word before capitalization, and each
/// group keeps the order of `sorted_words`.
pub fn organize(sorted_words: &[String]) -> FindResult {
    let mut groups = GroupedResult::new();
    for word in sorted_words {
        groups
            .entry(word.chars().count())
            .or_default()
            .push(capitalize(word));
    }

    FindResult {
        groups,
        total_count: sorted_words.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cat"), "Cat");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_groups_ascend_by_length() {
        let words: Vec<String> = ["ace", "aced", "bead", "bed"].iter().map(|s| s.to_string()).collect();
        let result = organize(&words);

        let keys: Vec<usize> = result.groups.keys().copied().collect();
        assert_eq!(keys, vec![3, 4]);
        assert_eq!(result.groups[&3], vec!["Ace", "Bed"]);
        assert_eq!(result.groups[&4], vec!["Aced", "Bead"]);
        assert_eq!(result.total_count, 4);
    }
}
