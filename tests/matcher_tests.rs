use word_finder::{can_form, normalize_query, FinderError, LetterCount};

fn letters(query: &str) -> LetterCount {
    LetterCount::from_query(&normalize_query(query), 9).unwrap()
}

/// Reference check: every letter of `word` occurs at most as often as in `pool`.
fn contained_in(word: &str, pool: &str) -> bool {
    word.chars()
        .all(|c| word.matches(c).count() <= pool.matches(c).count())
}

#[test]
fn test_letter_count_basic() {
    let counts = letters("tacc");
    assert_eq!(counts.get('t'), 1);
    assert_eq!(counts.get('a'), 1);
    assert_eq!(counts.get('c'), 2);
    assert_eq!(counts.get('k'), 0);
    assert_eq!(counts.total(), 4);
    assert_eq!(counts.distinct(), 3);
}

#[test]
fn test_letter_count_strips_non_letters() {
    let counts = letters("  T-a c!1C\t");
    assert_eq!(counts, letters("tacc"));
}

#[test]
fn test_letter_count_only_present_letters() {
    let counts = letters("AAAA");
    let entries: Vec<(char, usize)> = counts.iter().collect();
    assert_eq!(entries, vec![('a', 4)]);
    assert!(counts.iter().all(|(_, count)| count >= 1));
}

#[test]
fn test_letter_count_ignores_non_ascii_letters() {
    let counts = letters("café");
    assert_eq!(counts.total(), 3);
    assert_eq!(counts.get('é'), 0);
}

#[test]
fn test_empty_input_is_invalid() {
    for raw in ["", "   ", "123 !?", "ÉÉÉ"] {
        let result = LetterCount::from_query(&normalize_query(raw), 9);
        assert!(matches!(result, Err(FinderError::InvalidInput)), "input {raw:?}");
    }
}

#[test]
fn test_input_too_long() {
    let result = LetterCount::from_query("abcdefghij", 9);
    assert!(matches!(result, Err(FinderError::InputTooLong { len: 10, max: 9 })));
}

#[test]
fn test_input_length_counts_only_letters() {
    // nine letters padded with punctuation stays under the ceiling
    let result = LetterCount::from_query("a-b-c-d-e-f-g-h-i", 9);
    assert!(result.is_ok());
}

#[test]
fn test_input_ceiling_is_configurable() {
    assert!(LetterCount::from_query("abcdefghijkl", 12).is_ok());
    assert!(LetterCount::from_query("abc", 2).is_err());
}

#[test]
fn test_can_form_scenario() {
    let counts = letters("tacc");
    assert!(can_form("cat", &counts));
    assert!(can_form("act", &counts));
    assert!(!can_form("tack", &counts), "needs a k");
    assert!(!can_form("tact", &counts), "needs two t's");
}

#[test]
fn test_can_form_repeated_letters() {
    let counts = letters("tacct");
    assert!(can_form("tact", &counts));
    assert!(!can_form("attack", &counts));
}

#[test]
fn test_can_form_rejects_foreign_characters() {
    let counts = letters("abc");
    assert!(!can_form("ab-c", &counts));
    assert!(!can_form("ABC", &counts));
}

#[test]
fn test_can_form_empty_word() {
    assert!(can_form("", &letters("a")));
}

#[test]
fn test_can_form_matches_reference_definition() {
    let pools = ["tacct", "listen", "aaaa", "strength", "quiz", "abcdefghi"];
    let words = [
        "cat", "act", "tact", "tack", "silent", "enlist", "tinsel", "lens", "aaa", "aaaaa", "tent",
        "zap", "quiz", "bad", "hide", "chief", "ghee",
    ];

    for pool in pools {
        let counts = letters(pool);
        for word in words {
            assert_eq!(
                can_form(word, &counts),
                contained_in(word, pool),
                "word {word} against {pool}"
            );
        }
    }
}

#[test]
fn test_counts_beyond_255_letters() {
    let pool = "a".repeat(300);
    let counts = LetterCount::from_query(&pool, 1000).unwrap();
    assert_eq!(counts.get('a'), 300);

    let fewer = LetterCount::from_query(&"a".repeat(255), 1000).unwrap();
    assert!(can_form(&"a".repeat(255), &fewer));
    assert!(!can_form(&"a".repeat(256), &fewer));
    assert!(!can_form(&"a".repeat(300), &fewer));
    assert!(can_form(&"a".repeat(300), &counts));
}
