use std::iter::repeat_n;

use itertools::Itertools;

use crate::automaton::Language;

/// Iterates over all words over `alphabet` of length `0..max_word_length`,
/// shortest first.
pub fn words(alphabet: &[char], max_word_length: usize) -> impl Iterator<Item = String> + '_ {
    (0..max_word_length).flat_map(move |length| {
        let words: Box<dyn Iterator<Item = String>> = if length == 0 {
            Box::new(std::iter::once(String::new()))
        } else {
            Box::new(
                repeat_n(alphabet.iter(), length)
                    .multi_cartesian_product()
                    .map(|word| word.into_iter().collect::<String>()),
            )
        };
        words
    })
}

/// Checks if two automata accept the same language.
/// This is done by checking if the alphabets are the same and then checking if
/// the automata accept the same words up to a certain length.
pub fn same_language(a: &impl Language, b: &impl Language, max_word_length: usize) -> bool {
    // first we need to check if the alphabets are the same
    if a.alphabet() != b.alphabet() {
        return false;
    }

    words(a.alphabet().as_slice(), max_word_length)
        .all(|word| a.accepts(word.chars()) == b.accepts(word.chars()))
}

pub fn assert_same_language(a: &impl Language, b: &impl Language, max_word_length: usize) {
    if a.alphabet() != b.alphabet() {
        panic!(
            "Alphabets are not the same: {} and {}",
            a.alphabet(),
            b.alphabet()
        );
    }

    for word in words(a.alphabet().as_slice(), max_word_length) {
        match (a.accepts(word.chars()), b.accepts(word.chars())) {
            (true, false) => {
                panic!(
                    "{:?} is accepted by automaton `a` but not by automaton `b`. Thus their languages are not equal.",
                    word
                );
            }
            (false, true) => {
                panic!(
                    "{:?} is accepted by automaton `b` but not by automaton `a`. Thus their languages are not equal.",
                    word
                );
            }
            _ => {}
        }
    }
}

#[test]
fn test_words() {
    let all = words(&['a', 'b'], 3).collect::<Vec<_>>();
    assert_eq!(all, vec!["", "a", "b", "aa", "ab", "ba", "bb"]);
}
