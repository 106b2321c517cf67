use std::collections::HashSet;

/// More than one character, letters only.
pub fn is_valid_word(word: &str) -> bool {
    word.chars().count() > 1 && word.chars().all(char::is_alphabetic)
}

pub fn is_palindrome(word: &str) -> bool {
    word.chars().eq(word.chars().rev())
}

/// A word whose reversal is a different word found in `dictionary`.
pub fn is_emordnilap(word: &str, dictionary: &HashSet<&str>) -> bool {
    let reversed: String = word.chars().rev().collect();
    reversed != word && dictionary.contains(reversed.as_str())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub palindromes: Vec<String>,
    pub emordnilaps: Vec<String>,
}

/// Split a raw dictionary into palindromes and emordnilaps, keeping input order.
///
/// Reversals are looked up against every input word, valid or not, but only
/// valid words end up in either list.
pub fn classify<S: AsRef<str>>(words: &[S]) -> Classification {
    let dictionary: HashSet<&str> = words.iter().map(|w| w.as_ref()).collect();
    let mut result = Classification::default();

    for word in words.iter().map(|w| w.as_ref()).filter(|w| is_valid_word(w)) {
        if is_palindrome(word) {
            result.palindromes.push(word.to_string());
        } else if is_emordnilap(word, &dictionary) {
            result.emordnilaps.push(word.to_string());
        }
    }

    result
}
