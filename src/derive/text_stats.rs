//! Text derivations: transforms and word/letter analysis.
//!
//! Character counts are Unicode scalar values (`chars().count()`), everywhere.
//! Reversal reverses scalar values.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];
const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

/// Number of characters in `text`.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// `text` with its characters in reverse order.
pub fn reversed(text: &str) -> String {
    text.chars().rev().collect()
}

/// Words of the trimmed text, split on whitespace runs.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Word and letter statistics for one input string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextStats {
    pub words: Vec<String>,
    pub vowels: usize,
    pub consonants: usize,
    pub chars: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let lower = text.to_lowercase();
        let mut vowels = 0;
        let mut consonants = 0;
        for c in lower.chars() {
            if VOWELS.contains(&c) {
                vowels += 1;
            } else if CONSONANTS.contains(&c) {
                consonants += 1;
            }
        }

        Self {
            words: words(text).into_iter().map(str::to_string).collect(),
            vowels,
            consonants,
            chars: char_count(text),
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
