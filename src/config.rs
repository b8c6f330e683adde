//! Engine configuration: token filters and the article list.
//!
//! The word lists have canonical defaults but are carried as an explicit
//! value so hosts and tests can substitute their own.

use serde::{Deserialize, Serialize};

/// Word lists consumed by the tokenizer and sentence builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    /// Characters trimmed from both ends of each token (`_handler` → `handler`).
    pub invalid_leading_characters: Vec<char>,
    /// Tokens dropped outright, e.g. the `i` leaked from interface-prefixed names.
    pub invalid_words: Vec<String>,
    /// Low-content lead-in words removed before re-prefixing a sentence.
    pub articles: Vec<String>,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            invalid_leading_characters: vec!['_', '$'],
            invalid_words: vec!["i".to_string()],
            articles: [
                "a", "an", "the", "return", "returns", "gets", "or", "sets", "has", "is",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl DocConfig {
    /// Check whether a token is on the invalid-word list (exact match).
    pub(crate) fn is_invalid_word(&self, word: &str) -> bool {
        self.invalid_words.iter().any(|w| w == word)
    }

    /// Trim invalid leading/trailing characters from a token.
    pub(crate) fn trim_invalid(&self, word: &str) -> String {
        word.trim_matches(|c| self.invalid_leading_characters.contains(&c))
            .to_string()
    }

    /// Check whether a word is an article (case-insensitive).
    pub(crate) fn is_article(&self, word: &str) -> bool {
        self.articles.iter().any(|a| a.eq_ignore_ascii_case(word))
    }
}
