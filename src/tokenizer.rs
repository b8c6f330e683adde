//! Identifier tokenizer: camelCase/PascalCase splitting with token cleanup.
//!
//! `VogonConstructorFleet` → `["vogon", "constructor", "fleet"]`. Splits
//! before an uppercase letter that follows a lowercase letter, and before the
//! final uppercase letter of an uppercase run that is followed by lowercase
//! (`XMLParser` → `xml parser`).

use crate::config::DocConfig;

/// Split an identifier into lower-case word tokens.
///
/// Each token is trimmed of configured invalid characters, and tokens on the
/// invalid-word list are dropped. An empty identifier yields an empty vec.
pub fn tokenize(identifier: &str, config: &DocConfig) -> Vec<String> {
    split_words(identifier)
        .into_iter()
        .map(|w| config.trim_invalid(&w.to_lowercase()))
        .filter(|w| !w.is_empty() && !config.is_invalid_word(w))
        .collect()
}

/// Raw camel-case split, preserving case and punctuation.
fn split_words(identifier: &str) -> Vec<String> {
    let chars: Vec<char> = identifier.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && is_boundary(&chars, i) && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// A word boundary falls before an uppercase letter preceded by lowercase, or
/// before the last uppercase letter of a run when lowercase follows it.
fn is_boundary(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    if !c.is_uppercase() {
        return false;
    }
    let prev = chars[i - 1];
    prev.is_lowercase()
        || (prev.is_uppercase() && chars.get(i + 1).is_some_and(|n| n.is_lowercase()))
}
