//! Word tokenizer
//!
//! Splits on runs of non-word characters, where a word character is an ASCII
//! letter, an ASCII digit or `_`. Everything else, including non-ASCII
//! characters, separates tokens.

use crate::spam::types::Token;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_numeric(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

/// Tokenize text into lowercase words, dropping empty and all-digit tokens.
///
/// Order and duplicates are preserved.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty() && !is_numeric(s))
        .map(|s| s.to_ascii_lowercase())
        .collect()
}
