//! Text normalization: tokenization followed by stopword removal

use std::sync::Arc;

use tracing::warn;

use super::stopwords::StopwordSet;
use super::tokenizer::tokenize;
use crate::error::{Result, SpamError};
use crate::spam::types::Token;

/// Drop every token present in `stopwords`, keeping the relative order of the rest.
///
/// Fails with [`SpamError::StopwordsNotLoaded`] when no stopword set is supplied.
pub fn remove_stopwords(tokens: Vec<Token>, stopwords: Option<&StopwordSet>) -> Result<Vec<Token>> {
    let stopwords = stopwords.ok_or(SpamError::StopwordsNotLoaded)?;
    Ok(filter_stopwords(tokens, stopwords))
}

fn filter_stopwords(tokens: Vec<Token>, stopwords: &StopwordSet) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| !stopwords.contains(token))
        .collect()
}

fn warn_if_empty(text: &str) {
    if text.trim().is_empty() {
        warn!("Preprocessing an empty message");
    }
}

/// Tokenize `text` and remove stopwords.
///
/// Empty or whitespace-only input is logged and yields an empty sequence.
pub fn preprocess(text: &str, stopwords: Option<&StopwordSet>) -> Result<Vec<Token>> {
    warn_if_empty(text);
    remove_stopwords(tokenize(text), stopwords)
}

/// Normalizer bound to a loaded stopword set
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: Arc<StopwordSet>,
}

impl Normalizer {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Preprocess a message; cannot fail since the stopwords are always present
    pub fn preprocess(&self, text: &str) -> Vec<Token> {
        warn_if_empty(text);
        filter_stopwords(tokenize(text), &self.stopwords)
    }
}
