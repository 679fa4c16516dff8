//! Spam types and data structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, SpamError};

/// Normalized word produced by the tokenizer
pub type Token = String;

/// Empirically chosen score cutoff between human and spam
pub const DEFAULT_THRESHOLD: f64 = 0.7787889031513116;

/// Classification label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Human,
}

impl Label {
    pub fn from_spam(is_spam: bool) -> Self {
        if is_spam {
            Label::Spam
        } else {
            Label::Human
        }
    }

    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Spam => write!(f, "Spam"),
            Label::Human => write!(f, "Human"),
        }
    }
}

/// One preprocessed message with its term counts
///
/// A document always holds at least one token, so per-document
/// frequency ratios never divide by zero.
#[derive(Debug, Clone)]
pub struct Document {
    tokens: Vec<Token>,
    counts: HashMap<Token, usize>,
}

impl Document {
    pub fn new(tokens: Vec<Token>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(SpamError::EmptyDocument);
        }

        let mut counts = HashMap::new();
        for token in &tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }

        Ok(Self { tokens, counts })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a constructed document
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Occurrences of `token` in this document
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Share of this document made up of `token`
    pub fn ratio(&self, token: &str) -> f64 {
        self.count(token) as f64 / self.len() as f64
    }

    /// Distinct tokens in this document
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

/// Ordered collection of documents sharing a label
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Build a corpus from raw token lists, rejecting empty ones
    pub fn from_token_lists<I>(lists: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<Token>>,
    {
        let documents = lists
            .into_iter()
            .map(Document::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn token_total(&self) -> usize {
        self.documents.iter().map(Document::len).sum()
    }

    fn vocabulary_size(&self) -> usize {
        self.documents
            .iter()
            .flat_map(Document::vocabulary)
            .collect::<std::collections::HashSet<_>>()
            .len()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// The labeled spam and human corpora, equal in size
#[derive(Debug, Clone)]
pub struct ReferenceCorpora {
    spam: Corpus,
    human: Corpus,
}

impl ReferenceCorpora {
    pub fn new(spam: Corpus, human: Corpus) -> Result<Self> {
        if spam.is_empty() {
            return Err(SpamError::EmptyCorpus(Label::Spam));
        }
        if human.is_empty() {
            return Err(SpamError::EmptyCorpus(Label::Human));
        }
        if spam.len() != human.len() {
            return Err(SpamError::UnbalancedCorpora {
                spam: spam.len(),
                human: human.len(),
            });
        }

        Ok(Self { spam, human })
    }

    pub fn spam(&self) -> &Corpus {
        &self.spam
    }

    pub fn human(&self) -> &Corpus {
        &self.human
    }

    pub fn get(&self, label: Label) -> &Corpus {
        match label {
            Label::Spam => &self.spam,
            Label::Human => &self.human,
        }
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            spam_documents: self.spam.len(),
            human_documents: self.human.len(),
            spam_tokens: self.spam.token_total(),
            human_tokens: self.human.token_total(),
            spam_vocabulary: self.spam.vocabulary_size(),
            human_vocabulary: self.human.vocabulary_size(),
        }
    }
}

/// Reference corpora statistics
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    /// Documents in the spam corpus
    pub spam_documents: usize,
    /// Documents in the human corpus
    pub human_documents: usize,
    /// Total tokens across spam documents
    pub spam_tokens: usize,
    /// Total tokens across human documents
    pub human_tokens: usize,
    /// Distinct tokens in the spam corpus
    pub spam_vocabulary: usize,
    /// Distinct tokens in the human corpus
    pub human_vocabulary: usize,
}

/// Result of classifying one message
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// Similarity score, higher is more spam-like
    pub score: f64,
    /// Label after applying the threshold
    pub label: Label,
    /// Is this message spam (score > threshold)
    pub is_spam: bool,
    /// Preprocessed tokens that were scored
    pub tokens: Vec<Token>,
}

/// Share of the score attributable to one distinct token
#[derive(Debug, Clone, Serialize)]
pub struct TokenContribution {
    /// Token
    pub token: Token,
    /// Occurrences in the scored message
    pub occurrences: usize,
    /// Score contribution, negative when the token leans human
    pub contribution: f64,
}
