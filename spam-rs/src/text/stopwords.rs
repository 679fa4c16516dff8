//! Stopword list

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, SpamError};

/// Immutable set of lowercase stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from in-memory words, lowercasing each entry
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Load a stopword list with one entry per line
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let set = Self::new(content.lines());

        if set.is_empty() {
            return Err(SpamError::Config(format!(
                "Stopword list {} has no entries",
                path.display()
            )));
        }

        tracing::info!("Loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
