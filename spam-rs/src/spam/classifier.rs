//! Spam classifier
//!
//! Bundles the stopword set, the reference corpora and the threshold into
//! one immutable value. Every dependency is checked when the classifier is
//! built, so a classifier that exists can always score.

use std::sync::Arc;

use tracing::info;

use super::loader::DatasetLoader;
use super::scorer::FrequencyScorer;
use super::types::*;
use crate::config::Config;
use crate::error::{Result, SpamError};
use crate::text::{Normalizer, StopwordSet};

/// Spam classifier
///
/// Cheap to clone; clones share the loaded reference data.
#[derive(Debug, Clone)]
pub struct SpamClassifier {
    normalizer: Normalizer,
    corpora: Arc<ReferenceCorpora>,
    scorer: FrequencyScorer,
}

impl SpamClassifier {
    pub fn builder() -> SpamClassifierBuilder {
        SpamClassifierBuilder::default()
    }

    /// Load stopwords and the labeled dataset named by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let stopwords = Arc::new(StopwordSet::from_file(&config.data.stopwords_path)?);
        let normalizer = Normalizer::new(stopwords.clone());
        let corpora = DatasetLoader::from_config(&config.data)
            .load(&config.data.dataset_path, &normalizer)?;

        let classifier = Self::builder()
            .stopwords(stopwords)
            .corpora(corpora)
            .threshold(config.classifier.threshold)
            .build()?;

        let stats = classifier.stats();
        info!(
            spam_documents = stats.spam_documents,
            human_documents = stats.human_documents,
            spam_vocabulary = stats.spam_vocabulary,
            human_vocabulary = stats.human_vocabulary,
            threshold = classifier.threshold(),
            "Classifier ready"
        );

        Ok(classifier)
    }

    /// Preprocess a raw message
    pub fn preprocess(&self, text: &str) -> Vec<Token> {
        self.normalizer.preprocess(text)
    }

    /// Score a raw message
    pub fn score(&self, text: &str) -> f64 {
        self.scorer.score(&self.preprocess(text), &self.corpora)
    }

    /// Classify a raw message
    pub fn classify(&self, text: &str) -> Classification {
        self.classify_tokens(self.preprocess(text))
    }

    /// Classify an already preprocessed message
    pub fn classify_tokens(&self, tokens: Vec<Token>) -> Classification {
        let score = self.scorer.score(&tokens, &self.corpora);
        let is_spam = self.scorer.is_spam(score);

        Classification {
            score,
            label: Label::from_spam(is_spam),
            is_spam,
            tokens,
        }
    }

    /// Per-token breakdown of a raw message's score
    pub fn explain(&self, text: &str) -> Vec<TokenContribution> {
        self.scorer.explain(&self.preprocess(text), &self.corpora)
    }

    pub fn threshold(&self) -> f64 {
        self.scorer.threshold()
    }

    pub fn corpora(&self) -> &ReferenceCorpora {
        &self.corpora
    }

    pub fn stopwords(&self) -> &StopwordSet {
        self.normalizer.stopwords()
    }

    pub fn stats(&self) -> CorpusStats {
        self.corpora.stats()
    }
}

/// Builder for [`SpamClassifier`]
#[derive(Debug, Default)]
pub struct SpamClassifierBuilder {
    stopwords: Option<Arc<StopwordSet>>,
    corpora: Option<Arc<ReferenceCorpora>>,
    threshold: Option<f64>,
}

impl SpamClassifierBuilder {
    pub fn stopwords(mut self, stopwords: impl Into<Arc<StopwordSet>>) -> Self {
        self.stopwords = Some(stopwords.into());
        self
    }

    pub fn corpora(mut self, corpora: impl Into<Arc<ReferenceCorpora>>) -> Self {
        self.corpora = Some(corpora.into());
        self
    }

    /// Override the default threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Result<SpamClassifier> {
        let stopwords = self.stopwords.ok_or(SpamError::StopwordsNotLoaded)?;
        let corpora = self.corpora.ok_or(SpamError::CorpusNotLoaded)?;
        let threshold = self.threshold.unwrap_or(DEFAULT_THRESHOLD);

        if !threshold.is_finite() {
            return Err(SpamError::Config(format!(
                "Threshold must be finite, got {}",
                threshold
            )));
        }

        Ok(SpamClassifier {
            normalizer: Normalizer::new(stopwords),
            corpora,
            scorer: FrequencyScorer::new(threshold),
        })
    }
}
