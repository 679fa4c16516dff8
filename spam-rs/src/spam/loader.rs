//! Reference dataset loader
//!
//! Reads a two-column `label,message` dataset, preprocesses every message,
//! and builds balanced spam and human corpora.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::types::{Corpus, Document, ReferenceCorpora};
use crate::config::DataConfig;
use crate::error::Result;
use crate::text::Normalizer;

/// Row counts gathered while reading a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows read
    pub rows: usize,
    /// Rows with fewer than two columns
    pub malformed: usize,
    /// Rows whose label is neither spam nor ham
    pub unlabeled: usize,
    /// Rows that preprocess to no tokens
    pub empty: usize,
    /// Spam documents before balancing
    pub spam: usize,
    /// Human documents before balancing
    pub human: usize,
    /// Documents kept per corpus after balancing
    pub kept: usize,
}

/// Dataset loader
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    spam_label: String,
    ham_label: String,
    seed: u64,
}

impl DatasetLoader {
    pub fn new(spam_label: impl Into<String>, ham_label: impl Into<String>, seed: u64) -> Self {
        Self {
            spam_label: spam_label.into(),
            ham_label: ham_label.into(),
            seed,
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(
            config.spam_label.trim(),
            config.ham_label.trim(),
            config.shuffle_seed,
        )
    }

    /// Load corpora from a dataset file
    pub fn load<P: AsRef<Path>>(&self, path: P, normalizer: &Normalizer) -> Result<ReferenceCorpora> {
        let path = path.as_ref();
        info!("Loading dataset from {}", path.display());

        let file = std::fs::File::open(path)?;
        let (corpora, _) = self.load_reader(file, normalizer)?;
        Ok(corpora)
    }

    /// Load corpora from any reader, returning the row summary alongside
    pub fn load_reader<R: Read>(
        &self,
        reader: R,
        normalizer: &Normalizer,
    ) -> Result<(ReferenceCorpora, LoadSummary)> {
        // One row per line; quotes are only stripped when they wrap the whole message
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut summary = LoadSummary::default();
        let mut spam = Vec::new();
        let mut human = Vec::new();

        for record in csv_reader.byte_records() {
            let record = record?;
            summary.rows += 1;

            if record.len() < 2 {
                summary.malformed += 1;
                continue;
            }

            let label = String::from_utf8_lossy(&record[0]);
            let label = label.trim();
            let target = if label == self.spam_label {
                &mut spam
            } else if label == self.ham_label {
                &mut human
            } else {
                debug!("Skipping row {} with label '{}'", summary.rows, label);
                summary.unlabeled += 1;
                continue;
            };

            let message = record
                .iter()
                .skip(1)
                .map(String::from_utf8_lossy)
                .collect::<Vec<_>>()
                .join(",");

            let tokens = normalizer.preprocess(strip_quotes(message.trim()));
            if tokens.is_empty() {
                summary.empty += 1;
                continue;
            }

            target.push(Document::new(tokens)?);
        }

        summary.spam = spam.len();
        summary.human = human.len();

        let (spam, human) = balance(spam, human, self.seed);
        summary.kept = spam.len();

        info!(
            rows = summary.rows,
            spam = summary.spam,
            human = summary.human,
            skipped = summary.malformed + summary.unlabeled + summary.empty,
            kept = summary.kept,
            "Dataset loaded"
        );

        let corpora = ReferenceCorpora::new(Corpus::new(spam), Corpus::new(human))?;
        Ok((corpora, summary))
    }
}

fn strip_quotes(message: &str) -> &str {
    message
        .strip_prefix('"')
        .and_then(|m| m.strip_suffix('"'))
        .unwrap_or(message)
}

/// Shuffle both lists with the same seed and truncate them to the shorter length
pub fn balance(
    mut spam: Vec<Document>,
    mut human: Vec<Document>,
    seed: u64,
) -> (Vec<Document>, Vec<Document>) {
    let size = spam.len().min(human.len());

    spam.shuffle(&mut StdRng::seed_from_u64(seed));
    human.shuffle(&mut StdRng::seed_from_u64(seed));

    spam.truncate(size);
    human.truncate(size);

    (spam, human)
}
