//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SpamError};
use crate::spam::types::DEFAULT_THRESHOLD;

/// Main classifier configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Scoring configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Reference data locations
    #[serde(default)]
    pub data: DataConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scoring configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Score above which a message is labeled spam
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Reference data configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Stopword list, one entry per line
    #[serde(default = "default_stopwords_path")]
    pub stopwords_path: String,
    /// Labeled dataset (label,message)
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    /// Label marking spam rows
    #[serde(default = "default_spam_label")]
    pub spam_label: String,
    /// Label marking human rows
    #[serde(default = "default_ham_label")]
    pub ham_label: String,
    /// Seed for the corpus shuffle before truncation
    #[serde(default = "default_shuffle_seed")]
    pub shuffle_seed: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_stopwords_path() -> String {
    "STOPWORDS.txt".to_string()
}

fn default_dataset_path() -> String {
    "spam.csv".to_string()
}

fn default_spam_label() -> String {
    "spam".to_string()
}

fn default_ham_label() -> String {
    "ham".to_string()
}

fn default_shuffle_seed() -> u64 {
    67
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            stopwords_path: default_stopwords_path(),
            dataset_path: default_dataset_path(),
            spam_label: default_spam_label(),
            ham_label: default_ham_label(),
            shuffle_seed: default_shuffle_seed(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.classifier.threshold.is_finite() {
            return Err(SpamError::Config(format!(
                "Threshold must be finite, got {}",
                self.classifier.threshold
            )));
        }

        if self.data.stopwords_path.trim().is_empty() {
            return Err(SpamError::Config("No stopwords path configured".to_string()));
        }
        if self.data.dataset_path.trim().is_empty() {
            return Err(SpamError::Config("No dataset path configured".to_string()));
        }

        let spam = self.data.spam_label.trim();
        let ham = self.data.ham_label.trim();
        if spam.is_empty() || ham.is_empty() {
            return Err(SpamError::Config("Labels must not be empty".to_string()));
        }
        if spam == ham {
            return Err(SpamError::Config(format!(
                "Spam and ham labels must differ, both are '{}'",
                spam
            )));
        }

        Ok(())
    }
}
