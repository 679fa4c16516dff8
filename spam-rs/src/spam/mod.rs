//! Spam scoring module
//!
//! Provides frequency-ratio scoring of messages against labeled spam and
//! human reference corpora.

pub mod classifier;
pub mod loader;
pub mod scorer;
pub mod types;

pub use classifier::{SpamClassifier, SpamClassifierBuilder};
pub use loader::{DatasetLoader, LoadSummary};
pub use scorer::{compute_score, is_spam_text, FrequencyScorer};
pub use types::*;
