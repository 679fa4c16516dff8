//! spam-rs: frequency-ratio spam classifier
//!
//! Classifies short text messages as spam or human by comparing their term
//! frequencies against two labeled reference corpora.
//!
//! # Pipeline
//!
//! - **Normalization**: split on non-word characters, lowercase, drop
//!   numeric tokens, remove stopwords
//! - **Scoring**: signed dot product of the message's term frequencies with
//!   every reference document's term frequencies (spam positive, human negative)
//! - **Labeling**: spam when the score is above the threshold
//!
//! # Example
//!
//! ```no_run
//! use spam_rs::config::Config;
//! use spam_rs::spam::SpamClassifier;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier = SpamClassifier::from_config(&Config::default())?;
//!
//!     let result = classifier.classify("WINNER!! Claim your free prize now");
//!     println!("{} ({})", result.label, result.score);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`text`]: Tokenization and stopword removal
//! - [`spam`]: Corpora, scoring and classification

pub mod config;
pub mod error;
pub mod spam;
pub mod text;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
pub use spam::{Classification, Label, SpamClassifier};
