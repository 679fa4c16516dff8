//! Text normalization
//!
//! - [`tokenizer`]: ASCII word splitting, lowercasing, numeric filtering
//! - [`stopwords`]: stopword list loading and lookup
//! - [`normalizer`]: stopword removal and the full preprocessing pipeline

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::{preprocess, remove_stopwords, Normalizer};
pub use stopwords::StopwordSet;
pub use tokenizer::tokenize;
