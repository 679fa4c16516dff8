use thiserror::Error;

use crate::spam::types::Label;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Stopwords not loaded")]
    StopwordsNotLoaded,

    #[error("Reference corpora not loaded")]
    CorpusNotLoaded,

    #[error("{0} corpus contains no documents")]
    EmptyCorpus(Label),

    #[error("Corpora are not balanced: {spam} spam vs {human} human documents")]
    UnbalancedCorpora { spam: usize, human: usize },

    #[error("Document contains no tokens")]
    EmptyDocument,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SpamError>;
