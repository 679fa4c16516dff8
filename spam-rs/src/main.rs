//! spam-rs: interactive spam classifier
//!
//! Loads the stopword list and labeled dataset, then classifies each line
//! read from stdin until `0` or end of input.

use clap::Parser;
use spam_rs::config::Config;
use spam_rs::spam::{Classification, SpamClassifier};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const BANNER: &str = "\
===========================================================================================
NLP Spam Classifier
===========================================================================================
Instructions:
- Enter a message to classify it as spam or human.
- Type 0 and press Enter to exit.
- The higher the score, the more similar the text is to spam.
- Score ranges from negative infinity to infinity.
- Stopwords from: https://gist.github.com/sebleier/554280
- Spam/Ham dataset from: https://www.kaggle.com/datasets/uciml/sms-spam-collection-dataset
===========================================================================================
";

#[derive(Parser)]
#[command(name = "spam-rs")]
#[command(about = "Classify messages as spam or human", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stopword list, one entry per line
    #[arg(long)]
    stopwords: Option<String>,

    /// Labeled dataset (label,message)
    #[arg(long)]
    dataset: Option<String>,

    /// Label marking spam rows
    #[arg(long)]
    spam_label: Option<String>,

    /// Label marking human rows
    #[arg(long)]
    ham_label: Option<String>,

    /// Score above which a message is spam
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Seed for corpus balancing
    #[arg(long)]
    seed: Option<u64>,

    /// Print each classification as a JSON line
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(path) = &self.stopwords {
            config.data.stopwords_path = path.clone();
        }
        if let Some(path) = &self.dataset {
            config.data.dataset_path = path.clone();
        }
        if let Some(label) = &self.spam_label {
            config.data.spam_label = label.clone();
        }
        if let Some(label) = &self.ham_label {
            config.data.ham_label = label.clone();
        }
        if let Some(threshold) = self.threshold {
            config.classifier.threshold = threshold;
        }
        if let Some(seed) = self.seed {
            config.data.shuffle_seed = seed;
        }

        config.validate()?;
        Ok(config)
    }
}

// Debug formatting keeps the decimal point on whole scores ("0.0", not "0")
fn render(result: &Classification, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string(result)?);
    }

    let verdict = if result.is_spam {
        "[SPAM] This text is classified as spam."
    } else {
        "[HUMAN] This text is classified as human."
    };
    Ok(format!("Score: {:?}\n{}\n", result.score, verdict))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("spam_rs={}", config.logging.level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting spam-rs v{}", env!("CARGO_PKG_VERSION"));

    let classifier = SpamClassifier::from_config(&config)?;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !cli.json {
        stdout.write_all(BANNER.as_bytes()).await?;
    }

    loop {
        if !cli.json {
            stdout.write_all(b"Input your text or 0: ").await?;
            stdout.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        if input == "0" {
            break;
        }
        if input.is_empty() {
            if !cli.json {
                stdout.write_all(b"Please enter a non-empty message.\n").await?;
            }
            continue;
        }

        let result = classifier.classify(input);
        let output = render(&result, cli.json)?;
        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    if !cli.json {
        stdout
            .write_all(b"\nProgram has ended. Thank you for using the Spam Classifier.\n")
            .await?;
        stdout.flush().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spam_rs::spam::Label;

    fn classification(score: f64, is_spam: bool) -> Classification {
        Classification {
            score,
            label: Label::from_spam(is_spam),
            is_spam,
            tokens: vec![],
        }
    }

    #[test]
    fn test_render_zero_score_keeps_decimal_point() {
        let output = render(&classification(0.0, false), false).unwrap();
        assert_eq!(
            output,
            "Score: 0.0\n[HUMAN] This text is classified as human.\n"
        );
    }

    #[test]
    fn test_render_spam() {
        let output = render(&classification(1.25, true), false).unwrap();
        assert!(output.starts_with("Score: 1.25\n"));
        assert!(output.contains("[SPAM] This text is classified as spam."));
    }

    #[test]
    fn test_render_json() {
        let output = render(&classification(-0.5, false), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["label"], "human");
        assert_eq!(value["score"], -0.5);
    }

    #[test]
    fn test_banner_credits_data_sources() {
        assert!(BANNER.contains("https://gist.github.com/sebleier/554280"));
        assert!(BANNER.contains("sms-spam-collection-dataset"));
    }
}
