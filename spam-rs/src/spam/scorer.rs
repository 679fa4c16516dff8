//! Frequency-ratio scoring engine
//!
//! The score is a signed dot product between the candidate message's own
//! term frequencies and the term frequencies of every reference document.
//! Spam documents contribute positively, human documents negatively.
//!
//! The outer loop runs once per token occurrence rather than once per
//! distinct token, so a word repeated in the candidate is weighted by its
//! occurrence count on top of its frequency ratio.

use std::collections::HashMap;

use tracing::debug;

use super::types::*;

fn count_tokens(tokens: &[Token]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Compute the spam similarity score of a preprocessed message.
///
/// Returns 0.0 for an empty message. Accumulation follows token order,
/// then human documents, then spam documents, in f64 throughout.
pub fn compute_score(tokens: &[Token], spam: &Corpus, human: &Corpus) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let counts = count_tokens(tokens);
    let len = tokens.len() as f64;
    let mut score = 0.0;

    for token in tokens {
        let text_ratio = counts.get(token.as_str()).copied().unwrap_or(0) as f64 / len;

        for document in human {
            score += text_ratio * -document.ratio(token);
        }

        for document in spam {
            score += text_ratio * document.ratio(token);
        }
    }

    score
}

/// True when `score` is strictly above `threshold`
pub fn is_spam_text(score: f64, threshold: f64) -> bool {
    score > threshold
}

/// Scorer with a fixed spam threshold
#[derive(Debug, Clone, Copy)]
pub struct FrequencyScorer {
    threshold: f64,
}

impl FrequencyScorer {
    /// Create a scorer with a custom threshold
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score a message against both reference corpora
    pub fn score(&self, tokens: &[Token], corpora: &ReferenceCorpora) -> f64 {
        let score = compute_score(tokens, corpora.spam(), corpora.human());
        debug!(tokens = tokens.len(), score, "Scored message");
        score
    }

    pub fn is_spam(&self, score: f64) -> bool {
        is_spam_text(score, self.threshold)
    }

    pub fn label(&self, score: f64) -> Label {
        Label::from_spam(self.is_spam(score))
    }

    /// Break the score down by distinct token, largest magnitude first.
    ///
    /// The contributions add up to [`compute_score`] up to rounding.
    pub fn explain(&self, tokens: &[Token], corpora: &ReferenceCorpora) -> Vec<TokenContribution> {
        if tokens.is_empty() {
            return Vec::new();
        }

        let counts = count_tokens(tokens);
        let len = tokens.len() as f64;
        let mut seen = std::collections::HashSet::new();
        let mut contributions = Vec::with_capacity(counts.len());

        for token in tokens {
            if !seen.insert(token.as_str()) {
                continue;
            }

            let occurrences = counts.get(token.as_str()).copied().unwrap_or(0);
            let text_ratio = occurrences as f64 / len;
            let spam_sum: f64 = corpora.spam().iter().map(|d| d.ratio(token)).sum();
            let human_sum: f64 = corpora.human().iter().map(|d| d.ratio(token)).sum();

            contributions.push(TokenContribution {
                token: token.clone(),
                occurrences,
                contribution: occurrences as f64 * text_ratio * (spam_sum - human_sum),
            });
        }

        contributions.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));
        contributions
    }
}

impl Default for FrequencyScorer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn corpus(docs: &[&[&str]]) -> Corpus {
        Corpus::from_token_lists(docs.iter().map(|d| tokens(d))).unwrap()
    }

    fn corpora(spam: &[&[&str]], human: &[&[&str]]) -> ReferenceCorpora {
        ReferenceCorpora::new(corpus(spam), corpus(human)).unwrap()
    }

    #[test]
    fn test_empty_message_scores_zero() {
        let spam = corpus(&[&["free", "money"]]);
        let human = corpus(&[&["hello", "friend"]]);
        assert_eq!(compute_score(&[], &spam, &human), 0.0);
    }

    #[test]
    fn test_worked_example() {
        let spam = corpus(&[&["free", "money"]]);
        let human = corpus(&[&["hello", "friend"]]);
        let score = compute_score(&tokens(&["free", "money", "free"]), &spam, &human);

        // free: 2 occurrences * (2/3 * 1/2), money: 1 occurrence * (1/3 * 1/2)
        let free = 2.0 / 3.0 * 0.5;
        let money = 1.0 / 3.0 * 0.5;
        let expected = free + money + free;

        assert_eq!(score, expected);
        assert!((score - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_occurrence_weighting_is_kept() {
        // Repeating a word increases both its ratio and the number of times it is counted
        let spam = corpus(&[&["prize"]]);
        let human = corpus(&[&["dinner"]]);

        let once = compute_score(&tokens(&["prize", "today"]), &spam, &human);
        let twice = compute_score(&tokens(&["prize", "prize", "today"]), &spam, &human);

        assert!((once - 0.5).abs() < 1e-12);
        // 2 occurrences * 2/3 ratio * 1.0
        assert!((twice - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_human_tokens_push_score_down() {
        let spam = corpus(&[&["win", "cash"], &["claim", "prize"]]);
        let human = corpus(&[&["see", "lunch"], &["lunch", "lunch", "later"]]);

        let score = compute_score(&tokens(&["lunch"]), &spam, &human);
        // -(1/2 + 2/3)
        assert!((score + 7.0 / 6.0).abs() < 1e-12);
        assert!(score < 0.0);
    }

    #[test]
    fn test_unknown_tokens_score_zero() {
        let spam = corpus(&[&["win"]]);
        let human = corpus(&[&["lunch"]]);
        assert_eq!(compute_score(&tokens(&["zebra", "quartz"]), &spam, &human), 0.0);
    }

    #[test]
    fn test_is_spam_text() {
        assert!(is_spam_text(1.0, DEFAULT_THRESHOLD));
        assert!(!is_spam_text(DEFAULT_THRESHOLD, DEFAULT_THRESHOLD));
        assert!(!is_spam_text(-3.0, DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_is_spam_text_monotonic() {
        let threshold = 0.25;
        let mut flipped = false;
        for step in -100..=100 {
            let spam = is_spam_text(step as f64 * 0.01, threshold);
            assert!(!(flipped && !spam), "label flipped back at {}", step);
            flipped |= spam;
        }
        assert!(flipped);
    }

    #[test]
    fn test_scorer_label() {
        let scorer = FrequencyScorer::default();
        assert_eq!(scorer.threshold(), DEFAULT_THRESHOLD);
        assert_eq!(scorer.label(0.78), Label::Spam);
        assert_eq!(scorer.label(0.77), Label::Human);

        let strict = FrequencyScorer::new(10.0);
        assert!(!strict.is_spam(5.0));
    }

    #[test]
    fn test_scorer_score_matches_free_function() {
        let corpora = corpora(&[&["free", "money"]], &[&["hello", "friend"]]);
        let message = tokens(&["free", "hello", "free"]);

        let scorer = FrequencyScorer::default();
        assert_eq!(
            scorer.score(&message, &corpora),
            compute_score(&message, corpora.spam(), corpora.human())
        );
    }

    #[test]
    fn test_explain() {
        let corpora = corpora(
            &[&["free", "money"], &["free", "prize"]],
            &[&["hello", "friend"], &["money", "lunch"]],
        );
        let message = tokens(&["free", "money", "free", "hello"]);

        let scorer = FrequencyScorer::default();
        let contributions = scorer.explain(&message, &corpora);

        assert_eq!(contributions.len(), 3);
        assert_eq!(contributions[0].token, "free");
        assert_eq!(contributions[0].occurrences, 2);
        // 2 * 1/2 * (1/2 + 1/2)
        assert!((contributions[0].contribution - 1.0).abs() < 1e-12);

        let money = contributions.iter().find(|c| c.token == "money").unwrap();
        assert!(money.contribution.abs() < 1e-12);

        let hello = contributions.iter().find(|c| c.token == "hello").unwrap();
        assert!(hello.contribution < 0.0);

        let total: f64 = contributions.iter().map(|c| c.contribution).sum();
        assert!((total - scorer.score(&message, &corpora)).abs() < 1e-12);
    }

    #[test]
    fn test_explain_empty() {
        let corpora = corpora(&[&["win"]], &[&["lunch"]]);
        assert!(FrequencyScorer::default().explain(&[], &corpora).is_empty());
    }
}
