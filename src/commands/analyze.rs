//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::core::{Word, compute_feedback};
use crate::solver::HeuristicScorer;
use crate::solver::entropy::{group_by_feedback, shannon_entropy};
use crate::wordlists::Corpus;
use anyhow::{Context, Result};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    /// Number of distinct feedback outcomes
    pub partitions: usize,
    /// Candidates left after the least informative outcome
    pub largest_partition: usize,
    pub heuristic_score: i64,
    /// Letters of the word among the corpus's most frequent letters, in word order
    pub common_letters: String,
    /// Whether the word is in the allowed-guess list
    pub allowed: bool,
}

/// Analyze a word as an opening guess against the full solution corpus
///
/// Words outside the allowed-guess list are still analyzed; `allowed` records it.
///
/// # Errors
///
/// Returns an error if the word is invalid (not 5 letters or contains non-letters).
pub fn analyze_word(word: &str, corpus: &Corpus, scorer: &HeuristicScorer) -> Result<AnalysisResult> {
    let guess = Word::new(word).with_context(|| format!("invalid word {word:?}"))?;
    let candidates = corpus.solutions();

    let sizes: Vec<usize> = group_by_feedback(&guess, candidates, compute_feedback)
        .into_values()
        .collect();
    let entropy = shannon_entropy(&sizes);

    let mut common_letters = String::new();
    for &letter in guess.chars() {
        let c = char::from(letter);
        if scorer.common_letters().contains(&letter) && !common_letters.contains(c) {
            common_letters.push(c);
        }
    }

    let total_candidates = candidates.len();
    let expected_reduction = entropy.exp2();
    let expected_remaining = total_candidates as f64 / expected_reduction;

    Ok(AnalysisResult {
        word: guess,
        entropy,
        expected_reduction,
        expected_remaining,
        total_candidates,
        partitions: sizes.len(),
        largest_partition: sizes.iter().copied().max().unwrap_or(0),
        heuristic_score: scorer.score(&guess),
        common_letters,
        allowed: corpus.is_allowed(&guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Corpus {
        let solutions = words_from_slice(&["irate", "crate", "grate", "slate", "skate", "moldy"]);
        let mut guesses = solutions.clone();
        guesses.extend(words_from_slice(&["arise", "crane"]));
        Corpus::new(solutions, guesses).unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let corpus = corpus();
        let scorer = HeuristicScorer::new(corpus.solutions());

        let result = analyze_word("CRANE", &corpus, &scorer).unwrap();

        // Outcomes: BGGBG x2, BBGBG x2, GGGBG x1, BBBBB x1
        assert_eq!(result.word.as_str(), "crane");
        assert_eq!(result.total_candidates, 6);
        assert_eq!(result.partitions, 4);
        assert_eq!(result.largest_partition, 2);
        assert!((result.entropy - shannon_entropy(&[1, 1, 2, 2])).abs() < 1e-12);
        assert_eq!(result.heuristic_score, 342);
        // Top letters: a t e r s l i c g k
        assert_eq!(result.common_letters, "crae");
        assert!(result.allowed);
    }

    #[test]
    fn analyze_unlisted_word() {
        let corpus = corpus();
        let scorer = HeuristicScorer::new(corpus.solutions());

        let result = analyze_word("fuzzy", &corpus, &scorer).unwrap();

        // Only moldy shares a letter with it
        assert!(!result.allowed);
        assert!(result.common_letters.is_empty());
        assert_eq!(result.largest_partition, 5);
        assert!(result.entropy < 1.0);
    }

    #[test]
    fn analyze_invalid_word() {
        let corpus = corpus();
        let scorer = HeuristicScorer::new(corpus.solutions());

        assert!(analyze_word("zzz", &corpus, &scorer).is_err());
    }

    #[test]
    fn entropy_properties() {
        let corpus = corpus();
        let scorer = HeuristicScorer::new(corpus.solutions());

        let result = analyze_word("moldy", &corpus, &scorer).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (result.total_candidates as f64).log2());
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.total_candidates as f64);
    }
}
