//! Heuristic-shortlisted entropy selection
//!
//! Ranks the playable candidates by the static letter-frequency score, evaluates only
//! the best few by feedback entropy, and plays the most informative one.

use super::cache::{CandidateFingerprint, EntropyCache, EntropyKey, FeedbackCache};
use super::calculator::{group_by_feedback, shannon_entropy};
use crate::config::SolverConfig;
use crate::core::Word;
use crate::error::SolverError;
use crate::solver::heuristic::HeuristicScorer;
use crate::solver::strategy::Strategy;
use crate::wordlists::Corpus;
use log::{debug, trace};
use std::sync::Arc;

/// Entropy-maximizing guess selector
///
/// The corpus, frequency tables and opening words are immutable and shared between
/// forks; the feedback and entropy caches belong to this instance.
#[derive(Debug, Clone)]
pub struct EntropySolver {
    corpus: Arc<Corpus>,
    scorer: Arc<HeuristicScorer>,
    opening_words: Arc<[(Word, i64)]>,
    config: SolverConfig,
    feedback_cache: FeedbackCache,
    entropy_cache: EntropyCache,
}

impl EntropySolver {
    /// Build the frequency tables and score every allowed guess once
    ///
    /// A `shortlist_size` of zero is treated as one.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCorpus` if no opening word can be chosen.
    pub fn new(corpus: Arc<Corpus>, config: SolverConfig) -> Result<Self, SolverError> {
        let config = SolverConfig {
            shortlist_size: config.shortlist_size.max(1),
            ..config
        };
        let scorer = HeuristicScorer::new(corpus.solutions());
        let opening_words: Arc<[(Word, i64)]> = scorer
            .rank(corpus.guesses(), config.opening_pool_size.max(1))
            .into();

        let (best, best_score) = opening_words
            .first()
            .copied()
            .ok_or(SolverError::EmptyCorpus("guess"))?;
        debug!(
            "entropy solver ready: {} solutions, {} guesses, opening {best} (score {best_score})",
            corpus.solutions().len(),
            corpus.guesses().len(),
        );

        Ok(Self {
            corpus,
            scorer: Arc::new(scorer),
            opening_words,
            config,
            feedback_cache: FeedbackCache::default(),
            entropy_cache: EntropyCache::default(),
        })
    }

    /// A solver sharing this one's tables, with empty caches
    ///
    /// Used to give each parallel worker its own caches.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            corpus: Arc::clone(&self.corpus),
            scorer: Arc::clone(&self.scorer),
            opening_words: Arc::clone(&self.opening_words),
            config: self.config,
            feedback_cache: FeedbackCache::default(),
            entropy_cache: EntropyCache::default(),
        }
    }

    /// Best-scoring allowed guesses with their heuristic scores, best first
    #[must_use]
    pub fn opening_words(&self) -> &[(Word, i64)] {
        &self.opening_words
    }

    /// The fixed first guess of every fresh game
    #[must_use]
    pub fn best_opening(&self) -> Word {
        // `new` guarantees at least one opening word
        self.opening_words[0].0
    }

    #[must_use]
    pub fn scorer(&self) -> &HeuristicScorer {
        &self.scorer
    }

    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Sizes of the (feedback, entropy) caches
    #[must_use]
    pub fn cache_sizes(&self) -> (usize, usize) {
        (self.feedback_cache.len(), self.entropy_cache.len())
    }

    /// Heuristically best guesses worth an entropy evaluation
    ///
    /// Candidates that are themselves allowed guesses are preferred; if none are,
    /// the whole allowed-guess list is ranked instead.
    #[must_use]
    pub fn shortlist(&self, candidates: &[Word]) -> Vec<Word> {
        let playable: Vec<&Word> = candidates
            .iter()
            .filter(|w| self.corpus.is_allowed(w))
            .collect();

        let ranked = if playable.is_empty() {
            self.scorer
                .rank(self.corpus.guesses(), self.config.shortlist_size)
        } else {
            self.scorer.rank(playable, self.config.shortlist_size)
        };

        ranked.into_iter().map(|(word, _)| word).collect()
    }

    /// Feedback entropy of `guess` over `candidates`, memoized
    pub fn entropy(&mut self, guess: &Word, candidates: &[Word]) -> f64 {
        let fingerprint = CandidateFingerprint::of(candidates);
        self.entropy_with(guess, candidates, fingerprint)
    }

    fn entropy_with(
        &mut self,
        guess: &Word,
        candidates: &[Word],
        fingerprint: CandidateFingerprint,
    ) -> f64 {
        let key = EntropyKey::new(self.config.entropy_key, *guess, fingerprint);
        if let Some(entropy) = self.entropy_cache.get(&key) {
            return entropy;
        }

        let cache = &mut self.feedback_cache;
        let groups = group_by_feedback(guess, candidates, |g, s| cache.feedback(g, s));
        let sizes: Vec<usize> = groups.into_values().collect();
        let entropy = shannon_entropy(&sizes);

        self.entropy_cache.insert(key, entropy);
        entropy
    }

    /// Entropy of every shortlisted guess, in shortlist order
    pub fn score_shortlist(&mut self, candidates: &[Word]) -> Vec<(Word, f64)> {
        let fingerprint = CandidateFingerprint::of(candidates);
        self.shortlist(candidates)
            .into_iter()
            .map(|guess| {
                let entropy = self.entropy_with(&guess, candidates, fingerprint);
                trace!("{guess}: {entropy:.4} bits over {} candidates", candidates.len());
                (guess, entropy)
            })
            .collect()
    }
}

impl Strategy for EntropySolver {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn next_guess(&mut self, candidates: &[Word]) -> Result<Word, SolverError> {
        if candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }
        if self.corpus.is_full_solution_set(candidates) {
            return Ok(self.best_opening());
        }

        // Strict comparison keeps the first of equally informative guesses
        let mut best: Option<(Word, f64)> = None;
        for (guess, entropy) in self.score_shortlist(candidates) {
            if best.is_none_or(|(_, best_entropy)| entropy > best_entropy) {
                best = Some((guess, entropy));
            }
        }

        best.map(|(guess, _)| guess)
            .ok_or(SolverError::NoCandidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EntropyKeyPolicy;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn small_corpus() -> Arc<Corpus> {
        let solutions = words_from_slice(&["irate", "crate", "grate", "slate", "moldy"]);
        let guesses = words_from_slice(&[
            "crane", "irate", "crate", "grate", "slate", "moldy", "pious",
        ]);
        Arc::new(Corpus::new(solutions, guesses).unwrap())
    }

    #[test]
    fn opening_word_is_best_heuristic_guess() {
        let solver = EntropySolver::new(small_corpus(), SolverConfig::default()).unwrap();
        let scorer = solver.scorer();

        let best = solver.best_opening();
        for guess in solver.corpus().guesses() {
            assert!(scorer.score(&best) >= scorer.score(guess));
        }
        assert_eq!(solver.opening_words().len(), 7);
        assert_eq!(solver.opening_words()[0].0, best);
    }

    #[test]
    fn fresh_game_returns_opening_without_entropy_work() {
        let corpus = small_corpus();
        let mut solver = EntropySolver::new(Arc::clone(&corpus), SolverConfig::default()).unwrap();

        let guess = solver.next_guess(corpus.solutions()).unwrap();

        assert_eq!(guess, solver.best_opening());
        assert_eq!(solver.cache_sizes(), (0, 0));
    }

    #[test]
    fn picks_maximum_entropy_from_shortlist() {
        let corpus = small_corpus();
        let mut solver = EntropySolver::new(corpus, SolverConfig::default()).unwrap();
        let candidates = words_from_slice(&["irate", "crate", "grate", "slate"]);

        let scored = solver.score_shortlist(&candidates);
        let guess = solver.next_guess(&candidates).unwrap();

        let max = scored.iter().map(|&(_, e)| e).fold(f64::MIN, f64::max);
        let first_max = scored.iter().find(|&&(_, e)| e == max).unwrap().0;
        assert_eq!(guess, first_max);
        assert!(candidates.contains(&guess));
    }

    #[test]
    fn shortlist_prefers_playable_candidates() {
        let solver = EntropySolver::new(small_corpus(), SolverConfig::default()).unwrap();
        let candidates = words_from_slice(&["grate", "moldy"]);

        let shortlist = solver.shortlist(&candidates);

        assert_eq!(shortlist.len(), 2);
        assert!(shortlist.iter().all(|w| candidates.contains(w)));
    }

    #[test]
    fn shortlist_falls_back_to_all_guesses() {
        // "zesty" is a solution but not an allowed guess
        let solutions = words_from_slice(&["zesty", "irate"]);
        let guesses = words_from_slice(&["crane", "irate", "pious"]);
        let corpus = Arc::new(Corpus::new(solutions, guesses).unwrap());
        let mut solver = EntropySolver::new(corpus, SolverConfig::default()).unwrap();

        let candidates = [word("zesty")];
        let shortlist = solver.shortlist(&candidates);
        assert_eq!(shortlist.len(), 3);

        let guess = solver.next_guess(&candidates).unwrap();
        assert!(solver.corpus().is_allowed(&guess));
    }

    #[test]
    fn shortlist_respects_configured_size() {
        let config = SolverConfig {
            shortlist_size: 2,
            ..SolverConfig::default()
        };
        let solver = EntropySolver::new(small_corpus(), config).unwrap();
        let candidates = words_from_slice(&["irate", "crate", "grate", "slate"]);

        assert_eq!(solver.shortlist(&candidates).len(), 2);
    }

    #[test]
    fn zero_shortlist_still_guesses() {
        let config = SolverConfig {
            shortlist_size: 0,
            ..SolverConfig::default()
        };
        let mut solver = EntropySolver::new(small_corpus(), config).unwrap();
        let candidates = words_from_slice(&["irate", "crate", "grate", "slate"]);

        assert_eq!(solver.config().shortlist_size, 1);
        assert_eq!(solver.shortlist(&candidates).len(), 1);
        assert!(candidates.contains(&solver.next_guess(&candidates).unwrap()));
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let mut solver = EntropySolver::new(small_corpus(), SolverConfig::default()).unwrap();
        assert_eq!(solver.next_guess(&[]), Err(SolverError::NoCandidates));
    }

    #[test]
    fn single_candidate_is_guessed() {
        let mut solver = EntropySolver::new(small_corpus(), SolverConfig::default()).unwrap();
        assert_eq!(solver.next_guess(&[word("grate")]).unwrap(), word("grate"));
    }

    #[test]
    fn entropy_is_memoized() {
        let mut solver = EntropySolver::new(small_corpus(), SolverConfig::default()).unwrap();
        let candidates = words_from_slice(&["irate", "crate", "grate"]);
        let guess = word("crane");

        let first = solver.entropy(&guess, &candidates);
        let sizes = solver.cache_sizes();
        let second = solver.entropy(&guess, &candidates);

        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(sizes, solver.cache_sizes());
        assert_eq!(sizes, (3, 1));
    }

    #[test]
    fn set_policy_distinguishes_equal_sized_sets() {
        let mut solver = EntropySolver::new(small_corpus(), SolverConfig::default()).unwrap();
        let guess = word("crane");

        // moldy and slate give crane different feedback: 1 bit
        let split = solver.entropy(&guess, &words_from_slice(&["moldy", "slate"]));
        // irate and grate both give BGGBG: 0 bits
        let other = solver.entropy(&guess, &words_from_slice(&["irate", "grate"]));
        assert!((split - 1.0).abs() < 1e-12);
        assert!(other.abs() < 1e-12);
    }

    #[test]
    fn count_policy_reuses_stale_entries() {
        let config = SolverConfig {
            entropy_key: EntropyKeyPolicy::CandidateCount,
            ..SolverConfig::default()
        };
        let mut solver = EntropySolver::new(small_corpus(), config).unwrap();
        let guess = word("crane");

        let split = solver.entropy(&guess, &words_from_slice(&["moldy", "slate"]));
        let stale = solver.entropy(&guess, &words_from_slice(&["irate", "grate"]));

        assert!((split - 1.0).abs() < 1e-12);
        assert_eq!(split.to_bits(), stale.to_bits());
    }

    #[test]
    fn fork_shares_tables_but_not_caches() {
        let mut solver = EntropySolver::new(small_corpus(), SolverConfig::default()).unwrap();
        solver.entropy(&word("crane"), &words_from_slice(&["irate", "crate"]));

        let fork = solver.fork();

        assert_eq!(fork.cache_sizes(), (0, 0));
        assert_eq!(fork.best_opening(), solver.best_opening());
        assert!(Arc::ptr_eq(&fork.scorer, &solver.scorer));
    }
}
