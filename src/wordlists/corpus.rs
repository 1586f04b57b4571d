//! Validated pair of word lists a solver works over

use crate::core::Word;
use crate::error::SolverError;
use rustc_hash::FxHashSet;

/// Solution corpus plus allowed-guess corpus
///
/// Built once and shared read-only (usually behind an `Arc`) by every solver and game.
#[derive(Debug, Clone)]
pub struct Corpus {
    solutions: Vec<Word>,
    guesses: Vec<Word>,
    solution_set: FxHashSet<Word>,
    guess_set: FxHashSet<Word>,
}

impl Corpus {
    /// Build a corpus from solution and allowed-guess lists
    ///
    /// Order is preserved; it decides tie-breaks everywhere downstream.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCorpus` if either list is empty.
    pub fn new(solutions: Vec<Word>, guesses: Vec<Word>) -> Result<Self, SolverError> {
        if solutions.is_empty() {
            return Err(SolverError::EmptyCorpus("solution"));
        }
        if guesses.is_empty() {
            return Err(SolverError::EmptyCorpus("guess"));
        }

        let solution_set = solutions.iter().copied().collect();
        let guess_set = guesses.iter().copied().collect();

        Ok(Self {
            solutions,
            guesses,
            solution_set,
            guess_set,
        })
    }

    /// The embedded reference corpus
    ///
    /// # Errors
    /// Only fails if the embedded lists are empty, which the build prevents.
    pub fn reference() -> Result<Self, SolverError> {
        use super::loader::words_from_slice;
        Self::new(
            words_from_slice(super::SOLUTIONS),
            words_from_slice(super::GUESSES),
        )
    }

    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn is_solution(&self, word: &Word) -> bool {
        self.solution_set.contains(word)
    }

    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.guess_set.contains(word)
    }

    /// Whether `candidates` is the whole, unnarrowed solution corpus
    #[must_use]
    pub fn is_full_solution_set(&self, candidates: &[Word]) -> bool {
        if candidates.len() != self.solutions.len() {
            return false;
        }
        let distinct: FxHashSet<&Word> = candidates.iter().collect();
        distinct.len() == candidates.len() && distinct.iter().all(|w| self.is_solution(w))
    }
}
