//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::entropy::EntropySolver;
use crate::config::SolverConfig;
use crate::core::Word;
use crate::error::SolverError;
use crate::wordlists::Corpus;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A strategy for choosing the next guess from the remaining candidates
pub trait Strategy {
    /// Short name used in reports
    fn name(&self) -> &'static str;

    /// Choose the next guess
    ///
    /// `candidates` is the current candidate set; when it is the full solution corpus
    /// the game has just started.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if `candidates` is empty.
    fn next_guess(&mut self, candidates: &[Word]) -> Result<Word, SolverError>;
}

/// Fixed opening, then the first remaining candidate
///
/// A reference point for judging the entropy solver.
#[derive(Debug, Clone)]
pub struct BaselineStrategy {
    corpus: Arc<Corpus>,
    opening: Word,
}

impl BaselineStrategy {
    /// Opening used by [`BaselineStrategy::new`]
    pub const DEFAULT_OPENING: &'static str = "arise";

    /// Baseline with the default opening word
    ///
    /// # Errors
    /// Never fails in practice; the default opening is a valid word.
    pub fn new(corpus: Arc<Corpus>) -> Result<Self, SolverError> {
        Ok(Self::with_opening(corpus, Word::new(Self::DEFAULT_OPENING)?))
    }

    #[must_use]
    pub const fn with_opening(corpus: Arc<Corpus>, opening: Word) -> Self {
        Self { corpus, opening }
    }
}

impl Strategy for BaselineStrategy {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn next_guess(&mut self, candidates: &[Word]) -> Result<Word, SolverError> {
        if self.corpus.is_full_solution_set(candidates) {
            return Ok(self.opening);
        }
        candidates.first().copied().ok_or(SolverError::NoCandidates)
    }
}

/// Names accepted for [`StrategyType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Entropy,
    Baseline,
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entropy" => Ok(Self::Entropy),
            "baseline" => Ok(Self::Baseline),
            other => Err(format!(
                "unknown strategy {other:?} (expected entropy|baseline)"
            )),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Entropy => "entropy",
            Self::Baseline => "baseline",
        })
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    Entropy(EntropySolver),
    Baseline(BaselineStrategy),
}

impl StrategyType {
    /// Build the strategy named by `kind` over `corpus`
    ///
    /// # Errors
    /// Propagates construction errors of the underlying strategy.
    pub fn build(
        kind: StrategyKind,
        corpus: Arc<Corpus>,
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        Ok(match kind {
            StrategyKind::Entropy => Self::Entropy(EntropySolver::new(corpus, config)?),
            StrategyKind::Baseline => Self::Baseline(BaselineStrategy::new(corpus)?),
        })
    }

    /// An independent copy for another worker; shared tables, fresh caches
    #[must_use]
    pub fn fork(&self) -> Self {
        match self {
            Self::Entropy(s) => Self::Entropy(s.fork()),
            Self::Baseline(s) => Self::Baseline(s.clone()),
        }
    }
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Entropy(s) => s.name(),
            Self::Baseline(s) => s.name(),
        }
    }

    fn next_guess(&mut self, candidates: &[Word]) -> Result<Word, SolverError> {
        match self {
            Self::Entropy(s) => s.next_guess(candidates),
            Self::Baseline(s) => s.next_guess(candidates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Arc<Corpus> {
        let solutions = words_from_slice(&["irate", "crate", "grate"]);
        let guesses = words_from_slice(&["arise", "crane", "irate", "crate", "grate"]);
        Arc::new(Corpus::new(solutions, guesses).unwrap())
    }

    #[test]
    fn baseline_opens_with_fixed_word() {
        let corpus = corpus();
        let mut baseline = BaselineStrategy::new(Arc::clone(&corpus)).unwrap();

        let guess = baseline.next_guess(corpus.solutions()).unwrap();
        assert_eq!(guess.as_str(), "arise");
    }

    #[test]
    fn baseline_then_takes_first_candidate() {
        let mut baseline = BaselineStrategy::new(corpus()).unwrap();
        let candidates = words_from_slice(&["grate", "crate"]);

        assert_eq!(baseline.next_guess(&candidates).unwrap().as_str(), "grate");
        assert_eq!(baseline.next_guess(&[]), Err(SolverError::NoCandidates));
    }

    #[test]
    fn strategy_kind_parses() {
        assert_eq!("entropy".parse(), Ok(StrategyKind::Entropy));
        assert_eq!("baseline".parse(), Ok(StrategyKind::Baseline));
        assert!("minimax".parse::<StrategyKind>().is_err());
        assert_eq!(StrategyKind::Baseline.to_string(), "baseline");
    }

    #[test]
    fn strategy_type_dispatches() {
        let config = SolverConfig::default();
        let mut entropy = StrategyType::build(StrategyKind::Entropy, corpus(), config).unwrap();
        let mut baseline = StrategyType::build(StrategyKind::Baseline, corpus(), config).unwrap();

        assert_eq!(entropy.name(), "entropy");
        assert_eq!(baseline.name(), "baseline");

        let candidates = words_from_slice(&["crate"]);
        assert_eq!(entropy.next_guess(&candidates).unwrap().as_str(), "crate");
        assert_eq!(baseline.fork().next_guess(&candidates).unwrap().as_str(), "crate");
    }
}
