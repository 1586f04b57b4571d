//! Error taxonomy shared by the solver

use crate::core::{Feedback, Word, WordError};
use thiserror::Error;

/// Errors raised by the solving core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Malformed word rejected at the boundary
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Narrowing left nothing: the observed feedback contradicts every corpus word
    #[error("no candidate is consistent with {guess} -> {feedback}")]
    EmptyCandidateSet { guess: Word, feedback: Feedback },

    /// A guess was requested for an empty candidate list
    #[error("no candidates to choose a guess from")]
    NoCandidates,

    /// The round limit elapsed without an all-green result
    #[error("not solved within {rounds} rounds")]
    ExhaustedAttempts { rounds: usize },

    /// A word list needed by the solver is empty
    #[error("{0} word list is empty")]
    EmptyCorpus(&'static str),

    /// The game already reached a terminal state
    #[error("game is already finished")]
    GameFinished,
}
