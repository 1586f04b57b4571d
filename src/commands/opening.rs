//! Opening word listing
//!
//! The entropy solver ranks its openings once, by heuristic score, when it is built.

use crate::core::Word;
use crate::solver::EntropySolver;
use crate::solver::entropy::feedback_entropy;

/// One entry of the opening list
pub struct Opening {
    pub rank: usize,
    pub word: Word,
    pub score: i64,
    /// Entropy against the full solution corpus
    pub entropy: f64,
}

/// The solver's cached opening words, best first
#[must_use]
pub fn top_openings(solver: &EntropySolver) -> Vec<Opening> {
    let solutions = solver.corpus().solutions();

    solver
        .opening_words()
        .iter()
        .enumerate()
        .map(|(idx, &(word, score))| Opening {
            rank: idx + 1,
            word,
            score,
            entropy: feedback_entropy(&word, solutions),
        })
        .collect()
}
