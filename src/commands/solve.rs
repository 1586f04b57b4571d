//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Feedback, Word, compute_feedback};
use crate::error::SolverError;
use crate::solver::entropy::feedback_entropy;
use crate::solver::{GameState, Solver, Strategy};
use anyhow::{Context, Result};

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    /// Rounds used, or `ExhaustedAttempts`
    pub outcome: Result<usize, SolverError>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess over the candidates it was chosen from; `None` when only
    /// one candidate was left
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `target` with the given solver, recording entropy for each guess
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The solver cannot provide a guess
/// - Feedback against the target eliminates every candidate (target not in the
///   solution corpus)
pub fn solve_word<S: Strategy>(target: &str, solver: &mut Solver<S>) -> Result<SolveResult> {
    let target_word = Word::new(target).with_context(|| format!("invalid target word {target:?}"))?;
    if !solver.corpus().is_solution(&target_word) {
        log::warn!("{target_word} is not in the solution corpus");
    }

    let mut game = solver.new_game();
    let mut steps = Vec::new();

    while let GameState::InProgress { candidates, .. } = game.state() {
        let candidates_before = candidates.len();
        let guess = solver.suggest(&game)?;

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let entropy = feedback_entropy(&guess, candidates);
            (Some(entropy), Some(candidates_before as f64 / entropy.exp2()))
        } else {
            (None, None)
        };

        let feedback = compute_feedback(&guess, &target_word);
        solver
            .advance(&mut game, guess, feedback)
            .with_context(|| format!("solving {target_word}"))?;

        let candidates_after = game.turns().last().map_or(0, |turn| turn.candidates_after);
        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });
    }

    let outcome = game
        .outcome()
        .ok_or_else(|| anyhow::anyhow!("game for {target_word} ended in progress"))?;

    Ok(SolveResult {
        target: target_word,
        steps,
        outcome,
    })
}
