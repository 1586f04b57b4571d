//! Candidate narrowing

use crate::core::{Feedback, Word, matches};
use crate::error::SolverError;

/// Keep the candidates consistent with one (guess, feedback) observation
///
/// Order is preserved. Narrowing to nothing means the feedback contradicts every
/// candidate, which is reported rather than returned as an empty list.
///
/// # Errors
/// Returns `SolverError::EmptyCandidateSet` if no candidate survives.
///
/// # Examples
/// ```
/// use wordle_entropy_solver::core::{Word, compute_feedback};
/// use wordle_entropy_solver::solver::narrow;
/// use wordle_entropy_solver::wordlists::loader::words_from_slice;
///
/// let candidates = words_from_slice(&["irate", "crate", "grate", "slate"]);
/// let guess = Word::new("crane").unwrap();
/// let feedback = compute_feedback(&guess, &Word::new("grate").unwrap());
///
/// let narrowed = narrow(&candidates, &guess, feedback).unwrap();
/// assert_eq!(narrowed, words_from_slice(&["irate", "grate"]));
/// ```
pub fn narrow(
    candidates: &[Word],
    guess: &Word,
    feedback: Feedback,
) -> Result<Vec<Word>, SolverError> {
    let narrowed: Vec<Word> = candidates
        .iter()
        .filter(|candidate| matches(candidate, guess, feedback))
        .copied()
        .collect();

    if narrowed.is_empty() {
        return Err(SolverError::EmptyCandidateSet {
            guess: *guess,
            feedback,
        });
    }

    Ok(narrowed)
}
