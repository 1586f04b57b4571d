//! Shannon entropy of a guess's feedback distribution
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Feedback, Word, compute_feedback};
use rustc_hash::FxHashMap;

/// Count candidates per feedback value, using `feedback_of(guess, candidate)`
pub fn group_by_feedback<F>(
    guess: &Word,
    candidates: &[Word],
    mut feedback_of: F,
) -> FxHashMap<Feedback, usize>
where
    F: FnMut(&Word, &Word) -> Feedback,
{
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(feedback_of(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from partition sizes
///
/// H = -Σ p * log₂(p), with p = size / total.
///
/// Sizes are summed smallest first, so two distributions with the same sizes give
/// bit-identical results whatever order they arrive in.
///
/// # Examples
/// ```
/// use wordle_entropy_solver::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 1e-12); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(sizes: &[usize]) -> f64 {
    let total = sizes.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let mut sizes = sizes.to_vec();
    sizes.sort_unstable();

    sizes
        .into_iter()
        .filter(|&size| size > 0)
        .map(|size| {
            let p = size as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of `guess` over `candidates`, computing every feedback directly
///
/// # Examples
/// ```
/// use wordle_entropy_solver::core::Word;
/// use wordle_entropy_solver::solver::entropy::feedback_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
///
/// let entropy = feedback_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn feedback_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    let groups = group_by_feedback(guess, candidates, compute_feedback);
    let sizes: Vec<usize> = groups.into_values().collect();
    shannon_entropy(&sizes)
}
