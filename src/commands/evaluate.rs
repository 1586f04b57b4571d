//! Evaluate a strategy over the solution corpus
//!
//! Plays one game per target word in parallel and collects the statistics used to
//! compare strategies: guess counts, failures, timing, how quickly the candidate set
//! shrinks, and what the failed targets have in common.

use crate::core::{WORD_LENGTH, Word};
use crate::solver::{Solver, Strategy, StrategyType, Turn};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Letters of English text by frequency, used to describe failed targets
const COMMON_ENGLISH: &[u8] = b"etaoinshrdlu";

/// Which targets to play
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationConfig {
    /// Play only the first `limit` solutions
    pub limit: Option<usize>,
    /// Play a random sample of this many solutions instead
    pub sample: Option<usize>,
    /// Seed for `sample`
    pub seed: Option<u64>,
}

/// Result from playing a single target
#[derive(Debug, Clone)]
pub struct WordResult {
    pub target: Word,
    pub turns: Vec<Turn>,
    pub success: bool,
    pub duration: Duration,
}

impl WordResult {
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.turns.len()
    }
}

/// Averaged letter properties of a group of words
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordProperties {
    pub unique_letters: f64,
    pub vowels: f64,
    pub common_letters: f64,
    pub repeated_letters: f64,
}

impl WordProperties {
    /// Averages over `words`; `None` for an empty group
    #[must_use]
    pub fn average<'w>(words: impl IntoIterator<Item = &'w Word>) -> Option<Self> {
        let mut count = 0usize;
        let mut sums = [0usize; 4];

        for word in words {
            let unique = word.unique_letters();
            let common = word
                .chars()
                .iter()
                .filter(|&&c| COMMON_ENGLISH.contains(&c))
                .count();

            sums[0] += unique;
            sums[1] += word.vowel_count();
            sums[2] += common;
            sums[3] += WORD_LENGTH - unique;
            count += 1;
        }

        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Self {
            unique_letters: sums[0] as f64 / n,
            vowels: sums[1] as f64 / n,
            common_letters: sums[2] as f64 / n,
            repeated_letters: sums[3] as f64 / n,
        })
    }
}

/// Statistics from an evaluation run
#[derive(Debug)]
pub struct EvaluationStats {
    pub strategy: &'static str,
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Over every target, failures counted at the rounds they used
    pub average_guesses: f64,
    pub average_guesses_solved: f64,
    /// Rounds used by failed targets; zero when nothing failed
    pub average_guesses_failed: f64,
    /// Percentage of targets not solved
    pub failure_rate: f64,
    pub total_time: Duration,
    pub time_per_word: Duration,
    /// Solved targets by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    /// Mean candidate count before each round, over the games that reached it
    pub candidates_per_round: Vec<f64>,
    pub failed_properties: Option<WordProperties>,
    /// Failed targets, then the slowest solves, at most ten
    pub hardest: Vec<(Word, usize, bool)>,
}

impl EvaluationStats {
    /// Summarize per-target results
    #[must_use]
    pub fn from_results(strategy: &'static str, results: &[WordResult], total_time: Duration) -> Self {
        let total_words = results.len();
        let solved = results.iter().filter(|r| r.success).count();
        let failed = total_words - solved;

        let mut distribution = BTreeMap::new();
        for result in results.iter().filter(|r| r.success) {
            *distribution.entry(result.rounds()).or_insert(0) += 1;
        }

        let total_guesses: usize = results.iter().map(WordResult::rounds).sum();
        let solved_guesses: usize = results
            .iter()
            .filter(|r| r.success)
            .map(WordResult::rounds)
            .sum();
        let failed_guesses = total_guesses - solved_guesses;

        let max_rounds = results.iter().map(WordResult::rounds).max().unwrap_or(0);
        let candidates_per_round = (0..max_rounds)
            .map(|round| {
                let before: Vec<usize> = results
                    .iter()
                    .filter_map(|r| r.turns.get(round))
                    .map(|turn| turn.candidates_before)
                    .collect();
                mean(before.iter().sum::<usize>(), before.len())
            })
            .collect();

        let failed_properties =
            WordProperties::average(results.iter().filter(|r| !r.success).map(|r| &r.target));

        let mut hardest: Vec<(Word, usize, bool)> = results
            .iter()
            .filter(|r| !r.success || r.rounds() >= 5)
            .map(|r| (r.target, r.rounds(), r.success))
            .collect();
        hardest.sort_by_key(|&(word, rounds, success)| (success, std::cmp::Reverse(rounds), word));
        hardest.truncate(10);

        let time_per_word = u32::try_from(total_words)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| total_time / n);

        Self {
            strategy,
            total_words,
            solved,
            failed,
            average_guesses: mean(total_guesses, total_words),
            average_guesses_solved: mean(solved_guesses, solved),
            average_guesses_failed: mean(failed_guesses, failed),
            failure_rate: mean(failed, total_words) * 100.0,
            total_time,
            time_per_word,
            distribution,
            candidates_per_round,
            failed_properties,
            hardest,
        }
    }
}

fn mean(sum: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Pick the targets to play from the solution list
///
/// `sample` takes precedence over `limit`. A seeded sample is reproducible.
#[must_use]
pub fn select_targets(solutions: &[Word], config: &EvaluationConfig) -> Vec<Word> {
    match (config.sample, config.limit) {
        (Some(n), _) => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            solutions.choose_multiple(&mut rng, n).copied().collect()
        }
        (None, Some(n)) => solutions.iter().take(n).copied().collect(),
        (None, None) => solutions.to_vec(),
    }
}

/// Play every target in parallel
///
/// Each rayon task gets its own forked solver, so caches are never shared between
/// threads. Results come back in target order.
///
/// # Errors
///
/// Returns the first solver error (a target outside the solution corpus can leave
/// no candidates).
pub fn run_evaluation(
    solver: &Solver<StrategyType>,
    targets: &[Word],
    show_progress: bool,
) -> Result<EvaluationStats> {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(solver.strategy().name());

    let total_start = Instant::now();

    let results = targets
        .par_iter()
        .map_init(
            || solver.fork(),
            |worker, target| -> Result<WordResult> {
                let start = Instant::now();
                let game = worker
                    .solve(target)
                    .with_context(|| format!("evaluating {target}"))?;
                pb.inc(1);
                Ok(WordResult {
                    target: *target,
                    turns: game.turns().to_vec(),
                    success: matches!(game.outcome(), Some(Ok(_))),
                    duration: start.elapsed(),
                })
            },
        )
        .collect::<Result<Vec<WordResult>>>()?;

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    let stats = EvaluationStats::from_results(solver.strategy().name(), &results, total_time);
    info!(
        "{}: {} words, {:.3} average guesses, {} failed",
        stats.strategy,
        stats.total_words,
        stats.average_guesses,
        stats.failed
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::solver::StrategyKind;
    use crate::wordlists::Corpus;
    use crate::wordlists::loader::words_from_slice;
    use std::sync::Arc;

    fn corpus() -> Arc<Corpus> {
        let solutions = words_from_slice(&["irate", "crate", "grate", "slate", "skate", "moldy"]);
        let mut guesses = solutions.clone();
        guesses.extend(words_from_slice(&["arise", "crane"]));
        Arc::new(Corpus::new(solutions, guesses).unwrap())
    }

    fn solver(kind: StrategyKind, max_rounds: usize) -> Solver<StrategyType> {
        let corpus = corpus();
        let strategy = StrategyType::build(kind, Arc::clone(&corpus), SolverConfig::default()).unwrap();
        Solver::new(strategy, corpus, max_rounds)
    }

    #[test]
    fn evaluation_statistics() {
        let solver = solver(StrategyKind::Entropy, 6);
        let targets = solver.corpus().solutions().to_vec();

        let stats = run_evaluation(&solver, &targets, false).unwrap();

        // irate 1, crate 2, grate 3, slate 2, skate 3, moldy 2
        assert_eq!(stats.strategy, "entropy");
        assert_eq!(stats.total_words, 6);
        assert_eq!(stats.solved, 6);
        assert_eq!(stats.failed, 0);
        assert!((stats.average_guesses - 13.0 / 6.0).abs() < 1e-12);
        assert!(stats.failure_rate.abs() < f64::EPSILON);
        assert_eq!(stats.distribution, BTreeMap::from([(1, 1), (2, 3), (3, 2)]));
        assert!(stats.failed_properties.is_none());
        assert!(stats.average_guesses_failed.abs() < f64::EPSILON);

        assert_eq!(stats.candidates_per_round.len(), 3);
        assert!((stats.candidates_per_round[0] - 6.0).abs() < 1e-12);
        assert!((stats.candidates_per_round[1] - 1.8).abs() < 1e-12);
        assert!((stats.candidates_per_round[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn failed_targets_are_described() {
        // The baseline opening is not a solution, so one round never solves anything
        let solver = solver(StrategyKind::Baseline, 1);
        let targets = solver.corpus().solutions().to_vec();

        let stats = run_evaluation(&solver, &targets, false).unwrap();

        assert_eq!(stats.failed, 6);
        assert!((stats.failure_rate - 100.0).abs() < 1e-9);
        assert!((stats.average_guesses - 1.0).abs() < 1e-12);
        assert!(stats.average_guesses_solved.abs() < f64::EPSILON);
        assert!((stats.average_guesses_failed - 1.0).abs() < 1e-12);
        assert!(stats.distribution.is_empty());
        assert_eq!(stats.hardest.len(), 6);
        assert!(stats.hardest.iter().all(|&(_, rounds, success)| rounds == 1 && !success));

        let props = stats.failed_properties.unwrap();
        assert!((props.unique_letters - 5.0).abs() < 1e-12);
        assert!((props.vowels - 2.0).abs() < 1e-12);
        assert!((props.common_letters - 25.0 / 6.0).abs() < 1e-12);
        assert!(props.repeated_letters.abs() < f64::EPSILON);
    }

    #[test]
    fn word_properties_of_repeated_letters() {
        let words = words_from_slice(&["geese", "llama"]);
        let props = WordProperties::average(&words).unwrap();

        // geese: g e s, llama: l a m
        assert!((props.unique_letters - 3.0).abs() < 1e-12);
        assert!((props.repeated_letters - 2.0).abs() < 1e-12);
        assert!(WordProperties::average(std::iter::empty()).is_none());
    }

    #[test]
    fn select_targets_limit_and_sample() {
        let solutions = corpus().solutions().to_vec();

        let all = select_targets(&solutions, &EvaluationConfig::default());
        assert_eq!(all, solutions);

        let limited = select_targets(
            &solutions,
            &EvaluationConfig {
                limit: Some(2),
                ..EvaluationConfig::default()
            },
        );
        assert_eq!(limited, solutions[..2]);

        let config = EvaluationConfig {
            sample: Some(3),
            seed: Some(7),
            ..EvaluationConfig::default()
        };
        let first = select_targets(&solutions, &config);
        let second = select_targets(&solutions, &config);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|w| solutions.contains(w)));

        let mut unique = first.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn target_outside_corpus_is_an_error() {
        let solver = solver(StrategyKind::Entropy, 6);
        let targets = words_from_slice(&["fuzzy"]);

        assert!(run_evaluation(&solver, &targets, false).is_err());
    }
}
