//! Game orchestration
//!
//! A game moves through `InProgress` rounds until it is `Solved` or `Failed`. The
//! solver never sees the target: each round's feedback comes from outside, either
//! from the puzzle itself (`advance`) or from a known target (`solve`).

use super::filter::narrow;
use super::strategy::{Strategy, StrategyType};
use crate::core::{Feedback, Word, compute_feedback};
use crate::error::SolverError;
use crate::wordlists::Corpus;
use log::debug;
use std::sync::Arc;

/// Where a game stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// `round` guesses made so far; `candidates` are still consistent with all of them
    InProgress { round: usize, candidates: Vec<Word> },
    /// All-green feedback after `rounds` guesses
    Solved { rounds: usize },
    /// Round limit reached without an all-green feedback
    Failed { rounds: usize },
}

/// One completed round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    /// Zero once the game is solved
    pub candidates_after: usize,
}

/// A single puzzle instance
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    turns: Vec<Turn>,
}

impl Game {
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Remaining candidates; empty once the game is over
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        match &self.state {
            GameState::InProgress { candidates, .. } => candidates,
            GameState::Solved { .. } | GameState::Failed { .. } => &[],
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self.state, GameState::InProgress { .. })
    }

    /// Final outcome: rounds used, or `ExhaustedAttempts`; `None` while in progress
    #[must_use]
    pub const fn outcome(&self) -> Option<Result<usize, SolverError>> {
        match self.state {
            GameState::InProgress { .. } => None,
            GameState::Solved { rounds } => Some(Ok(rounds)),
            GameState::Failed { rounds } => Some(Err(SolverError::ExhaustedAttempts { rounds })),
        }
    }
}

/// Main Wordle solver
///
/// Coordinates the guess, feedback and narrow loop using a given strategy.
#[derive(Debug, Clone)]
pub struct Solver<S: Strategy> {
    strategy: S,
    corpus: Arc<Corpus>,
    max_rounds: usize,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy and corpus
    ///
    /// A `max_rounds` of zero is treated as one.
    #[must_use]
    pub fn new(strategy: S, corpus: Arc<Corpus>, max_rounds: usize) -> Self {
        Self {
            strategy,
            corpus,
            max_rounds: max_rounds.max(1),
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Start a game over the full solution corpus
    #[must_use]
    pub fn new_game(&self) -> Game {
        Game {
            state: GameState::InProgress {
                round: 0,
                candidates: self.corpus.solutions().to_vec(),
            },
            turns: Vec::new(),
        }
    }

    /// Ask the strategy for the next guess in `game`
    ///
    /// # Errors
    /// `GameFinished` for a finished game; otherwise whatever the strategy reports.
    pub fn suggest(&mut self, game: &Game) -> Result<Word, SolverError> {
        match &game.state {
            GameState::InProgress { candidates, .. } => self.strategy.next_guess(candidates),
            GameState::Solved { .. } | GameState::Failed { .. } => Err(SolverError::GameFinished),
        }
    }

    /// Record the feedback observed for `guess` and move the game on
    ///
    /// On error the game is left unchanged.
    ///
    /// # Errors
    /// - `GameFinished` if the game is already over
    /// - `EmptyCandidateSet` if the feedback contradicts every remaining candidate
    pub fn advance(
        &self,
        game: &mut Game,
        guess: Word,
        feedback: Feedback,
    ) -> Result<(), SolverError> {
        let GameState::InProgress { round, candidates } = &game.state else {
            return Err(SolverError::GameFinished);
        };
        let round = *round + 1;
        let candidates_before = candidates.len();

        let (next, candidates_after) = if feedback.is_perfect() {
            (GameState::Solved { rounds: round }, 0)
        } else {
            let narrowed = narrow(candidates, &guess, feedback)?;
            let remaining = narrowed.len();
            if round >= self.max_rounds {
                (GameState::Failed { rounds: round }, remaining)
            } else {
                (
                    GameState::InProgress {
                        round,
                        candidates: narrowed,
                    },
                    remaining,
                )
            }
        };

        debug!("round {round}: {guess} {feedback} ({candidates_before} -> {candidates_after})");
        game.turns.push(Turn {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });
        game.state = next;
        Ok(())
    }

    /// Drop the last round by replaying the earlier ones
    ///
    /// Returns the removed turn, or `None` if nothing was played yet.
    pub fn undo(&self, game: &mut Game) -> Option<Turn> {
        let mut turns = std::mem::take(&mut game.turns);
        let removed = turns.pop();

        let mut replay = self.new_game();
        for turn in turns {
            // These rounds were accepted before, so they replay cleanly
            if self.advance(&mut replay, turn.guess, turn.feedback).is_err() {
                break;
            }
        }
        *game = replay;
        removed
    }

    /// Play a whole game against a known target
    ///
    /// Returns the finished game; a `Failed` game is a normal result, see
    /// [`Game::outcome`].
    ///
    /// # Errors
    /// Propagates strategy and narrowing errors (a target outside the solution
    /// corpus can narrow the candidates to nothing).
    pub fn solve(&mut self, target: &Word) -> Result<Game, SolverError> {
        let mut game = self.new_game();
        while !game.is_finished() {
            let guess = self.suggest(&game)?;
            let feedback = compute_feedback(&guess, target);
            self.advance(&mut game, guess, feedback)?;
        }
        Ok(game)
    }
}

impl Solver<StrategyType> {
    /// An independent solver for another worker, see [`StrategyType::fork`]
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            strategy: self.strategy.fork(),
            corpus: Arc::clone(&self.corpus),
            max_rounds: self.max_rounds,
        }
    }
}
