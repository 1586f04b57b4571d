//! Wordle solving algorithms
//!
//! Candidate narrowing, the frequency heuristic, the entropy solver and the game
//! loop that ties them together.

mod engine;
pub mod entropy;
mod filter;
pub mod heuristic;
pub mod strategy;

pub use engine::{Game, GameState, Solver, Turn};
pub use entropy::EntropySolver;
pub use filter::narrow;
pub use heuristic::HeuristicScorer;
pub use strategy::{BaselineStrategy, Strategy, StrategyKind, StrategyType};
