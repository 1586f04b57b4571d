//! Wordle Entropy Solver
//!
//! Plays Wordle by narrowing the candidate answers after every guess and choosing
//! the next guess by expected information gain, with a letter-frequency heuristic
//! keeping the search small.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_entropy_solver::core::{Word, compute_feedback};
//!
//! let guess = Word::new("speed").unwrap();
//! let solution = Word::new("erase").unwrap();
//!
//! let feedback = compute_feedback(&guess, &solution);
//! assert_eq!(feedback.to_string(), "YBYYB");
//! ```
//!
//! Playing a whole game against the bundled word lists:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wordle_entropy_solver::config::SolverConfig;
//! use wordle_entropy_solver::core::Word;
//! use wordle_entropy_solver::solver::{EntropySolver, Solver};
//! use wordle_entropy_solver::wordlists::Corpus;
//!
//! let corpus = Arc::new(Corpus::reference().unwrap());
//! let strategy = EntropySolver::new(Arc::clone(&corpus), SolverConfig::default()).unwrap();
//! let mut solver = Solver::new(strategy, corpus, 6);
//!
//! let game = solver.solve(&Word::new("zebra").unwrap()).unwrap();
//! println!("{:?}", game.outcome());
//! ```

// Solver settings
pub mod config;

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
