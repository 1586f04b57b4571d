//! Word lists for Wordle solving
//!
//! Provides the embedded reference corpus and loaders for custom lists.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::Corpus;
pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
