//! Core domain types for Wordle
//!
//! Words, feedback marks, and the feedback rule itself. Everything here is a pure
//! function of its inputs.

pub mod feedback;
mod word;

pub use feedback::{Feedback, Mark, compute_feedback, compute_feedback_str, matches};
pub use word::{WORD_LENGTH, Word, WordError};
