//! Entropy-based guess selection
//!
//! Shannon entropy of feedback distributions, the memo tables that make it cheap to
//! re-evaluate, and the selector that combines them with the heuristic shortlist.

mod cache;
mod calculator;
mod selector;

pub use cache::{CandidateFingerprint, EntropyCache, EntropyKey, FeedbackCache};
pub use calculator::{feedback_entropy, group_by_feedback, shannon_entropy};
pub use selector::EntropySolver;
