//! Command implementations

pub mod analyze;
pub mod assist;
pub mod evaluate;
pub mod opening;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use assist::run_assist;
pub use evaluate::{EvaluationConfig, EvaluationStats, WordProperties, run_evaluation, select_targets};
pub use opening::{Opening, top_openings};
pub use solve::{GuessStep, SolveResult, solve_word};
