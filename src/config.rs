//! Solver tuning knobs

use std::fmt;
use std::str::FromStr;

/// How the entropy cache identifies a candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropyKeyPolicy {
    /// Key by a fingerprint of the sorted candidate set (no collisions between sets)
    #[default]
    CandidateSet,
    /// Key by candidate count only; distinct sets of equal size share an entry
    CandidateCount,
}

impl FromStr for EntropyKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "set" => Ok(Self::CandidateSet),
            "count" => Ok(Self::CandidateCount),
            other => Err(format!("unknown entropy key policy {other:?} (expected set|count)")),
        }
    }
}

impl fmt::Display for EntropyKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CandidateSet => "set",
            Self::CandidateCount => "count",
        })
    }
}

/// Configuration shared by every game a solver plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Rounds allowed before a game counts as failed
    pub max_rounds: usize,
    /// Heuristically best guesses that get a full entropy evaluation
    pub shortlist_size: usize,
    /// Best-scoring allowed guesses kept as opening words
    pub opening_pool_size: usize,
    pub entropy_key: EntropyKeyPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_rounds: 6,
            shortlist_size: 10,
            opening_pool_size: 20,
            entropy_key: EntropyKeyPolicy::default(),
        }
    }
}
