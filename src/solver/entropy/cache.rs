//! Memo tables for feedback and entropy
//!
//! Both tables are append-only. Feedback is a pure function of its two words, so
//! entries never go stale. Entropy entries are keyed according to
//! [`EntropyKeyPolicy`]; only the count-only policy can return a value computed for a
//! different candidate set.
//!
//! Neither table is synchronized. Parallel harnesses give each worker its own solver
//! (see `EntropySolver::fork`) instead of sharing one behind a lock.

use crate::config::EntropyKeyPolicy;
use crate::core::{Feedback, Word, compute_feedback};
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

/// Cached `compute_feedback` results keyed by (guess, solution)
#[derive(Debug, Clone, Default)]
pub struct FeedbackCache {
    entries: FxHashMap<(Word, Word), Feedback>,
}

impl FeedbackCache {
    /// Feedback of `guess` against `solution`, computed at most once per pair
    pub fn feedback(&mut self, guess: &Word, solution: &Word) -> Feedback {
        *self
            .entries
            .entry((*guess, *solution))
            .or_insert_with(|| compute_feedback(guess, solution))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Order-independent identity of a candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateFingerprint {
    hash: u64,
    len: usize,
}

impl CandidateFingerprint {
    /// Hash of the sorted candidate words
    #[must_use]
    pub fn of(candidates: &[Word]) -> Self {
        let mut sorted = candidates.to_vec();
        sorted.sort_unstable();

        let mut hasher = FxHasher::default();
        sorted.hash(&mut hasher);

        Self {
            hash: hasher.finish(),
            len: candidates.len(),
        }
    }

    /// Number of candidates in the set
    #[must_use]
    pub const fn size(&self) -> usize {
        self.len
    }
}

/// Key of one entropy entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntropyKey {
    Set {
        guess: Word,
        fingerprint: CandidateFingerprint,
    },
    Count {
        guess: Word,
        len: usize,
    },
}

impl EntropyKey {
    #[must_use]
    pub const fn new(
        policy: EntropyKeyPolicy,
        guess: Word,
        fingerprint: CandidateFingerprint,
    ) -> Self {
        match policy {
            EntropyKeyPolicy::CandidateSet => Self::Set { guess, fingerprint },
            EntropyKeyPolicy::CandidateCount => Self::Count {
                guess,
                len: fingerprint.size(),
            },
        }
    }
}

/// Cached entropy scores
#[derive(Debug, Clone, Default)]
pub struct EntropyCache {
    entries: FxHashMap<EntropyKey, f64>,
}

impl EntropyCache {
    #[must_use]
    pub fn get(&self, key: &EntropyKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    pub fn insert(&mut self, key: EntropyKey, entropy: f64) {
        self.entries.insert(key, entropy);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
