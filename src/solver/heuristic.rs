//! Letter-frequency heuristic used to shortlist guesses
//!
//! Tables are computed once from the solution corpus and never change afterwards.
//! A word's score is a cheap proxy for how well it will split the candidates, so the
//! expensive entropy search only has to look at a handful of words.

use crate::core::{WORD_LENGTH, Word};

/// Letters ranked as globally common
const COMMON_LETTER_COUNT: usize = 10;
/// Letters ranked as common at each position
const COMMON_POSITION_COUNT: usize = 5;
/// Repeated letters rarer than this are penalized
const RARE_LETTER_THRESHOLD: u32 = 100;
const DUPLICATE_PENALTY: i64 = 50;
const BALANCED_VOWEL_BONUS: i64 = 100;
const COMMON_POSITION_BONUS: i64 = 50;
const POSITION_WEIGHT: i64 = 2;

const ALPHABET: usize = 26;

#[inline]
const fn index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Precomputed letter statistics over a solution corpus
#[derive(Debug, Clone)]
pub struct HeuristicScorer {
    letter_frequency: [u32; ALPHABET],
    position_frequency: [[u32; ALPHABET]; WORD_LENGTH],
    common_letters: Vec<u8>,
    common_positions: [Vec<u8>; WORD_LENGTH],
}

impl HeuristicScorer {
    /// Build the frequency tables from the solution corpus
    ///
    /// Ties in the common-letter rankings go to the letter seen first in corpus order.
    #[must_use]
    pub fn new(solutions: &[Word]) -> Self {
        let mut letter_frequency = [0u32; ALPHABET];
        let mut position_frequency = [[0u32; ALPHABET]; WORD_LENGTH];
        let mut letter_first_seen = [usize::MAX; ALPHABET];
        let mut position_first_seen = [[usize::MAX; ALPHABET]; WORD_LENGTH];

        for (word_idx, word) in solutions.iter().enumerate() {
            for (pos, &letter) in word.chars().iter().enumerate() {
                let c = index(letter);
                let seq = word_idx * WORD_LENGTH + pos;

                letter_frequency[c] += 1;
                letter_first_seen[c] = letter_first_seen[c].min(seq);

                position_frequency[pos][c] += 1;
                position_first_seen[pos][c] = position_first_seen[pos][c].min(word_idx);
            }
        }

        let common_letters = top_letters(
            &letter_frequency,
            &letter_first_seen,
            COMMON_LETTER_COUNT,
        );
        let common_positions = std::array::from_fn(|pos| {
            top_letters(
                &position_frequency[pos],
                &position_first_seen[pos],
                COMMON_POSITION_COUNT,
            )
        });

        Self {
            letter_frequency,
            position_frequency,
            common_letters,
            common_positions,
        }
    }

    /// Total occurrences of `letter` across all solutions
    #[must_use]
    pub const fn letter_frequency(&self, letter: u8) -> u32 {
        self.letter_frequency[index(letter)]
    }

    /// Occurrences of `letter` at `position` across all solutions
    #[must_use]
    pub const fn position_frequency(&self, position: usize, letter: u8) -> u32 {
        self.position_frequency[position][index(letter)]
    }

    /// The most frequent letters overall, most frequent first
    #[must_use]
    pub fn common_letters(&self) -> &[u8] {
        &self.common_letters
    }

    /// The most frequent letters at `position`, most frequent first
    #[must_use]
    pub fn common_at(&self, position: usize) -> &[u8] {
        &self.common_positions[position]
    }

    /// Static heuristic score of a word
    ///
    /// Sum of letter frequencies, plus double the positional frequencies, minus a
    /// penalty for repeated rare letters, plus bonuses for a balanced vowel count and
    /// for each letter sitting in one of its position's common slots.
    #[must_use]
    pub fn score(&self, word: &Word) -> i64 {
        let chars = word.chars();
        let mut score = 0i64;

        for (pos, &letter) in chars.iter().enumerate() {
            score += i64::from(self.letter_frequency(letter));
            score += POSITION_WEIGHT * i64::from(self.position_frequency(pos, letter));
        }

        for (pos, &letter) in chars.iter().enumerate() {
            // Penalize each repeated letter once, at its first occurrence
            if chars[..pos].contains(&letter) {
                continue;
            }
            let count = word.count_of(letter) as i64;
            if count > 1 && self.letter_frequency(letter) < RARE_LETTER_THRESHOLD {
                score -= DUPLICATE_PENALTY * (count - 1);
            }
        }

        if (1..=3).contains(&word.vowel_count()) {
            score += BALANCED_VOWEL_BONUS;
        }

        for (pos, letter) in chars.iter().enumerate() {
            if self.common_positions[pos].contains(letter) {
                score += COMMON_POSITION_BONUS;
            }
        }

        score
    }

    /// Score `words` and keep the best `limit`, highest first
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn rank<'w, I>(&self, words: I, limit: usize) -> Vec<(Word, i64)>
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut scored: Vec<(Word, i64)> = words
            .into_iter()
            .map(|&word| (word, self.score(&word)))
            .collect();
        scored.sort_by(|(_, a), (_, b)| b.cmp(a));
        scored.truncate(limit);
        scored
    }
}

/// Up to `n` letters with non-zero counts, by count (desc) then first appearance
fn top_letters(counts: &[u32; ALPHABET], first_seen: &[usize; ALPHABET], n: usize) -> Vec<u8> {
    let mut letters: Vec<usize> = (0..ALPHABET).filter(|&c| counts[c] > 0).collect();
    letters.sort_by(|&a, &b| counts[b].cmp(&counts[a]).then(first_seen[a].cmp(&first_seen[b])));
    letters
        .into_iter()
        .take(n)
        .map(|c| b'a' + c as u8)
        .collect()
}
