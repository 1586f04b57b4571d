//! Feedback calculation and representation
//!
//! A feedback value encodes the per-position marks of a guess in base 3:
//! - 0 = Black (letter absent among unconsumed occurrences)
//! - 1 = Yellow (letter present elsewhere)
//! - 2 = Green (letter in correct position)
//!
//! Position `i` contributes `digit × 3^i`, so the value fits in a single byte (0-242).

use super::word::{WORD_LENGTH, Word};
use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;

/// The mark shown for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Correct letter, correct position
    Green,
    /// Letter present at another, still unconsumed, position
    Yellow,
    /// Letter absent
    Black,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Black,
        }
    }

    /// Single-letter symbol used in the serialized form
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Black => 'B',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'B' | 'b' | '-' | '_' | '⬛' | '⬜' => Some(Self::Black),
            _ => None,
        }
    }
}

/// Feedback for a whole guess
///
/// Serialized as five `G`/`Y`/`B` characters; all-`G` means the puzzle is solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback(u8);

impl Feedback {
    /// All greens (solved)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct feedback values (3^5)
    pub const COUNT: usize = 243;

    /// Build feedback from individual marks
    #[must_use]
    pub const fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        let mut i = 0;
        while i < WORD_LENGTH {
            value += marks[i].digit() * multiplier;
            // 3^5 overflows u8, skip the last multiply
            if i + 1 < WORD_LENGTH {
                multiplier *= 3;
            }
            i += 1;
        }
        Self(value)
    }

    /// Get the raw encoded value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Decode into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut val = self.0;
        std::array::from_fn(|_| {
            let mark = Mark::from_digit(val % 3);
            val /= 3;
            mark
        })
    }

    /// Count positions carrying `mark`
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.marks().iter().filter(|&&m| m == mark).count()
    }

    /// Convert to emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Green => '🟩',
                Mark::Yellow => '🟨',
                Mark::Black => '⬛',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse "GYBBG" (case-insensitive; `-`/`_` and coloured squares also accepted)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<Mark> = s
            .chars()
            .map(Mark::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback character in {s:?}"))?;

        let marks: [Mark; WORD_LENGTH] = marks
            .try_into()
            .map_err(|_| format!("Feedback must have {WORD_LENGTH} marks: {s:?}"))?;

        Ok(Self::from_marks(marks))
    }
}

/// Calculate the feedback when `guess` is played against `solution`
///
/// Two passes over the positions:
/// 1. Exact matches become Green and consume that solution letter.
/// 2. Every other guess letter takes the leftmost unconsumed matching solution
///    letter (Yellow, consuming it) or becomes Black.
///
/// # Examples
/// ```
/// use wordle_entropy_solver::core::{Word, compute_feedback};
///
/// let guess = Word::new("speed").unwrap();
/// let solution = Word::new("erase").unwrap();
/// assert_eq!(compute_feedback(&guess, &solution).to_string(), "YBYYB");
/// ```
// Allow: indices address guess, solution, marks and consumed in lockstep
#[allow(clippy::needless_range_loop)]
#[must_use]
pub fn compute_feedback(guess: &Word, solution: &Word) -> Feedback {
    let guess = guess.chars();
    let solution = solution.chars();
    let mut marks = [Mark::Black; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        if guess[i] == solution[i] {
            marks[i] = Mark::Green;
            consumed[i] = true;
        }
    }

    for i in 0..WORD_LENGTH {
        if marks[i] == Mark::Green {
            continue;
        }
        if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && solution[j] == guess[i]) {
            marks[i] = Mark::Yellow;
            consumed[j] = true;
        }
    }

    Feedback::from_marks(marks)
}

/// String boundary for [`compute_feedback`]
///
/// # Errors
/// Returns `SolverError::InvalidWord` if either word is not 5 ASCII letters.
pub fn compute_feedback_str(guess: &str, solution: &str) -> Result<Feedback, SolverError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    Ok(compute_feedback(&guess, &solution))
}

/// Check whether `candidate` could be the solution given an observed feedback
#[inline]
#[must_use]
pub fn matches(candidate: &Word, guess: &Word, feedback: Feedback) -> bool {
    compute_feedback(guess, candidate) == feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[rstest]
    #[case("speed", "erase", "YBYYB")]
    #[case("sassy", "essay", "YYGBG")]
    #[case("robot", "floor", "YYBGB")]
    #[case("crane", "slate", "BBGBG")]
    #[case("eerie", "there", "YBYBG")]
    #[case("llama", "hello", "YYBBB")]
    #[case("abbey", "babes", "YYGGB")]
    #[case("abcde", "fghij", "BBBBB")]
    #[case("crane", "crane", "GGGGG")]
    fn golden_feedback(#[case] guess: &str, #[case] solution: &str, #[case] expected: &str) {
        let feedback = compute_feedback(&word(guess), &word(solution));
        assert_eq!(feedback.to_string(), expected);
    }

    #[test]
    fn duplicate_guess_letter_credited_once() {
        // The solution's only E is taken by the green, so both earlier Es are Black
        let feedback = compute_feedback(&word("geese"), &word("those"));
        assert_eq!(feedback.to_string(), "BBBGG");
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.value(), 242);
        assert_eq!(Feedback::PERFECT.to_string(), "GGGGG");
        assert_eq!(Feedback::PERFECT.count(Mark::Green), 5);
    }

    #[test]
    fn marks_always_sum_to_word_length() {
        let words = ["speed", "erase", "sassy", "essay", "llama", "hello", "zzzzz"];
        for guess in words {
            for solution in words {
                let feedback = compute_feedback(&word(guess), &word(solution));
                let total = feedback.count(Mark::Green)
                    + feedback.count(Mark::Yellow)
                    + feedback.count(Mark::Black);
                assert_eq!(total, WORD_LENGTH);
                assert_eq!(feedback, compute_feedback(&word(guess), &word(solution)));
            }
        }
    }

    #[test]
    fn matches_is_reflexive() {
        let words = ["speed", "erase", "robot", "floor", "abbey", "babes"];
        for guess in words {
            for solution in words {
                let (g, s) = (word(guess), word(solution));
                assert!(matches(&s, &g, compute_feedback(&g, &s)));
            }
        }
    }

    #[test]
    fn matches_rejects_inconsistent_candidate() {
        let guess = word("crane");
        let feedback = compute_feedback(&guess, &word("slate"));
        assert!(!matches(&word("irate"), &guess, feedback));
    }

    #[test]
    fn parse_and_display_round_trip() {
        let feedback: Feedback = "gyBbG".parse().unwrap();
        assert_eq!(feedback.to_string(), "GYBBG");
        assert_eq!("🟩🟨⬛⬛🟩".parse::<Feedback>().unwrap(), feedback);
        assert_eq!("GY--G".parse::<Feedback>().unwrap(), feedback);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬛⬛🟩");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("GYGGYG".parse::<Feedback>().is_err());
        assert!("GYG".parse::<Feedback>().is_err());
        assert!("GXGGY".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }

    #[test]
    fn string_boundary_rejects_invalid_words() {
        assert!(matches!(
            compute_feedback_str("speeds", "erase"),
            Err(SolverError::InvalidWord(_))
        ));
        assert!(matches!(
            compute_feedback_str("speed", "er4se"),
            Err(SolverError::InvalidWord(_))
        ));
        assert_eq!(
            compute_feedback_str("SPEED", "erase").unwrap().to_string(),
            "YBYYB"
        );
    }
}
