//! Interactive assistant
//!
//! Suggests a guess, reads the feedback the real puzzle gave, and narrows the
//! candidates. Reads commands line by line so it can be driven from a terminal or a
//! script.

use crate::core::{Feedback, Word};
use crate::error::SolverError;
use crate::solver::{Game, GameState, Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Candidates are listed once there are at most this many
const SHOW_CANDIDATES: usize = 10;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
    /// Feedback for the suggested guess, or for a word the player chose instead
    Feedback(Option<Word>, Feedback),
}

fn parse_command(line: &str) -> Result<Command, String> {
    let lower = line.trim().to_lowercase();
    match lower.as_str() {
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "new" | "n" => return Ok(Command::New),
        "undo" | "u" => return Ok(Command::Undo),
        "win" | "solved" => return Ok(Command::Feedback(None, Feedback::PERFECT)),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(feedback), None, None) => Ok(Command::Feedback(None, feedback.parse()?)),
        (Some(word), Some(feedback), None) => {
            let word = Word::new(word).map_err(|e| e.to_string())?;
            Ok(Command::Feedback(Some(word), feedback.parse()?))
        }
        _ => Err("expected feedback like GYBBG, or '<word> <feedback>'".to_string()),
    }
}

/// Run the assistant until `quit` or end of input
///
/// Returns the game as it stood when the session ended.
///
/// # Errors
///
/// Returns an error on I/O failure or if the strategy cannot suggest a guess.
pub fn run_assist<S, R, W>(solver: &mut Solver<S>, input: R, mut out: W) -> Result<Game>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Enter the feedback for each guess: G green, Y yellow, B or - gray.")?;
    writeln!(out, "Type '<word> <feedback>' if you played a different word.")?;
    writeln!(out, "Commands: 'win', 'undo', 'new', 'quit'\n")?;

    let mut game = solver.new_game();
    let mut lines = input.lines();

    loop {
        let suggestion = match game.state() {
            GameState::InProgress { round, candidates } => {
                let guess = solver.suggest(&game)?;
                writeln!(out, "{}", "─".repeat(60).cyan())?;
                writeln!(
                    out,
                    "Turn {}: {} candidates remaining",
                    round + 1,
                    candidates.len()
                )?;
                if candidates.len() <= SHOW_CANDIDATES {
                    let listed: Vec<String> =
                        candidates.iter().map(|w| w.as_str().to_uppercase()).collect();
                    writeln!(out, "  {}", listed.join(" "))?;
                }
                writeln!(
                    out,
                    "Suggested guess: {}",
                    guess.as_str().to_uppercase().bright_yellow().bold()
                )?;
                Some(guess)
            }
            GameState::Solved { rounds } => {
                writeln!(out, "{}", format!("Solved in {rounds}!").green().bold())?;
                writeln!(out, "Type 'new' to play again or 'quit' to exit.")?;
                None
            }
            GameState::Failed { rounds } => {
                writeln!(
                    out,
                    "{}",
                    format!("Out of guesses after {rounds} rounds.").red().bold()
                )?;
                writeln!(out, "Type 'undo', 'new' or 'quit'.")?;
                None
            }
        };

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(game);
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(game),
            Ok(Command::New) => {
                game = solver.new_game();
                writeln!(out, "New game started.")?;
            }
            Ok(Command::Undo) => match solver.undo(&mut game) {
                Some(turn) => writeln!(out, "Undid {}.", turn.guess.as_str().to_uppercase())?,
                None => writeln!(out, "Nothing to undo.")?,
            },
            Ok(Command::Feedback(word, feedback)) => {
                let Some(guess) = word.or(suggestion) else {
                    writeln!(out, "The game is over.")?;
                    continue;
                };
                match solver.advance(&mut game, guess, feedback) {
                    Ok(()) => writeln!(out, "{} {}", guess.as_str().to_uppercase(), feedback.to_emoji())?,
                    Err(SolverError::EmptyCandidateSet { .. }) => writeln!(
                        out,
                        "{}",
                        "No word matches that feedback. Check it, or 'undo'.".red()
                    )?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            Err(message) => writeln!(out, "{}", message.red())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::solver::EntropySolver;
    use crate::wordlists::Corpus;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;
    use std::sync::Arc;

    fn solver() -> Solver<EntropySolver> {
        let solutions = words_from_slice(&["irate", "crate", "grate", "slate", "skate", "moldy"]);
        let mut guesses = solutions.clone();
        guesses.extend(words_from_slice(&["arise", "crane"]));
        let corpus = Arc::new(Corpus::new(solutions, guesses).unwrap());
        let strategy = EntropySolver::new(Arc::clone(&corpus), SolverConfig::default()).unwrap();
        Solver::new(strategy, corpus, 6)
    }

    fn run(script: &str) -> (Game, String) {
        let mut solver = solver();
        let mut out = Vec::new();
        let game = run_assist(&mut solver, Cursor::new(script), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
        assert_eq!(parse_command(" undo "), Ok(Command::Undo));
        assert_eq!(
            parse_command("win"),
            Ok(Command::Feedback(None, Feedback::PERFECT))
        );
        assert_eq!(
            parse_command("bbggg"),
            Ok(Command::Feedback(None, "BBGGG".parse().unwrap()))
        );
        assert_eq!(
            parse_command("crane BGGBG"),
            Ok(Command::Feedback(
                Some(Word::new("crane").unwrap()),
                "BGGBG".parse().unwrap()
            ))
        );
        assert!(parse_command("GGG").is_err());
        assert!(parse_command("a b c").is_err());
    }

    #[test]
    fn plays_to_a_win() {
        // Target skate: irate BBGGG, then slate GBGGG, then skate
        let (game, output) = run("BBGGG\nGBGGG\nwin\n");

        assert_eq!(game.state(), &GameState::Solved { rounds: 3 });
        assert!(output.contains("IRATE"));
        assert!(output.contains("Solved in 3!"));
    }

    #[test]
    fn bad_feedback_keeps_the_game() {
        let (game, output) = run("GGGGB\nxyz\nBBGGG\n");

        assert!(output.contains("No word matches that feedback"));
        assert_eq!(game.turns().len(), 1);
        assert_eq!(game.candidates(), words_from_slice(&["slate", "skate"]));
    }

    #[test]
    fn undo_new_and_quit() {
        let (game, output) = run("BBGGG\nundo\nundo\ncrane BBGBG\nnew\nquit\nBBGGG\n");

        assert!(output.contains("Undid IRATE."));
        assert!(output.contains("Nothing to undo."));
        assert!(output.contains("New game started."));
        // quit ends the session before the last line
        assert!(game.turns().is_empty());
    }

    #[test]
    fn other_word_narrows_candidates() {
        let (game, _) = run("crane BBGBG\n");

        assert_eq!(game.turns()[0].guess.as_str(), "crane");
        assert_eq!(game.candidates(), words_from_slice(&["slate", "skate"]));
    }
}
