//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, EvaluationStats, Opening, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_guess(&step.guess, step.feedback),
            step.feedback
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!(
                    "  Entropy:    [{}] {entropy:.3} bits",
                    entropy_bar(entropy, step.candidates_before, 20).green()
                );
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
        }
    }

    println!();
    match &result.outcome {
        Ok(rounds) => println!(
            "{}",
            format!("✅ Solved in {rounds} guesses!").green().bold()
        ),
        Err(e) => println!("{}", format!("❌ {e}").red().bold()),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.allowed {
        println!("\n{}", "Not in the allowed guess list".yellow());
    }

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Outcomes:    {} (worst case {} candidates)",
        result.partitions, result.largest_partition
    );
    println!("   Heuristic:   {}", result.heuristic_score);
    if !result.common_letters.is_empty() {
        println!("   Common:      {}", result.common_letters.to_uppercase());
    }
}

/// Print the opening word list
pub fn print_openings(openings: &[Opening]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n  {:>3}  {:<6} {:>6}  {:>8}", "#", "word", "score", "entropy");

    for opening in openings {
        let word = opening.word.as_str().to_uppercase();
        let word = if opening.rank == 1 {
            word.bright_green().bold()
        } else {
            word.normal()
        };
        println!(
            "  {:>3}  {word:<6} {:>6}  {:>8.3}",
            opening.rank, opening.score, opening.entropy
        );
    }
}

/// Print evaluation statistics
pub fn print_evaluation_stats(stats: &EvaluationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "EVALUATION:".bright_cyan().bold(),
        stats.strategy.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", stats.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses).bright_yellow().bold()
    );
    println!("   Solved average:   {:.2}", stats.average_guesses_solved);
    if stats.failed > 0 {
        println!("   Failed average:   {:.2}", stats.average_guesses_failed);
    }
    let failure = format!("{:.1}%", stats.failure_rate);
    println!(
        "   Failure rate:     {}",
        if stats.failed == 0 {
            failure.green()
        } else {
            failure.red()
        }
    );
    println!("   Time taken:       {:.1}s", stats.total_time.as_secs_f64());
    println!(
        "   Time per word:    {:.3}s",
        stats.time_per_word.as_secs_f64()
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &stats.distribution {
        let pct = count as f64 / stats.total_words.max(1) as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    if stats.failed > 0 {
        println!("   ✗: {:>44} ({:5.1}%)", stats.failed, stats.failure_rate);
    }

    println!("\n🔍 {}", "Candidates per round:".bright_cyan().bold());
    for (round, average) in stats.candidates_per_round.iter().enumerate() {
        println!("   Guess {}: {average:.1} candidates", round + 1);
    }

    if let Some(props) = &stats.failed_properties {
        println!("\n😰 {}", "Failed words on average:".yellow().bold());
        println!("   Unique letters:   {:.2}", props.unique_letters);
        println!("   Vowels:           {:.2}", props.vowels);
        println!("   Common letters:   {:.2}", props.common_letters);
        println!("   Repeated letters: {:.2}", props.repeated_letters);
    }

    if !stats.hardest.is_empty() {
        println!("\n🧱 {}", "Hardest words:".yellow().bold());
        for (word, rounds, success) in &stats.hardest {
            let word = word.as_str().to_uppercase();
            if *success {
                println!("   {} ({rounds} guesses)", word.yellow());
            } else {
                println!("   {} (failed)", word.red());
            }
        }
    }
}
