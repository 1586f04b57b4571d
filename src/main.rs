//! Wordle Entropy Solver - CLI
//!
//! Solve, analyze and evaluate Wordle games with an entropy-maximizing strategy,
//! or get guess suggestions for a live puzzle.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordle_entropy_solver::{
    commands::{
        EvaluationConfig, analyze_word, run_assist, run_evaluation, select_targets, solve_word,
        top_openings,
    },
    config::{EntropyKeyPolicy, SolverConfig},
    core::Word,
    output::{print_analysis_result, print_evaluation_stats, print_openings, print_solve_result},
    solver::{EntropySolver, HeuristicScorer, Solver, StrategyKind, StrategyType},
    wordlists::{
        Corpus, GUESSES, SOLUTIONS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy_solver",
    about = "Wordle solver choosing guesses by expected information gain",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: entropy (default) or baseline
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: StrategyKind,

    /// Solution word list, one word per line (default: embedded corpus)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Allowed guess list, one word per line (default: embedded corpus)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Rounds before a game counts as failed
    #[arg(long, global = true, default_value_t = 6)]
    max_rounds: usize,

    /// Guesses evaluated by entropy each round
    #[arg(long, global = true, default_value_t = 10)]
    shortlist: usize,

    /// Entropy cache key: set (exact) or count (candidate count only)
    #[arg(long, global = true, default_value = "set")]
    entropy_key: EntropyKeyPolicy,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses for a live puzzle (default)
    Assist,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy for each guess
        #[arg(short, long)]
        details: bool,
    },

    /// Analyze a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// List the best-scoring opening words
    Openings,

    /// Play every solution word and report statistics
    Evaluate {
        /// Only play the first N solutions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Play a random sample of N solutions
        #[arg(long, conflicts_with = "limit")]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, requires = "sample")]
        seed: Option<u64>,

        /// Also evaluate the baseline strategy
        #[arg(long)]
        compare: bool,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Load a word list from `path`, or take the embedded one
fn load_words(path: Option<&Path>, embedded: &[&str]) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display())),
        None => Ok(words_from_slice(embedded)),
    }
}

fn load_corpus(cli: &Cli) -> Result<Arc<Corpus>> {
    let solutions = load_words(cli.solutions.as_deref(), SOLUTIONS)?;
    let guesses = load_words(cli.guesses.as_deref(), GUESSES)?;
    Ok(Arc::new(Corpus::new(solutions, guesses)?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let corpus = load_corpus(&cli)?;
    let config = SolverConfig {
        max_rounds: cli.max_rounds,
        shortlist_size: cli.shortlist,
        entropy_key: cli.entropy_key,
        ..SolverConfig::default()
    };
    let build_solver = |kind| -> Result<Solver<StrategyType>> {
        let strategy = StrategyType::build(kind, Arc::clone(&corpus), config)?;
        Ok(Solver::new(strategy, Arc::clone(&corpus), config.max_rounds))
    };

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => {
            let mut solver = build_solver(cli.strategy)?;
            println!(
                "\n{}",
                "Wordle Entropy Solver - Interactive Mode".bright_cyan().bold()
            );
            run_assist(&mut solver, io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Solve { word, details } => {
            let mut solver = build_solver(cli.strategy)?;
            let result = solve_word(&word, &mut solver)?;
            print_solve_result(&result, details);
        }
        Commands::Analyze { word } => {
            let scorer = HeuristicScorer::new(corpus.solutions());
            let result = analyze_word(&word, &corpus, &scorer)?;
            print_analysis_result(&result);
        }
        Commands::Openings => {
            let solver = EntropySolver::new(Arc::clone(&corpus), config)?;
            print_openings(&top_openings(&solver));
        }
        Commands::Evaluate {
            limit,
            sample,
            seed,
            compare,
            quiet,
        } => {
            let targets = select_targets(
                corpus.solutions(),
                &EvaluationConfig {
                    limit,
                    sample,
                    seed,
                },
            );
            println!(
                "Evaluating {} of {} solution words",
                targets.len(),
                corpus.solutions().len()
            );

            let mut kinds = vec![cli.strategy];
            if compare && cli.strategy != StrategyKind::Baseline {
                kinds.push(StrategyKind::Baseline);
            }
            for kind in kinds {
                let solver = build_solver(kind)?;
                let stats = run_evaluation(&solver, &targets, !quiet)?;
                print_evaluation_stats(&stats);
            }
        }
    }

    Ok(())
}
