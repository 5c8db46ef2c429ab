//! Wordle Turns - CLI
//!
//! Picks Wordle guesses by minimizing expected turns-to-solve: exact
//! recursive search on small answer pools, a one-ply heuristic on large ones.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::prelude::IndexedRandom;
use std::path::PathBuf;
use wordle_turns::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, compare_strategies, run_benchmark, solve_word,
    },
    core::Word,
    output::{
        print_analysis_result, print_benchmark_result, print_comparison_result,
        print_solve_result,
    },
    solver::{Search, SearchConfig, Tried},
    wordlists::{WordLists, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_turns",
    about = "Wordle solver minimizing expected turns-to-solve",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Answer list, one word per line
    #[arg(short, long)]
    answers: PathBuf,

    /// Extra guess-only words, one per line
    #[arg(short, long)]
    guesses: Option<PathBuf>,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args)]
struct SearchArgs {
    /// Pools smaller than this are searched exactly
    #[arg(long, default_value_t = 5)]
    exact_cutoff: usize,

    /// Exact search refuses pools larger than this
    #[arg(long, default_value_t = 10)]
    exact_ceiling: usize,

    /// Answer candidates evaluated by exact search
    #[arg(long, default_value_t = 10)]
    exact_answer_candidates: usize,

    /// Non-answer guesses evaluated by exact search
    #[arg(long, default_value_t = 100)]
    exact_guess_candidates: usize,

    /// Guesses scored by approximate search
    #[arg(long, default_value_t = 100)]
    approximate_candidates: usize,
}

impl SearchArgs {
    const fn config(&self) -> SearchConfig {
        SearchConfig {
            exact_cutoff: self.exact_cutoff,
            exact_ceiling: self.exact_ceiling,
            exact_answer_candidates: self.exact_answer_candidates,
            exact_guess_candidates: self.exact_guess_candidates,
            approximate_candidates: self.approximate_candidates,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a target word (random answer if omitted)
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Force the first guess
        #[arg(short, long)]
        opening: Option<String>,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = 6)]
        max_turns: usize,

        /// Show candidate counts and feedback per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the best guess for a pool (whole answer list if omitted)
    Best {
        /// Remaining answers
        words: Vec<String>,
    },

    /// Score a single opening guess against the answer list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Compare exact and approximate search on a small pool
    Compare {
        /// Remaining answers
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of answers to test (all if omitted)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Sample the tested answers at random
        #[arg(short, long)]
        random: bool,

        /// Force the first guess
        #[arg(short, long)]
        opening: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lists = WordLists::from_files(&cli.answers, cli.guesses.as_deref())
        .context("failed to load word lists")?;
    let guess_pool = lists.all_words();
    let answers = lists.answer_words();
    let search = Search::new(cli.search.config(), &guess_pool);

    match cli.command {
        Commands::Solve {
            word,
            opening,
            max_turns,
            verbose,
        } => run_solve_command(&search, answers, word, opening, max_turns, verbose),
        Commands::Best { words } => run_best_command(&search, answers, &words),
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &search, answers)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Compare { words } => {
            let pool = parse_words(&words)?;
            let result = compare_strategies(&search, &pool)?;
            print_comparison_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            random,
            opening,
        } => run_benchmark_command(&search, answers, count, random, opening),
    }
}

fn parse_words(words: &[String]) -> Result<Vec<Word>> {
    words
        .iter()
        .map(|word| Word::new(word.as_str()).with_context(|| format!("invalid word '{word}'")))
        .collect()
}

fn run_solve_command(
    search: &Search,
    answers: &[Word],
    word: Option<String>,
    opening: Option<String>,
    max_turns: usize,
    verbose: bool,
) -> Result<()> {
    let target = match word {
        Some(word) => word,
        None => answers
            .choose(&mut rand::rng())
            .map(|word| word.text().to_string())
            .context("answer list is empty")?,
    };

    let mut config = SolveConfig::new(target).with_max_turns(max_turns);
    if let Some(opening) = opening {
        config = config.with_opening(opening);
    }

    let result = solve_word(&config, search, answers)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_best_command(search: &Search, answers: &[Word], words: &[String]) -> Result<()> {
    let custom;
    let pool: Vec<&Word> = if words.is_empty() {
        answers.iter().collect()
    } else {
        custom = parse_words(words)?;
        custom.iter().collect()
    };

    let tier = search.config().tier(pool.len());
    let guess = search.best_guess(&pool, None, &Tried::default())?;

    println!(
        "{} {} ({:?} search over {} answers)",
        "Best guess:".bright_cyan().bold(),
        guess.text().to_uppercase().bright_yellow().bold(),
        tier,
        pool.len()
    );
    Ok(())
}

fn run_benchmark_command(
    search: &Search,
    answers: &[Word],
    count: Option<usize>,
    random: bool,
    opening: Option<String>,
) -> Result<()> {
    let count = count.unwrap_or(answers.len()).min(answers.len());
    if count == 0 {
        bail!("nothing to benchmark");
    }

    let targets: Vec<Word> = if random {
        answers
            .choose_multiple(&mut rand::rng(), count)
            .cloned()
            .collect()
    } else {
        answers[..count].to_vec()
    };

    match &opening {
        Some(word) => println!("Running benchmark on {count} words with opening {word}..."),
        None => println!("Running benchmark on {count} words..."),
    }

    let config = BenchmarkConfig {
        opening,
        progress: true,
    };
    let result = run_benchmark(search, answers, &targets, &config)?;
    print_benchmark_result(&result);
    Ok(())
}
