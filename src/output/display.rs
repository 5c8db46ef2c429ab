//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult, ComparisonResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.text().to_uppercase(),
            feedback_to_emoji(&step.word, &step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Feedback:   {}", step.feedback);
        }
    }

    if verbose {
        println!("\n  Knowledge:  {}", result.knowledge);
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_candidates as f64;
    let bar = create_progress_bar(total - result.largest_class as f64, total, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Expected turns:  {}",
        format!("{:.3}", result.expected_turns).bright_yellow().bold()
    );
    println!("   Pool score:      {:.3}", result.approximate_score);
    println!("   Outcomes:        {}", result.classes);
    println!(
        "   Worst case:      [{}] {} left",
        bar.green(),
        result.largest_class
    );
    if result.is_candidate {
        println!("   {}", "Could be the answer".green());
    }
}

/// Print an exact vs approximate comparison
pub fn print_comparison_result(result: &ComparisonResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} answers) ",
        "EXACT VS APPROXIMATE".bright_cyan().bold(),
        result.pool_size
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Exact:        {}  {:.3} turns",
        result.exact.word.text().to_uppercase().bright_yellow().bold(),
        result.exact.expected_turns
    );
    println!(
        "   Approximate:  {}  {:.3} turns",
        result.approximate.word.text().to_uppercase().bright_yellow(),
        result.approximate.expected_turns
    );

    let regret = result.regret();
    let line = format!("   Regret:       {regret:+.3}");
    if regret > 1e-9 {
        println!("{}", line.yellow());
    } else {
        println!("{}", line.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failed.is_empty() {
        println!("\n❌ {}", "Failed:".red().bold());
        for word in &result.failed {
            println!("   {}", word.text().to_uppercase());
        }
    }
}
