//! Display functions for command results

use super::formatters::{colorize_code, colorize_feedback, format_slot, ratio_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({})",
        result.secret.names().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {}   {}",
            i + 1,
            colorize_code(&step.guess),
            colorize_feedback(&step.feedback)
        );

        if verbose {
            println!(
                "  Possible codes: {} → {}",
                step.possible_before, step.possible_after
            );
            let pools: Vec<String> = step.slots.iter().map(|&s| format_slot(s)).collect();
            println!("  Candidates:     {}", pools.join("  "));
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} turns!", result.turns.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} turns", result.turns.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} vs {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        colorize_code(&result.guess),
        colorize_code(&result.secret)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Feedback:    {}", colorize_feedback(&result.feedback));
    println!(
        "   Consistent:  [{}] {} of {} codes",
        ratio_bar(result.consistent as f64, result.total_codes as f64, 30).green(),
        result.consistent.to_string().bright_yellow(),
        result.total_codes
    );
    println!(
        "   Per-position pools allow {} codes",
        result.possible.to_string().bright_yellow()
    );

    println!("\n📊 Candidates by position:");
    for (position, &slot) in result.slots.iter().enumerate() {
        println!("   {}: {}", position + 1, format_slot(slot));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_games).green()
    );
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for turns in 1..=result.max_turns {
        if let Some(&count) = result.distribution.get(&turns) {
            let pct = count as f64 / result.total_games.max(1) as f64 * 100.0;
            println!(
                "   {turns:2}: {} {count:4} ({pct:5.1}%)",
                ratio_bar(pct, 100.0, 40).green()
            );
        }
    }
}
