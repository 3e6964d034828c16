//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret and generates statistics.

use super::solve::play_match;
use crate::core::Code;
use crate::game::GameConfig;
use crate::output::formatters::{colorize_code, create_progress_bar};
use crate::solver::GuessStrategist;
use colored::Colorize;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub success: bool,
    /// The solver aborted on an inconsistent belief state
    pub aborted: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub strategy: &'static str,
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub aborted: usize,
    pub turn_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub min_turns: usize,
    pub hardest: Vec<(Code, usize)>,
}

/// Run the solver on every secret (or the first `limit` of them)
///
/// Matches run in parallel; each one draws its opening guess from its own
/// random stream, so seeded runs are reproducible regardless of scheduling.
#[must_use]
pub fn run_test_all(config: &GameConfig, limit: Option<usize>) -> TestAllStatistics {
    let all = Code::all();
    let secrets = &all[..limit.unwrap_or(all.len()).min(all.len())];

    println!("🎯 Testing {} secrets...", secrets.len());

    let pb = create_progress_bar(secrets.len() as u64);
    let total_start = Instant::now();

    let results: Vec<CodeTestResult> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, &secret)| {
            let mut strategist = GuessStrategist::new(config.strategy, config.rng_for(index));
            let result = match play_match(&mut strategist, secret, config.turn_limit) {
                Ok(result) => CodeTestResult {
                    secret,
                    guesses: result.turns.iter().map(|t| t.guess).collect(),
                    success: result.success,
                    aborted: false,
                },
                Err(_) => CodeTestResult {
                    secret,
                    guesses: Vec::new(),
                    success: false,
                    aborted: true,
                },
            };
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(config.strategy.name(), &results, total_start.elapsed())
}

fn summarize(strategy: &'static str, results: &[CodeTestResult], total_time: Duration) -> TestAllStatistics {
    let solved_turns: Vec<usize> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guesses.len())
        .collect();

    let solved = solved_turns.len();
    let aborted = results.iter().filter(|r| r.aborted).count();

    let mut turn_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &turns in &solved_turns {
        *turn_distribution.entry(turns).or_insert(0) += 1;
    }

    let average_turns = if solved > 0 {
        solved_turns.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest: Vec<(Code, usize)> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| (r.secret, r.guesses.len()))
        .collect();
    hardest.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    hardest.truncate(10);

    TestAllStatistics {
        strategy,
        total_codes: results.len(),
        solved,
        failed: results.len() - solved,
        aborted,
        turn_distribution,
        total_time,
        average_turns,
        max_turns: solved_turns.iter().copied().max().unwrap_or(0),
        min_turns: solved_turns.iter().copied().min().unwrap_or(0),
        hardest,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ({}) ", stats.strategy);
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_codes);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    if stats.aborted > 0 {
        println!(
            "  Inconsistent state:   {}",
            stats.aborted.to_string().red().bold()
        );
    }
    println!(
        "  Average turns:        {}",
        format!("{:.3}", stats.average_turns).bright_yellow().bold()
    );
    println!(
        "  Fewest / most turns:  {} / {}",
        stats.min_turns, stats.max_turns
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    let max_count = stats.turn_distribution.values().copied().max().unwrap_or(1);
    for turns in 1..=stats.max_turns {
        let count = stats.turn_distribution.get(&turns).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {turns:2} turns: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, turns) in stats.hardest.iter().take(5) {
            println!("  {} ({turns} turns)", colorize_code(secret));
        }
    }
}
