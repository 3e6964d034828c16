//! Benchmark command
//!
//! Tests solver performance across randomly drawn secrets.

use super::solve::play_match;
use crate::core::Code;
use crate::game::GameConfig;
use crate::solver::{GuessStrategist, SolverError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run the solver against `count` random secrets
///
/// Secrets and opening guesses come from the configuration's random source,
/// so a seeded configuration always benchmarks the same games.
///
/// # Errors
///
/// Returns `SolverError` if a match ends in an inconsistent belief state.
pub fn run_benchmark(config: &GameConfig, count: usize) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();
    let mut rng = config.rng();
    let mut solved = 0;
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for _ in 0..count {
        let secret = Code::generate_random_unique(&mut rng);
        let mut strategist = GuessStrategist::new(config.strategy, StdRng::from_rng(&mut rng));

        let result = play_match(&mut strategist, secret, config.turn_limit)?;
        let turns = result.turns.len();

        if result.success {
            solved += 1;
        }
        total_turns += turns;
        min_turns = min_turns.min(turns);
        max_turns = max_turns.max(turns);
        *distribution.entry(turns).or_insert(0) += 1;
    }

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_games: count,
        solved,
        total_turns,
        average_turns: if count > 0 {
            total_turns as f64 / count as f64
        } else {
            0.0
        },
        min_turns: if count > 0 { min_turns } else { 0 },
        max_turns,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
