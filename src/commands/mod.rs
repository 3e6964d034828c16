//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{SessionSummary, play_session, run_simple};
pub use solve::{SolveConfig, SolveResult, TurnStep, play_match, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
