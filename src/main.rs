//! Mastermind - CLI
//!
//! Play Mastermind in a TUI or on the command line, or watch the solver
//! break a code.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{
        SolveConfig, analyze_guess, print_test_all_statistics, run_benchmark, run_simple,
        run_test_all, solve_code,
    },
    game::{DEFAULT_TURN_LIMIT, GameConfig},
    interactive::{App, run_tui},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind with an automated code breaker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solver color policy: least (default) or most
    #[arg(short, long, global = true, default_value = "least")]
    strategy: String,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_TURN_LIMIT)]
    turns: usize,

    /// Seed for secrets and opening guesses (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (guess the secret without TUI)
    Simple,

    /// Let the solver break a secret code
    Solve {
        /// The secret code, e.g. "R B Y G"
        code: String,

        /// Show candidate pools after every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a guess against a secret and show what it reveals
    Analyze {
        /// Guess to analyze
        guess: String,

        /// Secret to score it against
        secret: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure!(cli.turns > 0, "--turns must be at least 1");

    let mut config = GameConfig::default()
        .with_turn_limit(cli.turns)
        .with_strategy(StrategyType::from_name(&cli.strategy));
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(config)),
        Commands::Simple => run_simple(&config),
        Commands::Solve { code, verbose } => run_solve_command(config, &code, verbose),
        Commands::Analyze { guess, secret } => {
            let result = analyze_guess(&guess, &secret)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => run_benchmark_command(&config, count),
        Commands::TestAll { limit } => {
            run_test_all_command(&config, limit);
            Ok(())
        }
    }
}

fn run_solve_command(config: GameConfig, code: &str, verbose: bool) -> Result<()> {
    let mut solve_config = SolveConfig::new(code.to_string());
    solve_config.game = config;

    let result = solve_code(solve_config)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, count: usize) -> Result<()> {
    println!(
        "Running benchmark on {count} random secrets ({})...",
        config.strategy.name()
    );

    let result = run_benchmark(config, count).context("Benchmark aborted")?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(config: &GameConfig, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nStrategy:   {}", config.strategy.name());
    println!("Turn limit: {}", config.turn_limit);
    if let Some(seed) = config.seed {
        println!("Seed:       {seed}");
    }
    println!();

    let stats = run_test_all(config, limit);
    print_test_all_statistics(&stats);
}
