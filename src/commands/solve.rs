//! Code solving command
//!
//! The computer breaks a secret supplied by the player and reports every
//! turn of the match.

use crate::core::{CODE_LENGTH, Code, Feedback};
use crate::game::{Board, GameConfig, Outcome};
use crate::solver::{GuessStrategist, Slot, SolverError, Strategy};
use anyhow::{Context, Result};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            game: GameConfig::default(),
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub turns: Vec<TurnStep>,
    pub secret: Code,
    pub strategy: &'static str,
}

/// A single turn of the match
pub struct TurnStep {
    pub guess: Code,
    pub feedback: Feedback,
    /// Codes that fit the belief state before this guess
    pub possible_before: usize,
    /// Codes that fit the belief state once the feedback is applied
    pub possible_after: usize,
    /// Belief state once the feedback is applied
    pub slots: [Slot; CODE_LENGTH],
}

/// Solve the secret described by `config`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code
/// - The solver reaches an inconsistent belief state
pub fn solve_code(config: SolveConfig) -> Result<SolveResult> {
    let secret = Code::parse(&config.secret).context("Invalid secret code")?;

    let mut strategist = GuessStrategist::new(config.game.strategy, config.game.rng());
    play_match(&mut strategist, secret, config.game.turn_limit)
        .context("Solver reached an inconsistent state")
}

/// Let `strategist` play a full match against `secret`
///
/// # Errors
///
/// Returns `SolverError` if the strategist's belief state becomes empty,
/// which aborts the match.
pub fn play_match<S: Strategy>(
    strategist: &mut GuessStrategist<S>,
    secret: Code,
    turn_limit: usize,
) -> Result<SolveResult, SolverError> {
    let mut board = Board::new(secret, turn_limit);
    let mut turns: Vec<TurnStep> = Vec::new();

    while board.outcome() == Outcome::InProgress {
        let possible_before = strategist.tracker().possible_codes();
        let guess = strategist.next_guess()?;

        let Ok(feedback) = board.add_guess(guess) else {
            break;
        };
        strategist.observe(feedback)?;

        turns.push(TurnStep {
            guess,
            feedback,
            possible_before,
            possible_after: strategist.tracker().possible_codes(),
            slots: *strategist.tracker().slots(),
        });
    }

    Ok(SolveResult {
        success: board.is_won(),
        turns,
        secret,
        strategy: strategist.strategy().name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{LeastOccurrence, StrategyType};

    #[test]
    fn solve_code_succeeds() {
        let mut config = SolveConfig::new("R B Y G".to_string());
        config.game = config.game.with_seed(1);

        let result = solve_code(config).unwrap();

        assert!(result.success);
        assert!(result.turns.len() <= 6);
        assert_eq!(result.turns.last().map(|t| t.guess), Some(result.secret));
        assert_eq!(result.strategy, "least-occurrence");
    }

    #[test]
    fn solve_records_history() {
        let mut config = SolveConfig::new("CPYB".to_string());
        config.game = config.game.with_seed(8);

        let result = solve_code(config).unwrap();

        assert_eq!(result.turns[0].possible_before, 360);
        for step in &result.turns {
            assert!(step.possible_after <= step.possible_before);
        }
        for pair in result.turns.windows(2) {
            assert_eq!(pair[0].possible_after, pair[1].possible_before);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let config = SolveConfig::new("RRBY".to_string());
        assert!(solve_code(config).is_err());
    }

    #[test]
    fn solve_with_turn_limit() {
        let mut config = SolveConfig::new("GBRY".to_string());
        config.game = config.game.with_seed(2).with_turn_limit(1);

        let result = solve_code(config).unwrap();

        assert_eq!(result.turns.len(), 1);
        assert_eq!(result.success, result.turns[0].feedback.is_perfect());
    }

    #[test]
    fn most_occurrence_strategy_is_used() {
        let mut config = SolveConfig::new("YCGP".to_string());
        config.game = config
            .game
            .with_seed(5)
            .with_strategy(StrategyType::from_name("most"));

        let result = solve_code(config).unwrap();

        assert!(result.success);
        assert_eq!(result.strategy, "most-occurrence");
    }

    #[test]
    fn play_match_reports_every_turn() {
        let secret = Code::parse("PGCR").unwrap();
        let mut strategist = GuessStrategist::with_seed(LeastOccurrence, 21);

        let result = play_match(&mut strategist, secret, 10).unwrap();

        assert!(result.success);
        assert!(result.turns[..result.turns.len() - 1]
            .iter()
            .all(|t| !t.feedback.is_perfect()));
    }
}
