//! Match configuration

use crate::solver::StrategyType;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Turns allowed in a classic game
pub const DEFAULT_TURN_LIMIT: usize = 10;

/// Settings shared by every game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost
    pub turn_limit: usize,
    /// Seed for secrets and opening guesses; `None` draws from the OS
    pub seed: Option<u64>,
    /// Color selection policy of the automated solver
    pub strategy: StrategyType,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_limit: DEFAULT_TURN_LIMIT,
            seed: None,
            strategy: StrategyType::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_turn_limit(mut self, turn_limit: usize) -> Self {
        self.turn_limit = turn_limit;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: StrategyType) -> Self {
        self.strategy = strategy;
        self
    }

    /// Random source for this configuration
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Random source for the `index`-th of several independent matches
    ///
    /// Seeded configurations give every match its own reproducible stream.
    #[must_use]
    pub fn rng_for(&self, index: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => StdRng::from_os_rng(),
        }
    }
}
