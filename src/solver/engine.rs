//! Main guess strategist interface

use super::strategy::{Occurrences, Strategy};
use super::tracker::{CandidateTracker, SolverError, Slot};
use crate::core::{CODE_LENGTH, Code, Color, ColorSet, Feedback};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Automated code breaker
///
/// Owns its belief state and the guess it made last, so feedback can be
/// interpreted positionally.
pub struct GuessStrategist<S: Strategy> {
    strategy: S,
    tracker: CandidateTracker,
    previous_guess: Option<Code>,
    rng: StdRng,
}

impl<S: Strategy> GuessStrategist<S> {
    /// Create a new strategist using `rng` for its opening guess
    pub fn new(strategy: S, rng: StdRng) -> Self {
        Self {
            strategy,
            tracker: CandidateTracker::new(),
            previous_guess: None,
            rng,
        }
    }

    /// Create a strategist with a reproducible opening guess
    pub fn with_seed(strategy: S, seed: u64) -> Self {
        Self::new(strategy, StdRng::seed_from_u64(seed))
    }

    /// Opening guess: 4 distinct colors at random
    ///
    /// Nothing is known yet, so no constraint applies.
    pub fn first_guess(&mut self) -> Code {
        let guess = Code::generate_random_unique(&mut self.rng);
        self.previous_guess = Some(guess);
        guess
    }

    /// Build the next guess from the current belief state
    ///
    /// Resolved positions keep their color. Open positions are filled
    /// narrowest pool first (ties go to the lower position), each taking the
    /// color the strategy picks; a chosen color is withheld from the other
    /// open pools for the rest of this guess only.
    ///
    /// Returns the opening guess if no guess was made yet.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidates` if the belief state has a
    /// position with no possible color.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, score};
    /// use mastermind::solver::{GuessStrategist, StrategyType};
    ///
    /// let secret = Code::parse("RBYG").unwrap();
    /// let mut strategist = GuessStrategist::with_seed(StrategyType::default(), 3);
    ///
    /// let mut guess = strategist.first_guess();
    /// while guess != secret {
    ///     strategist.observe(score(&guess, &secret)).unwrap();
    ///     guess = strategist.next_guess().unwrap();
    /// }
    /// ```
    pub fn next_guess(&mut self) -> Result<Code, SolverError> {
        if self.previous_guess.is_none() {
            return Ok(self.first_guess());
        }

        let mut colors = [Color::Green; CODE_LENGTH];
        let mut filled = [false; CODE_LENGTH];
        // Transient copy of the open pools, dropped once the guess is built
        let mut pools: [Option<ColorSet>; CODE_LENGTH] = [None; CODE_LENGTH];

        for (position, slot) in self.tracker.slots().iter().enumerate() {
            match *slot {
                Slot::Resolved(color) => {
                    colors[position] = color;
                    filled[position] = true;
                }
                Slot::Unresolved(pool) if pool.is_empty() => {
                    return Err(SolverError::EmptyCandidates { position });
                }
                Slot::Unresolved(pool) => pools[position] = Some(pool),
            }
        }

        while let Some(position) = narrowest(&pools) {
            let occurrences = Occurrences::tally(&pools);
            let pool = pools[position].take().unwrap_or_default();

            // A pool emptied by this guess's own exclusions falls back to any unused color
            let color = self
                .strategy
                .pick_color(pool, &occurrences)
                .or_else(|| first_unused(&colors, &filled))
                .ok_or(SolverError::EmptyCandidates { position })?;

            colors[position] = color;
            filled[position] = true;
            for other in pools.iter_mut().flatten() {
                other.remove(color);
            }
        }

        let guess = Code::new(colors).map_err(|_| SolverError::DuplicateGuess)?;
        self.previous_guess = Some(guess);
        Ok(guess)
    }

    /// Record the feedback received by the last guess
    ///
    /// # Errors
    /// Returns `SolverError::NoPreviousGuess` if no guess was made yet, or
    /// `SolverError::EmptyCandidates` if the feedback contradicts what is
    /// already known.
    pub fn observe(&mut self, feedback: Feedback) -> Result<(), SolverError> {
        let guess = self.previous_guess.ok_or(SolverError::NoPreviousGuess)?;
        self.tracker.apply(&guess, &feedback)
    }

    /// Record feedback for a guess someone else made
    ///
    /// Lets the strategist follow a human player's match, e.g. to offer hints.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidates` if the feedback contradicts what
    /// is already known.
    pub fn observe_guess(&mut self, guess: Code, feedback: Feedback) -> Result<(), SolverError> {
        self.previous_guess = Some(guess);
        self.tracker.apply(&guess, &feedback)
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn tracker(&self) -> &CandidateTracker {
        &self.tracker
    }

    #[must_use]
    pub const fn previous_guess(&self) -> Option<Code> {
        self.previous_guess
    }

    /// Forget everything learned and start a new match
    pub fn reset(&mut self) {
        self.tracker = CandidateTracker::new();
        self.previous_guess = None;
    }
}

/// Open position with the smallest pool, lowest position on ties
fn narrowest(pools: &[Option<ColorSet>; CODE_LENGTH]) -> Option<usize> {
    pools
        .iter()
        .enumerate()
        .filter_map(|(position, pool)| pool.map(|p| (position, p.len())))
        .min_by_key(|&(_, len)| len)
        .map(|(position, _)| position)
}

fn first_unused(colors: &[Color; CODE_LENGTH], filled: &[bool; CODE_LENGTH]) -> Option<Color> {
    Color::ALL.into_iter().find(|&candidate| {
        !colors
            .iter()
            .zip(filled)
            .any(|(&placed, &is_filled)| is_filled && placed == candidate)
    })
}
