//! Candidate tracking
//!
//! The solver's belief state: for every position, either the color known to
//! be there or the set of colors that are still possible.

use crate::core::{CODE_LENGTH, Code, Color, ColorSet, Feedback, Mark};
use thiserror::Error;

/// Internal consistency failures of the solver
///
/// These indicate a defect in scoring or tracking (or inconsistent feedback
/// from outside), never a user input problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("no candidate color left for position {position}")]
    EmptyCandidates { position: usize },

    #[error("feedback received before any guess was made")]
    NoPreviousGuess,

    #[error("built a guess with a repeated color")]
    DuplicateGuess,
}

/// Knowledge about one position of the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Resolved(Color),
    Unresolved(ColorSet),
}

impl Slot {
    /// Check if the color is still possible at this position
    #[must_use]
    pub fn allows(self, color: Color) -> bool {
        match self {
            Self::Resolved(known) => known == color,
            Self::Unresolved(pool) => pool.contains(color),
        }
    }
}

/// Per-position candidate sets, narrowed by feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTracker {
    slots: [Slot; CODE_LENGTH],
}

impl Default for CandidateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateTracker {
    /// Every position starts with the full alphabet
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [Slot::Unresolved(ColorSet::FULL); CODE_LENGTH],
        }
    }

    /// Narrow the candidates using the feedback `previous_guess` received
    ///
    /// Exact marks resolve their position and remove the color everywhere
    /// else; absent marks remove the color from every unresolved position;
    /// present marks remove the color from their own position only. The
    /// three rules are applied as separate passes.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidates` if a position is left with no
    /// possible color.
    pub fn apply(&mut self, previous_guess: &Code, feedback: &Feedback) -> Result<(), SolverError> {
        let marked = |mark: Mark| {
            (0..CODE_LENGTH)
                .filter(move |&i| feedback[i] == mark)
                .map(move |i| (i, previous_guess[i]))
        };

        for (position, color) in marked(Mark::Exact) {
            self.slots[position] = Slot::Resolved(color);
            self.remove_everywhere(color);
        }

        for (_, color) in marked(Mark::Absent) {
            self.remove_everywhere(color);
        }

        for (position, color) in marked(Mark::Present) {
            if let Slot::Unresolved(pool) = &mut self.slots[position] {
                pool.remove(color);
            }
        }

        self.check()
    }

    fn remove_everywhere(&mut self, color: Color) {
        for slot in &mut self.slots {
            if let Slot::Unresolved(pool) = slot {
                pool.remove(color);
            }
        }
    }

    fn check(&self) -> Result<(), SolverError> {
        match self
            .slots
            .iter()
            .position(|slot| matches!(slot, Slot::Unresolved(pool) if pool.is_empty()))
        {
            Some(position) => Err(SolverError::EmptyCandidates { position }),
            None => Ok(()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn slot(&self, position: usize) -> Slot {
        self.slots[position]
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Slot; CODE_LENGTH] {
        &self.slots
    }

    #[must_use]
    pub const fn is_resolved(&self, position: usize) -> bool {
        matches!(self.slots[position], Slot::Resolved(_))
    }

    /// Check if every position is resolved
    #[must_use]
    pub fn is_solved(&self) -> bool {
        (0..CODE_LENGTH).all(|i| self.is_resolved(i))
    }

    /// Total number of candidate colors over the unresolved positions
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Resolved(_) => 0,
                Slot::Unresolved(pool) => pool.len(),
            })
            .sum()
    }

    /// Number of valid codes that fit every position's candidates
    #[must_use]
    pub fn possible_codes(&self) -> usize {
        Code::all()
            .iter()
            .filter(|code| {
                self.slots
                    .iter()
                    .zip(code.colors())
                    .all(|(slot, &color)| slot.allows(color))
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;
    use Color::{Blue, Cyan, Green, Red, Yellow};

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    fn pool(colors: &[Color]) -> Slot {
        Slot::Unresolved(colors.iter().copied().collect())
    }

    #[test]
    fn starts_with_full_alphabet() {
        let tracker = CandidateTracker::new();
        assert!(
            tracker
                .slots()
                .iter()
                .all(|&s| s == Slot::Unresolved(ColorSet::FULL))
        );
        assert_eq!(tracker.remaining(), 24);
        assert_eq!(tracker.possible_codes(), 360);
    }

    #[test]
    fn apply_exact_present_absent() {
        let mut tracker = CandidateTracker::new();
        let guess = code("RGBP");
        let feedback = score(&guess, &code("RBYG"));

        tracker.apply(&guess, &feedback).unwrap();

        assert_eq!(tracker.slot(0), Slot::Resolved(Red));
        assert_eq!(tracker.slot(1), pool(&[Blue, Yellow, Cyan]));
        assert_eq!(tracker.slot(2), pool(&[Green, Yellow, Cyan]));
        assert_eq!(tracker.slot(3), pool(&[Green, Blue, Yellow, Cyan]));
    }

    #[test]
    fn present_only_touches_its_position() {
        let mut tracker = CandidateTracker::new();
        let guess = code("PCRB");
        let feedback = score(&guess, &code("RBYG"));

        tracker.apply(&guess, &feedback).unwrap();

        assert_eq!(tracker.slot(0), pool(&[Green, Blue, Red, Yellow]));
        assert_eq!(tracker.slot(1), pool(&[Green, Blue, Red, Yellow]));
        assert_eq!(tracker.slot(2), pool(&[Green, Blue, Yellow]));
        assert_eq!(tracker.slot(3), pool(&[Green, Red, Yellow]));
    }

    #[test]
    fn resolved_slots_are_not_touched_again() {
        let mut tracker = CandidateTracker::new();
        let secret = code("RBYG");

        let first = code("RGBP");
        tracker.apply(&first, &score(&first, &secret)).unwrap();
        let second = code("RBGY");
        tracker.apply(&second, &score(&second, &secret)).unwrap();

        assert_eq!(tracker.slot(0), Slot::Resolved(Red));
        assert_eq!(tracker.slot(1), Slot::Resolved(Blue));
        assert_eq!(tracker.slot(2), pool(&[Yellow, Cyan]));
        assert_eq!(tracker.slot(3), pool(&[Green, Cyan]));
    }

    #[test]
    fn perfect_feedback_solves() {
        let mut tracker = CandidateTracker::new();
        let secret = code("CPYB");
        tracker.apply(&secret, &Feedback::PERFECT).unwrap();

        assert!(tracker.is_solved());
        assert_eq!(tracker.remaining(), 0);
        assert_eq!(tracker.possible_codes(), 1);
    }

    #[test]
    fn secret_always_stays_possible() {
        let codes = Code::all();
        for secret in codes.iter().step_by(13) {
            for guess in codes.iter().step_by(17) {
                let mut tracker = CandidateTracker::new();
                tracker.apply(guess, &score(guess, secret)).unwrap();

                for (i, &color) in secret.colors().iter().enumerate() {
                    assert!(tracker.slot(i).allows(color), "{guess} vs {secret} at {i}");
                }
            }
        }
    }

    #[test]
    fn feedback_narrows_monotonically() {
        let codes = Code::all();
        for secret in codes.iter().step_by(19) {
            for guess in codes.iter().step_by(23) {
                let mut tracker = CandidateTracker::new();
                let before = tracker.remaining();
                tracker.apply(guess, &score(guess, secret)).unwrap();
                assert!(tracker.remaining() < before);
            }
        }
    }

    #[test]
    fn inconsistent_feedback_is_fatal() {
        let mut tracker = CandidateTracker::new();
        let guess = code("GBRY");
        let all_absent = Feedback::new([Mark::Absent; CODE_LENGTH]);
        tracker.apply(&guess, &all_absent).unwrap();

        // Only P and C remain anywhere; claiming they are absent too empties every slot
        let other = code("PCGB");
        let result = tracker.apply(&other, &all_absent);
        assert_eq!(result, Err(SolverError::EmptyCandidates { position: 0 }));
    }

    #[test]
    fn error_display() {
        let err = SolverError::EmptyCandidates { position: 2 };
        assert_eq!(err.to_string(), "no candidate color left for position 2");
    }
}
