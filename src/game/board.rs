//! Game board: the secret, the guesses played so far and the turn limit

use crate::core::{Code, Feedback, score};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    Finished,
}

/// State of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won { turns: usize },
    Lost,
}

/// A single match against a fixed secret
#[derive(Debug, Clone)]
pub struct Board {
    secret: Code,
    history: Vec<(Code, Feedback)>,
    turn_limit: usize,
}

impl Board {
    /// Create a board for `secret`, lost once `turn_limit` guesses miss
    #[must_use]
    pub const fn new(secret: Code, turn_limit: usize) -> Self {
        Self {
            secret,
            history: Vec::new(),
            turn_limit,
        }
    }

    /// Score a guess, record it and return its feedback
    ///
    /// # Errors
    /// Returns `GameError::Finished` if the game was already won or lost.
    pub fn add_guess(&mut self, guess: Code) -> Result<Feedback, GameError> {
        if self.outcome() != Outcome::InProgress {
            return Err(GameError::Finished);
        }
        let feedback = score(&guess, &self.secret);
        self.history.push((guess, feedback));
        Ok(feedback)
    }

    /// Check if the last guess broke the code
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_perfect())
    }

    /// Check if every allowed turn has been played
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.history.len() >= self.turn_limit
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_won() {
            Outcome::Won {
                turns: self.turns_elapsed(),
            }
        } else if self.is_full() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    #[must_use]
    pub fn turns_elapsed(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn turns_left(&self) -> usize {
        self.turn_limit.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn turn_limit(&self) -> usize {
        self.turn_limit
    }

    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// The secret, for revealing once the game is over
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Board lines as printed in text mode, one guess and its marks per turn
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        self.history
            .iter()
            .map(|(guess, feedback)| format!("{}   {}", guess.names(), feedback.to_symbols()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    #[test]
    fn add_guess_records_feedback() {
        let mut board = Board::new(code("RBYG"), 10);
        let feedback = board.add_guess(code("RGBP")).unwrap();

        assert_eq!(
            feedback.marks(),
            &[Mark::Exact, Mark::Present, Mark::Present, Mark::Absent]
        );
        assert_eq!(board.turns_elapsed(), 1);
        assert_eq!(board.turns_left(), 9);
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut board = Board::new(code("RBYG"), 10);
        board.add_guess(code("RGBP")).unwrap();
        board.add_guess(code("RBYG")).unwrap();

        assert!(board.is_won());
        assert_eq!(board.outcome(), Outcome::Won { turns: 2 });
        assert_eq!(board.add_guess(code("RBYG")), Err(GameError::Finished));
    }

    #[test]
    fn turn_limit_loses() {
        let mut board = Board::new(code("RBYG"), 3);
        for _ in 0..3 {
            board.add_guess(code("PCRB")).unwrap();
        }

        assert!(board.is_full());
        assert!(!board.is_won());
        assert_eq!(board.outcome(), Outcome::Lost);
        assert_eq!(board.add_guess(code("RBYG")), Err(GameError::Finished));
    }

    #[test]
    fn win_on_last_turn_is_a_win() {
        let mut board = Board::new(code("RBYG"), 2);
        board.add_guess(code("PCRB")).unwrap();
        board.add_guess(code("RBYG")).unwrap();
        assert_eq!(board.outcome(), Outcome::Won { turns: 2 });
    }

    #[test]
    fn render_lines_show_names_and_symbols() {
        let mut board = Board::new(code("RBYG"), 10);
        board.add_guess(code("RGBP")).unwrap();

        assert_eq!(
            board.render_lines(),
            vec!["RED - GREEN - BLUE - PURPLE   ✓ - ? - ? - ✗".to_string()]
        );
    }
}
