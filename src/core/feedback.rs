//! Guess feedback calculation and representation
//!
//! Feedback holds one mark per position of the guess:
//! - Exact = right color, right position
//! - Present = color is in the secret, but at another position
//! - Absent = color is not in what remains of the secret

use super::Color;
use super::code::{CODE_LENGTH, Code};
use std::fmt;
use std::ops::Index;

/// Verdict for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Display symbol: `✓` for exact, `?` for present, `✗` for absent
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '✓',
            Self::Present => '?',
            Self::Absent => '✗',
        }
    }
}

/// Per-position feedback for a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; CODE_LENGTH]);

impl Feedback {
    /// All exact (code broken)
    pub const PERFECT: Self = Self([Mark::Exact; CODE_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; CODE_LENGTH]) -> Self {
        Self(marks)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those secret positions
    /// 2. Second pass, in position order: mark present if the color is still
    ///    among the unconsumed secret positions (consuming it), else absent
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback, Mark};
    ///
    /// let secret = Code::parse("RBYG").unwrap();
    /// let guess = Code::parse("RGBP").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &secret);
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Exact, Mark::Present, Mark::Present, Mark::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let mut marks = [Mark::Absent; CODE_LENGTH];
        let mut leftover: [Option<Color>; CODE_LENGTH] = (*secret.colors()).map(Some);

        // First pass: exact matches
        // Allow: index needed to access guess[i], secret[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..CODE_LENGTH {
            if guess[i] == secret[i] {
                marks[i] = Mark::Exact;
                leftover[i] = None;
            }
        }

        // Second pass: misplaced colors, earliest positions claim first
        #[allow(clippy::needless_range_loop)]
        for i in 0..CODE_LENGTH {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(slot) = leftover.iter_mut().find(|c| **c == Some(guess[i])) {
                *slot = None;
                marks[i] = Mark::Present;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; CODE_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Mark::Exact)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Mark::Present)
    }

    #[must_use]
    pub fn count_absent(&self) -> usize {
        self.count(Mark::Absent)
    }

    fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Symbols joined the way the board prints them, e.g. `✓ - ? - ? - ✗`
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.0
            .iter()
            .map(|m| m.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

/// Score `guess` against `secret`
///
/// Shorthand for [`Feedback::calculate`].
#[must_use]
pub fn score(guess: &Code, secret: &Code) -> Feedback {
    Feedback::calculate(guess, secret)
}

impl Index<usize> for Feedback {
    type Output = Mark;

    fn index(&self, position: usize) -> &Mark {
        &self.0[position]
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Absent, Exact, Present};

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    #[test]
    fn exact_match_is_perfect() {
        for secret in Code::all() {
            let feedback = score(&secret, &secret);
            assert_eq!(feedback, Feedback::PERFECT);
            assert!(feedback.is_perfect());
        }
    }

    #[test]
    fn exact_and_misplaced() {
        let feedback = score(&code("RGBP"), &code("RBYG"));
        assert_eq!(feedback.marks(), &[Exact, Present, Present, Absent]);
    }

    #[test]
    fn misplaced_only() {
        let feedback = score(&code("PCRB"), &code("RBYG"));
        assert_eq!(feedback.marks(), &[Absent, Absent, Present, Present]);
    }

    #[test]
    fn unshared_colors_are_absent() {
        let feedback = score(&code("PCRB"), &code("GYRB"));
        assert_eq!(feedback.marks(), &[Absent, Absent, Exact, Exact]);
        assert_eq!(feedback.count_absent(), 2);
    }

    #[test]
    fn rotation_is_all_present() {
        let feedback = score(&code("BYGR"), &code("RBYG"));
        assert_eq!(feedback.marks(), &[Present; 4]);
        assert_eq!(feedback.count_present(), 4);
        assert_eq!(feedback.count_exact(), 0);
    }

    #[test]
    fn exact_count_matches_aligned_colors() {
        let codes = Code::all();
        for guess in codes.iter().step_by(7) {
            for secret in codes.iter().step_by(11) {
                let feedback = score(guess, secret);
                let aligned = (0..CODE_LENGTH).filter(|&i| guess[i] == secret[i]).count();
                let shared = guess.colors().iter().filter(|&&c| secret.contains(c)).count();

                assert_eq!(feedback.count_exact(), aligned);
                assert!(feedback.count_exact() + feedback.count_present() <= shared);
                assert_eq!(
                    feedback.count_exact() + feedback.count_present() + feedback.count_absent(),
                    CODE_LENGTH
                );
            }
        }
    }

    #[test]
    fn symbols() {
        let feedback = Feedback::new([Exact, Present, Present, Absent]);
        assert_eq!(feedback.to_symbols(), "✓ - ? - ? - ✗");
        assert_eq!(feedback.to_string(), "✓??✗");
        assert_eq!(feedback[0], Exact);
    }
}
