//! Guess analysis command
//!
//! Scores a guess against a secret and reports how much the feedback
//! narrows the search.

use crate::core::{CODE_LENGTH, Code, Feedback, score};
use crate::solver::{CandidateTracker, Slot};
use anyhow::{Context, Result};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub secret: Code,
    pub feedback: Feedback,
    /// Codes that would have produced the same feedback for this guess
    pub consistent: usize,
    /// Codes allowed by the per-position pools once the feedback is applied
    pub possible: usize,
    pub slots: [Slot; CODE_LENGTH],
    pub total_codes: usize,
}

/// Analyze `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code is invalid.
pub fn analyze_guess(guess: &str, secret: &str) -> Result<AnalysisResult> {
    let guess = Code::parse(guess).context("Invalid guess")?;
    let secret = Code::parse(secret).context("Invalid secret code")?;

    let feedback = score(&guess, &secret);
    let all = Code::all();
    let consistent = all
        .iter()
        .filter(|candidate| score(&guess, candidate) == feedback)
        .count();

    let mut tracker = CandidateTracker::new();
    tracker
        .apply(&guess, &feedback)
        .context("Feedback left a position without candidates")?;

    Ok(AnalysisResult {
        guess,
        secret,
        feedback,
        consistent,
        possible: tracker.possible_codes(),
        slots: *tracker.slots(),
        total_codes: all.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn analyze_valid_guess() {
        let result = analyze_guess("RGBP", "RBYG").unwrap();

        assert_eq!(result.feedback.to_string(), "✓??✗");
        assert_eq!(result.total_codes, 360);
        assert!(result.consistent >= 1);
        assert!(result.consistent <= result.possible);
        assert_eq!(result.slots[0], Slot::Resolved(Color::Red));
    }

    #[test]
    fn perfect_guess_leaves_one_code() {
        let result = analyze_guess("YCGP", "YCGP").unwrap();

        assert!(result.feedback.is_perfect());
        assert_eq!(result.consistent, 1);
        assert_eq!(result.possible, 1);
    }

    #[test]
    fn analyze_invalid_codes() {
        assert!(analyze_guess("RRBY", "RBYG").is_err());
        assert!(analyze_guess("RBYG", "RBX").is_err());
    }

    #[test]
    fn secret_is_always_consistent() {
        for secret in ["GBRY", "PCRB", "CPYB"] {
            let result = analyze_guess("RGBP", secret).unwrap();
            assert!(result.consistent >= 1);
            assert!(result.possible >= 1);
        }
    }
}
