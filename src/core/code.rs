//! Mastermind code representation
//!
//! A Code is an ordered sequence of 4 distinct colors, used both for secrets
//! and for guesses.

use super::Color;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// Number of positions in a code
pub const CODE_LENGTH: usize = 4;

/// Characters treated as separators when parsing a code
const SEPARATORS: [char; 5] = [',', ';', '-', '|', '/'];

/// Error type for invalid code input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("'{input}' is not valid, you have to choose from ({})", color_codes())]
    UnknownColor { input: String },

    #[error("'{input}' is not valid, a code has exactly {} colors (got {found})", CODE_LENGTH)]
    InvalidLength { input: String, found: usize },

    #[error("'{input}' is not valid, each color has to be unique")]
    DuplicateColor { input: String },
}

fn color_codes() -> String {
    Color::ALL
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A secret or a guess: 4 distinct colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    /// Build a code from 4 colors
    ///
    /// # Errors
    /// Returns `CodeError::DuplicateColor` if a color appears twice.
    pub fn new(colors: [Color; CODE_LENGTH]) -> Result<Self, CodeError> {
        if has_duplicates(&colors) {
            return Err(CodeError::DuplicateColor {
                input: colors.iter().map(|c| c.code()).collect(),
            });
        }
        Ok(Self(colors))
    }

    /// Draw 4 distinct colors uniformly at random, without replacement
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let code = Code::generate_random_unique(&mut rng);
    /// assert_eq!(Code::parse(&code.to_string()), Ok(code));
    /// ```
    pub fn generate_random_unique<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut colors = Color::ALL;
        colors.shuffle(rng);
        Self([colors[0], colors[1], colors[2], colors[3]])
    }

    /// Parse a code typed by a player
    ///
    /// Whitespace and separators (`,` `;` `-` `|` `/`) are ignored and case
    /// is folded, so `"RBYC"`, `"r b y c"`, `"R, B, Y, C"` and
    /// `"red blue yellow cyan"` all parse to the same code.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - A token is neither a color name nor made of color codes
    /// - The input does not name exactly 4 colors
    /// - A color is repeated
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, CodeError};
    ///
    /// let code = Code::parse("R, B, Y, G").unwrap();
    /// assert_eq!(code.to_string(), "RBYG");
    ///
    /// assert!(matches!(Code::parse("R R B Y"), Err(CodeError::DuplicateColor { .. })));
    /// assert!(matches!(Code::parse("R B Y X"), Err(CodeError::UnknownColor { .. })));
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let mut colors = Vec::with_capacity(CODE_LENGTH);

        for token in input
            .split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
            .filter(|t| !t.is_empty())
        {
            if let Some(color) = Color::from_name(token) {
                colors.push(color);
                continue;
            }
            for ch in token.chars() {
                let color = Color::from_code(ch).ok_or_else(|| CodeError::UnknownColor {
                    input: input.to_string(),
                })?;
                colors.push(color);
            }
        }

        let colors: [Color; CODE_LENGTH] =
            colors
                .try_into()
                .map_err(|rest: Vec<Color>| CodeError::InvalidLength {
                    input: input.to_string(),
                    found: rest.len(),
                })?;

        if has_duplicates(&colors) {
            return Err(CodeError::DuplicateColor {
                input: input.to_string(),
            });
        }

        Ok(Self(colors))
    }

    /// All 360 valid codes, in lexicographic order of the alphabet
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut codes = Vec::with_capacity(360);
        for a in Color::ALL {
            for b in Color::ALL {
                for c in Color::ALL {
                    for d in Color::ALL {
                        if let Ok(code) = Self::new([a, b, c, d]) {
                            codes.push(code);
                        }
                    }
                }
            }
        }
        codes
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Check if the code contains a color at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// Long form, e.g. `RED - BLUE - YELLOW - GREEN`
    #[must_use]
    pub fn names(&self) -> String {
        self.0
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

fn has_duplicates(colors: &[Color; CODE_LENGTH]) -> bool {
    colors
        .iter()
        .enumerate()
        .any(|(i, c)| colors[i + 1..].contains(c))
}

impl Index<usize> for Code {
    type Output = Color;

    fn index(&self, position: usize) -> &Color {
        &self.0[position]
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
