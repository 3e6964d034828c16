//! The six-color alphabet
//!
//! Colors are declared in canonical order (G, B, R, Y, P, C). That order is
//! the one used whenever candidates are scanned, so tie-breaks are stable.

use std::fmt;

/// One of the six code colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Green,
    Blue,
    Red,
    Yellow,
    Purple,
    Cyan,
}

impl Color {
    /// Every color, in canonical order
    pub const ALL: [Self; 6] = [
        Self::Green,
        Self::Blue,
        Self::Red,
        Self::Yellow,
        Self::Purple,
        Self::Cyan,
    ];

    /// Number of colors in the alphabet
    pub const COUNT: usize = Self::ALL.len();

    /// Single-letter code used for input and compact display
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Purple => 'P',
            Self::Cyan => 'C',
        }
    }

    /// Upper-case display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Red => "RED",
            Self::Yellow => "YELLOW",
            Self::Purple => "PURPLE",
            Self::Cyan => "CYAN",
        }
    }

    /// Position of this color in [`Color::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a color by its short code (case-insensitive)
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let upper = code.to_ascii_uppercase();
        Self::ALL.into_iter().find(|c| c.code() == upper)
    }

    /// Look up a color by its full name (case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A set of colors stored as a bitmask
///
/// Iteration always yields colors in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(u8);

impl ColorSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every color of the alphabet
    pub const FULL: Self = Self((1 << Color::COUNT) - 1);

    #[inline]
    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & (1 << color.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, color: Color) {
        self.0 |= 1 << color.index();
    }

    /// Remove a color, returning whether it was present
    #[inline]
    pub fn remove(&mut self, color: Color) -> bool {
        let present = self.contains(color);
        self.0 &= !(1 << color.index());
        present
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Colors in the set, in canonical order
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, color) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{color}")?;
        }
        write!(f, "}}")
    }
}
