//! Color selection strategies
//!
//! Defines the Strategy trait and concrete implementations. A strategy
//! decides which color an unfilled position receives while a guess is being
//! built, given how often each color still appears across the open pools.

use crate::core::{CODE_LENGTH, Color, ColorSet};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// How often each color appears across the open candidate pools
///
/// Colors are kept in first-seen order (pools scanned by position, then in
/// canonical color order), which is the tie-break order for strategies.
#[derive(Debug, Clone, Default)]
pub struct Occurrences {
    order: Vec<Color>,
    counts: FxHashMap<Color, usize>,
}

impl Occurrences {
    /// Count colors over every open, non-empty pool
    #[must_use]
    pub fn tally(pools: &[Option<ColorSet>; CODE_LENGTH]) -> Self {
        let mut occurrences = Self::default();
        for pool in pools.iter().flatten() {
            for color in pool.iter() {
                let count = occurrences.counts.entry(color).or_insert(0);
                if *count == 0 {
                    occurrences.order.push(color);
                }
                *count += 1;
            }
        }
        occurrences
    }

    /// Occurrence count of a color (0 if it is in no open pool)
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// `(color, count)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        self.order.iter().map(|&c| (c, self.count(c)))
    }

    /// Pairs restricted to the colors of `pool`, in first-seen order
    pub fn within(&self, pool: ColorSet) -> impl Iterator<Item = (Color, usize)> + '_ {
        self.iter().filter(move |(c, _)| pool.contains(*c))
    }
}

/// A strategy for choosing a color for one position of the next guess
pub trait Strategy {
    /// Choose a color from `pool`
    ///
    /// Returns `None` if the pool is empty.
    fn pick_color(&self, pool: ColorSet, occurrences: &Occurrences) -> Option<Color>;

    /// Short name used in reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Scarcest color first (default)
    LeastOccurrence(LeastOccurrence),
    /// Most common color first
    MostOccurrence(MostOccurrence),
}

impl Strategy for StrategyType {
    fn pick_color(&self, pool: ColorSet, occurrences: &Occurrences) -> Option<Color> {
        match self {
            Self::LeastOccurrence(s) => s.pick_color(pool, occurrences),
            Self::MostOccurrence(s) => s.pick_color(pool, occurrences),
        }
    }

    fn name(&self) -> &'static str {
        StrategyType::name(*self)
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::LeastOccurrence(LeastOccurrence)
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "least", "least-occurrence", "most", "most-occurrence".
    /// Defaults to least-occurrence if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "most" | "most-occurrence" => Self::MostOccurrence(MostOccurrence),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeastOccurrence(_) => "least-occurrence",
            Self::MostOccurrence(_) => "most-occurrence",
        }
    }
}

/// Pick the color that is scarcest across the remaining pools
///
/// Scarce colors narrow the search space fastest; common ones tend to get
/// disambiguated later anyway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeastOccurrence;

impl Strategy for LeastOccurrence {
    fn pick_color(&self, pool: ColorSet, occurrences: &Occurrences) -> Option<Color> {
        occurrences
            .within(pool)
            .min_by_key(|&(_, count)| count)
            .map(|(color, _)| color)
    }

    fn name(&self) -> &'static str {
        "least-occurrence"
    }
}

/// Pick the color that is most common across the remaining pools
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MostOccurrence;

impl Strategy for MostOccurrence {
    fn pick_color(&self, pool: ColorSet, occurrences: &Occurrences) -> Option<Color> {
        // Reverse keeps the first-seen color on ties (max_by_key keeps the last)
        occurrences
            .within(pool)
            .min_by_key(|&(_, count)| Reverse(count))
            .map(|(color, _)| color)
    }

    fn name(&self) -> &'static str {
        "most-occurrence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Cyan, Green, Red, Yellow};

    fn set(colors: &[Color]) -> ColorSet {
        colors.iter().copied().collect()
    }

    fn sample_pools() -> [Option<ColorSet>; CODE_LENGTH] {
        [
            None,
            Some(set(&[Blue, Yellow, Cyan])),
            Some(set(&[Green, Yellow, Cyan])),
            Some(set(&[Green, Blue, Yellow, Cyan])),
        ]
    }

    #[test]
    fn tally_counts_and_orders() {
        let occurrences = Occurrences::tally(&sample_pools());

        assert_eq!(
            occurrences.iter().collect::<Vec<_>>(),
            vec![(Blue, 2), (Yellow, 3), (Cyan, 3), (Green, 2)]
        );
        assert_eq!(occurrences.count(Red), 0);
    }

    #[test]
    fn tally_skips_empty_pools() {
        let pools = [Some(ColorSet::EMPTY), Some(set(&[Red])), None, None];
        let occurrences = Occurrences::tally(&pools);
        assert_eq!(occurrences.iter().collect::<Vec<_>>(), vec![(Red, 1)]);
    }

    #[test]
    fn least_occurrence_picks_scarcest() {
        let occurrences = Occurrences::tally(&sample_pools());
        let pick = LeastOccurrence.pick_color(set(&[Blue, Yellow, Cyan]), &occurrences);
        assert_eq!(pick, Some(Blue));
    }

    #[test]
    fn least_occurrence_ties_go_to_first_seen() {
        let pools = [
            None,
            None,
            Some(set(&[Green, Yellow, Cyan])),
            Some(set(&[Green, Yellow, Cyan])),
        ];
        let occurrences = Occurrences::tally(&pools);
        let pick = LeastOccurrence.pick_color(set(&[Green, Yellow, Cyan]), &occurrences);
        assert_eq!(pick, Some(Green));
    }

    #[test]
    fn most_occurrence_picks_commonest_first_seen() {
        let occurrences = Occurrences::tally(&sample_pools());
        let pick = MostOccurrence.pick_color(set(&[Blue, Yellow, Cyan]), &occurrences);
        assert_eq!(pick, Some(Yellow));
    }

    #[test]
    fn empty_pool_yields_none() {
        let occurrences = Occurrences::tally(&sample_pools());
        assert_eq!(LeastOccurrence.pick_color(ColorSet::EMPTY, &occurrences), None);
        assert_eq!(MostOccurrence.pick_color(ColorSet::EMPTY, &occurrences), None);
    }

    #[test]
    fn from_name() {
        assert_eq!(StrategyType::from_name("most").name(), "most-occurrence");
        assert_eq!(StrategyType::from_name("least").name(), "least-occurrence");
        assert_eq!(StrategyType::from_name("unknown"), StrategyType::default());
    }
}
