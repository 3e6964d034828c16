//! Mastermind solving algorithms
//!
//! The candidate tracker holds what is known about each position; the guess
//! strategist turns that knowledge into the next guess.

mod engine;
pub mod strategy;
mod tracker;

pub use engine::GuessStrategist;
pub use strategy::{LeastOccurrence, MostOccurrence, Occurrences, Strategy, StrategyType};
pub use tracker::{CandidateTracker, Slot, SolverError};
