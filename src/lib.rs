//! Mastermind
//!
//! A Mastermind game with an automated code breaker: feedback scoring,
//! per-position candidate tracking and a constraint-driven guess strategist.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, score};
//!
//! let secret = Code::parse("R B Y G").unwrap();
//! let guess = Code::parse("RGBP").unwrap();
//!
//! let feedback = score(&guess, &secret);
//! assert_eq!(feedback.to_symbols(), "✓ - ? - ? - ✗");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Board and match configuration
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
