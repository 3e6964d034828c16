//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: the color alphabet,
//! validated codes and the feedback scorer. Everything here is pure.

mod code;
mod color;
mod feedback;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use color::{Color, ColorSet};
pub use feedback::{Feedback, Mark, score};
