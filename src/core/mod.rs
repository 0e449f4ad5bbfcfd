//! Core domain types for the solver
//!
//! This module contains the knowledge structures a session accumulates.
//! Nothing here performs I/O; every type is pure and testable on its own.

mod feedback;
mod knowledge;
mod pattern;
mod tried;

pub use feedback::{FeedbackEntry, Verdict, feedback_to_emoji, is_all_correct, parse_feedback};
pub use knowledge::LetterKnowledge;
pub use pattern::{Matcher, Pattern, PatternError, WILDCARD};
pub use tried::TriedWords;
