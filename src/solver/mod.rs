//! Adaptive guess refinement
//!
//! The solver requests candidates, filters them against what is known,
//! submits them to the oracle and folds the feedback back into the pattern,
//! probing present letters along the way.

mod engine;
pub mod filter;
mod outcome;
pub mod probe;

pub use engine::{SolveError, Solver};
pub use filter::{CandidateFilter, passes_letter_constraints};
pub use outcome::{FailureKind, GuessKind, GuessStep, Outcome, SolveOutcome, SolverState};
pub use probe::{build_probe, incorporate_probe};
