//! Session results

use crate::core::{FeedbackEntry, LetterKnowledge, Pattern};
use std::fmt;

/// Where the solver loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    Searching,
    Probing,
    Solved,
    Failed(FailureKind),
}

/// Why a session ended without a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The round cap was reached with the pattern unsolved
    RoundsExhausted,
    /// A batch came back empty, or a full batch made no progress on a blank pattern
    NoCandidates,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RoundsExhausted => "rounds exhausted",
            Self::NoCandidates => "no candidates",
        })
    }
}

/// Whether a submitted word came from a candidate batch or was a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    Candidate,
    Probe,
}

/// One oracle submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub round: u32,
    pub word: String,
    pub kind: GuessKind,
    pub feedback: Vec<FeedbackEntry>,
    /// Pattern after this submission's feedback was applied
    pub pattern_after: Pattern,
}

/// Final result of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { word: String },
    Failed(FailureKind),
}

/// Everything a finished session reports back
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub outcome: Outcome,
    pub rounds: u32,
    pub pattern: Pattern,
    pub knowledge: LetterKnowledge,
    pub steps: Vec<GuessStep>,
}

impl SolveOutcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved { .. })
    }

    /// The resolved word, if solved
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Solved { word } => Some(word),
            Outcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn failure(&self) -> Option<FailureKind> {
        match self.outcome {
            Outcome::Solved { .. } => None,
            Outcome::Failed(kind) => Some(kind),
        }
    }

    /// Total oracle submissions, probes included
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn probes(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.kind == GuessKind::Probe)
            .count()
    }
}
