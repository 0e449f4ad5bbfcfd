//! Main solver loop
//!
//! ```text
//! SEARCHING ──candidate with present letter──> PROBING ──> SEARCHING
//!     │                                                       │
//!     └──────────────> SOLVED | FAILED <──────────────────────┘
//! ```
//!
//! Each round requests one batch of candidates for the current pattern and
//! walks it in source order. A candidate that changes the pattern ends the
//! round early so the next batch is keyed on the newest knowledge.

use super::filter::CandidateFilter;
use super::outcome::{FailureKind, GuessKind, GuessStep, Outcome, SolveOutcome, SolverState};
use super::probe::{build_probe, incorporate_probe};
use crate::config::{SessionConfig, ValidationError};
use crate::core::{
    FeedbackEntry, LetterKnowledge, Pattern, PatternError, TriedWords, Verdict, is_all_correct,
};
use crate::oracle::{FeedbackOracle, OracleError, OracleSession};
use crate::sources::{CandidateSource, SearchContext};

/// Errors that abort a session
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("oracle failure: {0}")]
    Oracle(#[from] OracleError),

    #[error("inconsistent feedback: {0}")]
    Pattern(#[from] PatternError),
}

/// One puzzle session
///
/// Owns the pattern, letter knowledge and tried words exclusively; the
/// configuration, source and oracle are borrowed from the caller.
pub struct Solver<'a, S: CandidateSource, O: FeedbackOracle> {
    config: &'a SessionConfig,
    source: &'a S,
    oracle: &'a O,
    oracle_session: OracleSession,
    pattern: Pattern,
    knowledge: LetterKnowledge,
    tried: TriedWords,
    round: u32,
    state: SolverState,
    steps: Vec<GuessStep>,
}

impl<'a, S: CandidateSource, O: FeedbackOracle> Solver<'a, S, O> {
    /// Create a fresh session
    ///
    /// # Errors
    /// Returns `SolveError::Validation` if the configuration is invalid. No
    /// service is contacted in that case.
    pub fn new(config: &'a SessionConfig, source: &'a S, oracle: &'a O) -> Result<Self, SolveError> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            oracle,
            oracle_session: OracleSession::from_config(config),
            pattern: Pattern::new(config.size),
            knowledge: LetterKnowledge::new(),
            tried: TriedWords::new(),
            round: 0,
            state: SolverState::Searching,
            steps: Vec::new(),
        })
    }

    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Run the session to completion
    ///
    /// # Errors
    /// Returns an error if the oracle fails or its feedback cannot be applied.
    /// Running out of rounds or candidates is a failed outcome, not an error.
    pub async fn run(mut self) -> Result<SolveOutcome, SolveError> {
        tracing::info!(
            mode = %self.oracle_session.mode,
            size = self.config.size,
            max_rounds = self.config.max_rounds,
            "Starting session"
        );

        loop {
            if self.pattern.is_solved() {
                return Ok(self.solved(None));
            }
            if self.round >= self.config.max_rounds {
                return Ok(self.failed(FailureKind::RoundsExhausted));
            }

            self.round += 1;
            self.state = SolverState::Searching;

            let batch = self.request_batch().await;
            if batch.is_empty() {
                return Ok(self.failed(FailureKind::NoCandidates));
            }

            let filter = CandidateFilter::new(&self.pattern, self.config.letter_policy)?;
            for raw in &batch {
                let candidate = raw.trim().to_lowercase();
                if !filter.accepts(&candidate, &self.tried, &self.knowledge, &self.pattern) {
                    continue;
                }
                self.tried.insert(&candidate);

                let before = self.pattern.clone();
                let (index, feedback) = self.submit(&candidate, GuessKind::Candidate).await?;

                if is_all_correct(&feedback) {
                    for entry in &feedback {
                        self.pattern.set_slot(entry.slot, entry.guess)?;
                    }
                    self.steps[index].pattern_after = self.pattern.clone();
                    return Ok(self.solved(Some(candidate)));
                }

                self.apply_feedback(&feedback).await?;
                self.steps[index].pattern_after = self.pattern.clone();

                if self.pattern.is_solved() {
                    return Ok(self.solved(None));
                }
                if self.pattern != before {
                    tracing::debug!(pattern = %self.pattern, "Pattern changed, requesting a fresh batch");
                    break;
                }
            }

            if self.pattern.is_blank() {
                tracing::info!(round = self.round, "Full batch made no progress");
                return Ok(self.failed(FailureKind::NoCandidates));
            }
        }
    }

    /// Ask the source for a batch; lookup failures become an empty batch
    async fn request_batch(&self) -> Vec<String> {
        let context = SearchContext {
            pattern: &self.pattern,
            knowledge: &self.knowledge,
            tried: &self.tried,
            max: self.config.batch_size,
        };

        match self.source.candidates(&context).await {
            Ok(batch) => {
                tracing::debug!(round = self.round, pattern = %self.pattern, count = batch.len(), "Candidate batch");
                batch
            }
            Err(e) => {
                tracing::warn!(%e, round = self.round, "Candidate lookup failed, treating as empty batch");
                Vec::new()
            }
        }
    }

    /// Send `word` to the oracle and record the step
    async fn submit(
        &mut self,
        word: &str,
        kind: GuessKind,
    ) -> Result<(usize, Vec<FeedbackEntry>), SolveError> {
        tracing::info!(round = self.round, word, ?kind, "Guess");
        let feedback = self.oracle.evaluate(word, &self.oracle_session).await?;

        self.steps.push(GuessStep {
            round: self.round,
            word: word.to_string(),
            kind,
            feedback: feedback.clone(),
            pattern_after: self.pattern.clone(),
        });
        Ok((self.steps.len() - 1, feedback))
    }

    /// Apply a candidate's feedback, probing each present letter as it is seen
    async fn apply_feedback(&mut self, feedback: &[FeedbackEntry]) -> Result<(), SolveError> {
        for entry in feedback {
            match entry.verdict {
                Verdict::Absent => {
                    self.knowledge.mark_absent(entry.guess);
                }
                Verdict::Present => {
                    self.knowledge.mark_present(entry.guess);
                    self.probe(entry.guess).await?;
                }
                Verdict::Correct => {
                    self.pattern.set_slot(entry.slot, entry.guess)?;
                    self.knowledge.mark_present(entry.guess);
                }
            }
        }
        Ok(())
    }

    /// Localise `letter` with a single probe guess
    async fn probe(&mut self, letter: char) -> Result<(), SolveError> {
        let Some(word) = build_probe(&self.pattern, letter) else {
            return Ok(());
        };
        if !self.tried.insert(&word) {
            tracing::debug!(probe = %word, "Probe already submitted");
            return Ok(());
        }

        self.state = SolverState::Probing;
        let (index, feedback) = self.submit(&word, GuessKind::Probe).await?;
        if incorporate_probe(&mut self.pattern, &mut self.knowledge, &feedback)? {
            tracing::info!(%letter, pattern = %self.pattern, "Probe placed letter");
        }
        self.steps[index].pattern_after = self.pattern.clone();
        self.state = SolverState::Searching;
        Ok(())
    }

    fn solved(mut self, word: Option<String>) -> SolveOutcome {
        self.state = SolverState::Solved;
        let word = word
            .or_else(|| self.pattern.solution())
            .unwrap_or_default();
        tracing::info!(%word, rounds = self.round, guesses = self.steps.len(), "Solved");
        self.finish(Outcome::Solved { word })
    }

    fn failed(mut self, kind: FailureKind) -> SolveOutcome {
        self.state = SolverState::Failed(kind);
        tracing::info!(%kind, rounds = self.round, pattern = %self.pattern, "Session failed");
        self.finish(Outcome::Failed(kind))
    }

    fn finish(self, outcome: Outcome) -> SolveOutcome {
        SolveOutcome {
            outcome,
            rounds: self.round,
            pattern: self.pattern,
            knowledge: self.knowledge,
            steps: self.steps,
        }
    }
}
