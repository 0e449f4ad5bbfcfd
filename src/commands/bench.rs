//! Batch evaluation over a list of explicit words
//!
//! Each word is played as its own explicit-word session against the checker
//! and the results are rolled up into a [`BenchResult`].

use super::solve::{Services, run_session};
use crate::config::SessionConfig;
use crate::solver::{FailureKind, Outcome};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::{Duration, Instant};

/// How one benchmarked word ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOutcome {
    Solved { rounds: u32, guesses: usize },
    Failed { kind: FailureKind, guesses: usize },
    /// The session aborted with an error
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRun {
    pub word: String,
    pub outcome: WordOutcome,
}

/// Aggregate statistics from a benchmark run
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub total_words: usize,
    pub solved: usize,
    pub rounds_exhausted: usize,
    pub no_candidates: usize,
    pub errors: usize,
    pub average_rounds: f64,
    pub average_guesses: f64,
    /// Solved words keyed by rounds taken
    pub distribution: BTreeMap<u32, usize>,
    pub failed_words: Vec<String>,
    pub duration: Duration,
}

impl BenchResult {
    /// Roll individual runs up into totals
    #[must_use]
    pub fn from_runs(runs: &[WordRun], duration: Duration) -> Self {
        let mut distribution = BTreeMap::new();
        let mut failed_words = Vec::new();
        let (mut solved, mut rounds_exhausted, mut no_candidates, mut errors) = (0, 0, 0, 0);
        let mut total_rounds = 0u64;
        let mut total_guesses = 0usize;

        for run in runs {
            match &run.outcome {
                WordOutcome::Solved { rounds, guesses } => {
                    solved += 1;
                    total_rounds += u64::from(*rounds);
                    total_guesses += guesses;
                    *distribution.entry(*rounds).or_insert(0) += 1;
                }
                WordOutcome::Failed { kind, .. } => {
                    match kind {
                        FailureKind::RoundsExhausted => rounds_exhausted += 1,
                        FailureKind::NoCandidates => no_candidates += 1,
                    }
                    failed_words.push(run.word.clone());
                }
                WordOutcome::Error(_) => {
                    errors += 1;
                    failed_words.push(run.word.clone());
                }
            }
        }

        let (average_rounds, average_guesses) = if solved == 0 {
            (0.0, 0.0)
        } else {
            (
                total_rounds as f64 / solved as f64,
                total_guesses as f64 / solved as f64,
            )
        };

        Self {
            total_words: runs.len(),
            solved,
            rounds_exhausted,
            no_candidates,
            errors,
            average_rounds,
            average_guesses,
            distribution,
            failed_words,
            duration,
        }
    }

    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64 * 100.0
    }
}

/// Parse a word list: one word per line, blank lines and `#` comments skipped
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Read a word list from disk
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    Ok(parse_word_list(&content))
}

/// Play every word in `words` with the session settings of `template`
///
/// Mode, word and size come from each word; rounds, source, letter policy and
/// batch size come from the template.
pub async fn run_bench(
    words: &[String],
    template: &SessionConfig,
    services: &Services,
) -> BenchResult {
    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut runs = Vec::with_capacity(words.len());

    for word in words {
        pb.set_message(word.clone());

        let config = SessionConfig::for_word(word)
            .with_max_rounds(template.max_rounds)
            .with_source(template.source, template.api_key.clone())
            .with_letter_policy(template.letter_policy)
            .with_batch_size(template.batch_size);

        let outcome = match run_session(&config, services).await {
            Ok(result) => match result.outcome {
                Outcome::Solved { .. } => WordOutcome::Solved {
                    rounds: result.rounds,
                    guesses: result.guesses(),
                },
                Outcome::Failed(kind) => WordOutcome::Failed {
                    kind,
                    guesses: result.guesses(),
                },
            },
            Err(e) => {
                tracing::warn!(word = %word, error = %e, "Benchmark session aborted");
                WordOutcome::Error(e.to_string())
            }
        };

        runs.push(WordRun {
            word: word.clone(),
            outcome,
        });
        pb.inc(1);
    }

    pb.finish_and_clear();
    BenchResult::from_runs(&runs, start.elapsed())
}
