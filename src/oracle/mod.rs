//! Feedback oracle
//!
//! The oracle scores a full-length guess letter by letter against the hidden
//! word. [`CheckerClient`] talks to the remote checker service; tests supply
//! in-memory implementations of [`FeedbackOracle`].

mod checker;

pub use checker::CheckerClient;

use crate::config::{GameMode, SessionConfig, ValidationError};
use crate::core::FeedbackEntry;
use rand::Rng;

/// Range the per-session random-mode seed is drawn from
const SEED_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Oracle failures
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("checker request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("checker returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("checker returned {actual} feedback entries for a {expected}-letter guess")]
    MalformedFeedback { expected: usize, actual: usize },
}

/// What the oracle needs to know about the game being played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleSession {
    pub mode: GameMode,
    pub size: usize,
    pub seed: Option<u32>,
    pub word: Option<String>,
}

impl OracleSession {
    /// Derive the oracle session for a game
    ///
    /// Random mode draws its seed here, once, so every guess of the session
    /// is scored against the same hidden word.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        let seed = (config.mode == GameMode::Random).then(|| rand::rng().random_range(SEED_RANGE));
        Self {
            mode: config.mode,
            size: config.size,
            seed,
            word: config.word.clone(),
        }
    }
}

/// Scores guesses against the hidden word
#[allow(async_fn_in_trait)]
pub trait FeedbackOracle {
    /// Score `guess`, returning one entry per letter in slot order
    ///
    /// Implementations must reject a guess whose length differs from
    /// `session.size` before contacting any service.
    async fn evaluate(
        &self,
        guess: &str,
        session: &OracleSession,
    ) -> Result<Vec<FeedbackEntry>, OracleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_mode_draws_seed_in_range() {
        let config = SessionConfig::new(GameMode::Random, 5);
        for _ in 0..20 {
            let session = OracleSession::from_config(&config);
            let seed = session.seed.unwrap();
            assert!(SEED_RANGE.contains(&seed));
        }
    }

    #[test]
    fn other_modes_have_no_seed() {
        let daily = OracleSession::from_config(&SessionConfig::new(GameMode::Daily, 5));
        assert_eq!(daily.seed, None);

        let word = OracleSession::from_config(&SessionConfig::for_word("apple"));
        assert_eq!(word.seed, None);
        assert_eq!(word.word.as_deref(), Some("apple"));
        assert_eq!(word.size, 5);
    }
}
