//! Session configuration
//!
//! A [`SessionConfig`] is built once per game from CLI flags and is never
//! mutated afterwards. [`SessionConfig::validate`] runs every check that must
//! pass before the first network call.

use clap::ValueEnum;
use std::fmt;

/// Default word length
pub const DEFAULT_SIZE: usize = 5;
/// Default round cap
pub const DEFAULT_MAX_ROUNDS: u32 = 50;
/// Default number of candidates requested per round
pub const DEFAULT_BATCH_SIZE: usize = 100;

pub const DEFAULT_CHECKER_URL: &str = "https://wordle.votee.dev:8000";
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.datamuse.com";
pub const DEFAULT_LLM_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// How the checker picks the hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GameMode {
    /// Date-keyed word of the day
    #[default]
    Daily,
    /// Seeded draw from a size-filtered pool
    Random,
    /// A word supplied by the player
    Word,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Random => "random",
            Self::Word => "word",
        })
    }
}

/// Which candidate source backs the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceKind {
    /// Spelling-pattern dictionary lookup
    #[default]
    Dictionary,
    /// Language-model generated candidates
    Generative,
}

/// How candidates are checked against confirmed-absent letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterPolicy {
    /// Letter sets are consulted but never reject a candidate
    #[default]
    Lenient,
    /// Reject candidates using an absent letter outside a confirmed slot
    Strict,
}

/// Configuration errors, raised before any service is contacted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("size must be greater than 0")]
    ZeroSize,

    #[error("max rounds must be greater than 0")]
    ZeroRounds,

    #[error("batch size must be greater than 0")]
    ZeroBatchSize,

    #[error("guess '{guess}' has length {actual}, expected {expected}")]
    LengthMismatch {
        guess: String,
        expected: usize,
        actual: usize,
    },

    #[error("a word must be provided when mode is word")]
    MissingWord,

    #[error("word '{0}' must contain only letters, no spaces or special characters")]
    InvalidWord(String),

    #[error("word '{word}' has {actual} letters but size is {expected}")]
    SizeMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("the generative source requires an API key")]
    MissingCredentials,
}

/// Immutable per-session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub size: usize,
    pub word: Option<String>,
    pub max_rounds: u32,
    pub source: SourceKind,
    pub letter_policy: LetterPolicy,
    pub batch_size: usize,
    pub api_key: Option<String>,
}

impl SessionConfig {
    /// Configuration for a daily or random game of the given size
    #[must_use]
    pub fn new(mode: GameMode, size: usize) -> Self {
        Self {
            mode,
            size,
            word: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
            source: SourceKind::default(),
            letter_policy: LetterPolicy::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            api_key: None,
        }
    }

    /// Configuration for an explicit-word game; the size follows the word
    #[must_use]
    pub fn for_word(word: &str) -> Self {
        let word = word.trim().to_lowercase();
        Self {
            size: word.chars().count(),
            word: Some(word),
            ..Self::new(GameMode::Word, DEFAULT_SIZE)
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_source(mut self, source: SourceKind, api_key: Option<String>) -> Self {
        self.source = source;
        self.api_key = api_key;
        self
    }

    pub fn with_letter_policy(mut self, policy: LetterPolicy) -> Self {
        self.letter_policy = policy;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Check every precondition of a session
    ///
    /// # Errors
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.size == 0 {
            return Err(ValidationError::ZeroSize);
        }
        if self.max_rounds == 0 {
            return Err(ValidationError::ZeroRounds);
        }
        if self.batch_size == 0 {
            return Err(ValidationError::ZeroBatchSize);
        }

        if self.mode == GameMode::Word {
            let word = self
                .word
                .as_deref()
                .filter(|w| !w.is_empty())
                .ok_or(ValidationError::MissingWord)?;
            validate_word(word)?;

            let actual = word.chars().count();
            if actual != self.size {
                return Err(ValidationError::SizeMismatch {
                    word: word.to_string(),
                    expected: self.size,
                    actual,
                });
            }
        }

        if self.source == SourceKind::Generative
            && self.api_key.as_deref().is_none_or(|k| k.trim().is_empty())
        {
            return Err(ValidationError::MissingCredentials);
        }

        Ok(())
    }
}

/// Check that `word` is made of ASCII letters only
///
/// # Errors
/// Returns `ValidationError::InvalidWord` otherwise.
pub fn validate_word(word: &str) -> Result<(), ValidationError> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidWord(word.to_string()));
    }
    Ok(())
}

/// Check that `guess` has exactly `size` characters
///
/// # Errors
/// Returns `ValidationError::LengthMismatch` otherwise.
pub fn validate_guess(guess: &str, size: usize) -> Result<(), ValidationError> {
    let actual = guess.chars().count();
    if actual != size {
        return Err(ValidationError::LengthMismatch {
            guess: guess.to_string(),
            expected: size,
            actual,
        });
    }
    Ok(())
}

/// Base URLs of the remote services, shared by every session in a process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub checker_url: String,
    pub dictionary_url: String,
    pub llm_url: String,
    pub llm_model: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            checker_url: DEFAULT_CHECKER_URL.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            llm_url: DEFAULT_LLM_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
        }
    }
}
