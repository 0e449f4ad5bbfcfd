//! Single-session solve command
//!
//! Wires the service clients into a fresh [`Solver`] and runs it.

use crate::config::{GameMode, ServiceEndpoints, SessionConfig, SourceKind};
use crate::oracle::CheckerClient;
use crate::solver::{SolveError, SolveOutcome, Solver};
use crate::sources::{DictionaryClient, Source};
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Service clients, built once per process and shared by every session
#[derive(Debug, Clone)]
pub struct Services {
    pub source: Source,
    pub checker: CheckerClient,
    pub dictionary: DictionaryClient,
}

impl Services {
    #[must_use]
    pub fn new(
        http: &reqwest::Client,
        endpoints: &ServiceEndpoints,
        source: SourceKind,
        api_key: Option<&str>,
    ) -> Self {
        Self {
            source: Source::from_kind(source, http, endpoints, api_key),
            checker: CheckerClient::new(http.clone(), endpoints.checker_url.clone()),
            dictionary: DictionaryClient::new(http.clone(), endpoints.dictionary_url.clone()),
        }
    }
}

/// Run one session with no terminal output
///
/// # Errors
/// Returns an error if the configuration is invalid or the oracle fails.
pub async fn run_session(
    config: &SessionConfig,
    services: &Services,
) -> Result<SolveOutcome, SolveError> {
    Solver::new(config, &services.source, &services.checker)?
        .run()
        .await
}

/// Validate, confirm the word is real, then run one session behind a spinner
///
/// # Errors
/// Returns an error if validation fails, the explicit word is not in the
/// dictionary, or the session aborts.
pub async fn solve_word(config: &SessionConfig, services: &Services) -> Result<SolveOutcome> {
    config.validate()?;

    if config.mode == GameMode::Word
        && let Some(word) = config.word.as_deref()
        && !services.dictionary.is_known_word(word).await?
    {
        bail!("Word '{word}' not found in the dictionary");
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Solving {} game ({} letters)...",
        config.mode, config.size
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = run_session(config, services).await;
    spinner.finish_and_clear();

    Ok(result?)
}
