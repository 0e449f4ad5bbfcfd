//! Candidate sources
//!
//! A candidate source proposes words for the current pattern, in priority
//! order. Two variants exist:
//!
//! - [`DictionaryClient`] - spelling-pattern lookup against a word corpus
//! - [`GenerativeClient`] - a language model asked for matching words
//!
//! Neither is trusted: the solver filters every batch before submitting.

mod dictionary;
mod generative;

pub use dictionary::DictionaryClient;
pub use generative::{GenerativeClient, RECENT_EXCLUSIONS, build_prompt, parse_candidates};

use crate::config::{ServiceEndpoints, SourceKind};
use crate::core::{LetterKnowledge, Pattern, TriedWords};

/// Candidate lookup failures
#[derive(Debug, thiserror::Error)]
pub enum CandidateSourceError {
    #[error("candidate request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("candidate service returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Everything a source may use to pick candidates
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    pub pattern: &'a Pattern,
    pub knowledge: &'a LetterKnowledge,
    pub tried: &'a TriedWords,
    /// Upper bound on the number of candidates to return
    pub max: usize,
}

/// Proposes candidate words for the current pattern
#[allow(async_fn_in_trait)]
pub trait CandidateSource {
    /// Return candidates in priority order, at most `context.max` of them
    async fn candidates(
        &self,
        context: &SearchContext<'_>,
    ) -> Result<Vec<String>, CandidateSourceError>;
}

/// Enum wrapper over the source variants
///
/// The variant is chosen once when the process starts and keeps static dispatch.
#[derive(Debug, Clone)]
pub enum Source {
    Dictionary(DictionaryClient),
    Generative(GenerativeClient),
}

impl Source {
    /// Build the source selected by `kind`
    #[must_use]
    pub fn from_kind(
        kind: SourceKind,
        http: &reqwest::Client,
        endpoints: &ServiceEndpoints,
        api_key: Option<&str>,
    ) -> Self {
        match kind {
            SourceKind::Dictionary => Self::Dictionary(DictionaryClient::new(
                http.clone(),
                endpoints.dictionary_url.clone(),
            )),
            SourceKind::Generative => Self::Generative(GenerativeClient::new(
                http.clone(),
                endpoints.llm_url.clone(),
                endpoints.llm_model.clone(),
                api_key.unwrap_or_default().to_string(),
            )),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        match self {
            Self::Dictionary(_) => SourceKind::Dictionary,
            Self::Generative(_) => SourceKind::Generative,
        }
    }
}

impl CandidateSource for Source {
    async fn candidates(
        &self,
        context: &SearchContext<'_>,
    ) -> Result<Vec<String>, CandidateSourceError> {
        match self {
            Self::Dictionary(s) => s.candidates(context).await,
            Self::Generative(s) => s.candidates(context).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_kind_selects_variant() {
        let http = reqwest::Client::new();
        let endpoints = ServiceEndpoints::default();

        let dictionary = Source::from_kind(SourceKind::Dictionary, &http, &endpoints, None);
        assert_eq!(dictionary.kind(), SourceKind::Dictionary);

        let generative =
            Source::from_kind(SourceKind::Generative, &http, &endpoints, Some("sk-test"));
        assert_eq!(generative.kind(), SourceKind::Generative);
    }
}
