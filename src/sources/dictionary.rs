//! Dictionary lookup source
//!
//! Queries `GET /words?sp=<pattern>&max=<n>`, where `?` in the spelling
//! pattern matches any single letter. Results come back ranked by corpus
//! frequency:
//!
//! ```text
//! [{"word": "apple", "score": 2400}, {"word": "apply", "score": 1700}]
//! ```

use super::{CandidateSource, CandidateSourceError, SearchContext};
use crate::http::{join_url, read_capped_error_body};
use serde::Deserialize;

/// Number of results requested when checking a single word
const LOOKUP_MAX: usize = 10;

#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    word: String,
}

/// Client for the spelling-pattern dictionary service
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Look up words matching `spelling`, best ranked first
    ///
    /// # Errors
    /// Returns an error if the request fails or the service answers with a
    /// non-success status.
    pub async fn query(
        &self,
        spelling: &str,
        max: usize,
    ) -> Result<Vec<String>, CandidateSourceError> {
        let max_param = max.to_string();
        let response = self
            .http
            .get(join_url(&self.base_url, "words"))
            .query(&[("sp", spelling), ("max", max_param.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = read_capped_error_body(response).await;
            return Err(CandidateSourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let entries: Vec<DictionaryEntry> = response.json().await?;
        let mut words: Vec<String> = entries.into_iter().map(|e| e.word).collect();
        words.truncate(max);
        Ok(words)
    }

    /// True if the dictionary knows `word` exactly
    ///
    /// # Errors
    /// Propagates lookup failures.
    pub async fn is_known_word(&self, word: &str) -> Result<bool, CandidateSourceError> {
        let words = self.query(word, LOOKUP_MAX).await?;
        Ok(words.iter().any(|w| w.eq_ignore_ascii_case(word)))
    }
}

impl CandidateSource for DictionaryClient {
    async fn candidates(
        &self,
        context: &SearchContext<'_>,
    ) -> Result<Vec<String>, CandidateSourceError> {
        let spelling = context.pattern.to_query();
        let words = self.query(&spelling, context.max).await?;
        tracing::debug!(%spelling, count = words.len(), "Dictionary candidates");
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterKnowledge, Pattern, TriedWords};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn candidates_query_uses_wildcards() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/words"))
            .and(query_param("sp", "appl?"))
            .and(query_param("max", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"word": "apple", "score": 2400},
                {"word": "apply", "score": 1700}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = DictionaryClient::new(reqwest::Client::new(), server.uri());
        let pattern: Pattern = "appl?".parse().unwrap();
        let knowledge = LetterKnowledge::new();
        let tried = TriedWords::new();
        let context = SearchContext {
            pattern: &pattern,
            knowledge: &knowledge,
            tried: &tried,
            max: 100,
        };

        let words = client.candidates(&context).await.unwrap();
        assert_eq!(words, vec!["apple", "apply"]);
    }

    #[tokio::test]
    async fn query_truncates_to_max() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/words"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"word": "aa"}, {"word": "ab"}, {"word": "ac"}
            ])))
            .mount(&server)
            .await;

        let client = DictionaryClient::new(reqwest::Client::new(), server.uri());
        let words = client.query("a?", 2).await.unwrap();
        assert_eq!(words, vec!["aa", "ab"]);
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = DictionaryClient::new(reqwest::Client::new(), server.uri());
        let result = client.query("?????", 100).await;
        assert!(matches!(
            result,
            Err(CandidateSourceError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn known_word_requires_exact_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("sp", "apple"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"word": "apple", "score": 1}])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("sp", "qzxvw"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = DictionaryClient::new(reqwest::Client::new(), server.uri());
        assert!(client.is_known_word("apple").await.unwrap());
        assert!(!client.is_known_word("qzxvw").await.unwrap());
    }
}
