//! HTTP checker client
//!
//! Endpoints, all `GET`, all answering with a JSON array of feedback entries:
//!
//! ```text
//! /daily?guess=<g>&size=<n>
//! /random?guess=<g>&size=<n>&seed=<s>
//! /word/<word>?guess=<g>
//! ```

use super::{FeedbackOracle, OracleError, OracleSession};
use crate::config::{GameMode, ValidationError, validate_guess};
use crate::core::FeedbackEntry;
use crate::http::{join_url, read_capped_error_body};

/// Client for the remote puzzle-checking service
#[derive(Debug, Clone)]
pub struct CheckerClient {
    http: reqwest::Client,
    base_url: String,
}

impl CheckerClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn request(
        &self,
        guess: &str,
        session: &OracleSession,
    ) -> Result<reqwest::RequestBuilder, ValidationError> {
        let size = session.size.to_string();
        let request = match session.mode {
            GameMode::Daily => self
                .http
                .get(join_url(&self.base_url, "daily"))
                .query(&[("guess", guess), ("size", size.as_str())]),
            GameMode::Random => {
                let mut params = vec![("guess", guess.to_string()), ("size", size)];
                if let Some(seed) = session.seed {
                    params.push(("seed", seed.to_string()));
                }
                self.http
                    .get(join_url(&self.base_url, "random"))
                    .query(&params)
            }
            GameMode::Word => {
                let word = session
                    .word
                    .as_deref()
                    .filter(|w| !w.is_empty())
                    .ok_or(ValidationError::MissingWord)?;
                self.http
                    .get(join_url(&self.base_url, &format!("word/{word}")))
                    .query(&[("guess", guess)])
            }
        };
        Ok(request)
    }
}

impl FeedbackOracle for CheckerClient {
    async fn evaluate(
        &self,
        guess: &str,
        session: &OracleSession,
    ) -> Result<Vec<FeedbackEntry>, OracleError> {
        validate_guess(guess, session.size)?;
        let request = self.request(guess, session)?;

        tracing::debug!(guess, mode = %session.mode, "Submitting guess to checker");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = read_capped_error_body(response).await;
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let feedback: Vec<FeedbackEntry> = response.json().await?;
        let expected = guess.chars().count();
        if feedback.len() != expected {
            return Err(OracleError::MalformedFeedback {
                expected,
                actual: feedback.len(),
            });
        }

        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session(mode: GameMode, seed: Option<u32>, word: Option<&str>) -> OracleSession {
        OracleSession {
            mode,
            size: 5,
            seed,
            word: word.map(str::to_string),
        }
    }

    fn feedback_body(guess: &str, results: &[&str]) -> serde_json::Value {
        json!(
            guess
                .chars()
                .zip(results)
                .enumerate()
                .map(|(slot, (g, r))| json!({"slot": slot, "guess": g.to_string(), "result": r}))
                .collect::<Vec<_>>()
        )
    }

    #[tokio::test]
    async fn daily_sends_guess_and_size() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/daily"))
            .and(query_param("guess", "apply"))
            .and(query_param("size", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(feedback_body(
                "apply",
                &["correct", "correct", "correct", "correct", "absent"],
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = CheckerClient::new(reqwest::Client::new(), server.uri());
        let feedback = client
            .evaluate("apply", &session(GameMode::Daily, None, None))
            .await
            .unwrap();

        assert_eq!(feedback.len(), 5);
        assert_eq!(feedback[4].guess, 'y');
        assert_eq!(feedback[4].verdict, Verdict::Absent);
    }

    #[tokio::test]
    async fn random_sends_seed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random"))
            .and(query_param("seed", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(feedback_body(
                "crane",
                &["absent"; 5],
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = CheckerClient::new(reqwest::Client::new(), server.uri());
        let feedback = client
            .evaluate("crane", &session(GameMode::Random, Some(7), None))
            .await
            .unwrap();
        assert!(feedback.iter().all(|e| e.verdict == Verdict::Absent));
    }

    #[tokio::test]
    async fn word_mode_uses_path_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/word/apple"))
            .and(query_param("guess", "apple"))
            .respond_with(ResponseTemplate::new(200).set_body_json(feedback_body(
                "apple",
                &["correct"; 5],
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = CheckerClient::new(reqwest::Client::new(), server.uri());
        let feedback = client
            .evaluate("apple", &session(GameMode::Word, None, Some("apple")))
            .await
            .unwrap();
        assert!(crate::core::is_all_correct(&feedback));
    }

    #[tokio::test]
    async fn length_mismatch_fails_before_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = CheckerClient::new(reqwest::Client::new(), server.uri());
        let result = client
            .evaluate("apples", &session(GameMode::Daily, None, None))
            .await;

        assert!(matches!(
            result,
            Err(OracleError::Invalid(ValidationError::LengthMismatch { .. }))
        ));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let client = CheckerClient::new(reqwest::Client::new(), server.uri());
        let result = client
            .evaluate("apple", &session(GameMode::Daily, None, None))
            .await;

        match result {
            Err(OracleError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "down");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn short_feedback_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = CheckerClient::new(reqwest::Client::new(), server.uri());
        let result = client
            .evaluate("apple", &session(GameMode::Daily, None, None))
            .await;

        assert!(matches!(
            result,
            Err(OracleError::MalformedFeedback {
                expected: 5,
                actual: 0
            })
        ));
    }
}
