//! Language-model candidate source
//!
//! Sends the current pattern, the letter sets and a short tail of tried words
//! to an OpenAI-compatible chat completions endpoint and expects a JSON array
//! of lowercase words back. The model is a best-effort oracle: malformed
//! replies become an empty batch, and every word still goes through the
//! solver's filter.

use super::{CandidateSource, CandidateSourceError, SearchContext};
use crate::core::WILDCARD;
use crate::http::{join_url, read_capped_error_body};
use serde_json::json;

/// Tried words included in the prompt as exclusions
pub const RECENT_EXCLUSIONS: usize = 5;

const TEMPERATURE: f64 = 0.7;

const SYSTEM_PROMPT: &str = "You are a word puzzle assistant. You propose real English words \
that fit a partially known spelling. Reply with a JSON array of lowercase strings and nothing else.";

/// Client for an OpenAI-compatible chat completions API
#[derive(Debug, Clone)]
pub struct GenerativeClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GenerativeClient {
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }
}

/// Build the user prompt for the current search state
#[must_use]
pub fn build_prompt(context: &SearchContext<'_>) -> String {
    let size = context.pattern.size();
    let join = |letters: Vec<char>| {
        if letters.is_empty() {
            "none".to_string()
        } else {
            letters
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
    };
    // A letter placed in the pattern is in the word even when a repeated
    // copy of it was scored absent
    let placed: Vec<char> = (0..size).filter_map(|i| context.pattern.slot(i)).collect();
    let absent: Vec<char> = context
        .knowledge
        .absent()
        .into_iter()
        .filter(|c| !placed.contains(c))
        .collect();
    let mut present = context.knowledge.present();
    present.extend(placed.iter().copied());
    present.sort_unstable();
    present.dedup();

    let recent = context.tried.recent(RECENT_EXCLUSIONS);
    let exclusions = if recent.is_empty() {
        "none".to_string()
    } else {
        recent.join(", ")
    };

    format!(
        "Find English words of exactly {size} letters matching the pattern \"{pattern}\", \
where '{WILDCARD}' stands for any single unknown letter and every other letter is fixed in place.\n\
Letters that are NOT in the word: {absent}\n\
Letters that ARE in the word: {present}\n\
Do not suggest these words: {exclusions}\n\
Return a JSON array of at most {max} lowercase words, each exactly {size} letters long, \
most common words first.",
        pattern = context.pattern.to_query(),
        absent = join(absent),
        present = join(present),
        max = context.max,
    )
}

/// Parse the model's reply into candidate words
///
/// Accepts a bare JSON array or one wrapped in a fenced code block. Anything
/// else yields an empty list.
#[must_use]
pub fn parse_candidates(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    match serde_json::from_str::<Vec<String>>(body) {
        Ok(words) => words
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect(),
        Err(e) => {
            tracing::warn!(%e, reply_bytes = content.len(), "Model reply is not a JSON word list");
            Vec::new()
        }
    }
}

impl CandidateSource for GenerativeClient {
    async fn candidates(
        &self,
        context: &SearchContext<'_>,
    ) -> Result<Vec<String>, CandidateSourceError> {
        let request_body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": build_prompt(context)}
            ],
            "temperature": TEMPERATURE
        });

        let response = self
            .http
            .post(join_url(&self.base_url, "chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&request_body)
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

        let resp_json: serde_json::Value = response.json().await?;
        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("");

        let mut words = parse_candidates(content);
        words.truncate(context.max);
        tracing::debug!(pattern = %context.pattern, count = words.len(), "Generated candidates");
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterKnowledge, Pattern, TriedWords, Verdict, parse_feedback};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
    }

    #[test]
    fn prompt_includes_knowledge_and_recent_tail() {
        let pattern: Pattern = "a??le".parse().unwrap();
        let mut knowledge = LetterKnowledge::new();
        knowledge.mark_absent('y');
        knowledge.mark_absent('z');
        knowledge.mark_present('a');
        let mut tried = TriedWords::new();
        for word in ["one", "two", "three", "four", "five", "six"] {
            tried.insert(word);
        }
        let context = SearchContext {
            pattern: &pattern,
            knowledge: &knowledge,
            tried: &tried,
            max: 100,
        };

        let prompt = build_prompt(&context);
        assert!(prompt.contains("\"a??le\""));
        assert!(prompt.contains("exactly 5 letters"));
        assert!(prompt.contains("NOT in the word: y, z"));
        assert!(prompt.contains("ARE in the word: a"));
        assert!(prompt.contains("two, three, four, five, six"));
        assert!(!prompt.contains("one,"));
        assert!(prompt.contains("at most 100"));
    }

    #[test]
    fn placed_letter_is_never_listed_absent() {
        // "geese" against "apple": the extra e's score absent, the last one correct
        let feedback = parse_feedback("geese", "----G").unwrap();
        let mut pattern = Pattern::new(5);
        let mut knowledge = LetterKnowledge::new();
        for entry in &feedback {
            match entry.verdict {
                Verdict::Absent => {
                    knowledge.mark_absent(entry.guess);
                }
                Verdict::Present => {
                    knowledge.mark_present(entry.guess);
                }
                Verdict::Correct => {
                    pattern.set_slot(entry.slot, entry.guess).unwrap();
                    knowledge.mark_present(entry.guess);
                }
            }
        }
        assert!(knowledge.is_absent('e'));

        let tried = TriedWords::new();
        let context = SearchContext {
            pattern: &pattern,
            knowledge: &knowledge,
            tried: &tried,
            max: 100,
        };

        let prompt = build_prompt(&context);
        assert!(prompt.contains("\"????e\""));
        assert!(prompt.contains("NOT in the word: g, s\n"));
        assert!(prompt.contains("ARE in the word: e\n"));
    }

    #[test]
    fn prompt_marks_empty_sets() {
        let pattern = Pattern::new(4);
        let knowledge = LetterKnowledge::new();
        let tried = TriedWords::new();
        let context = SearchContext {
            pattern: &pattern,
            knowledge: &knowledge,
            tried: &tried,
            max: 10,
        };

        let prompt = build_prompt(&context);
        assert!(prompt.contains("NOT in the word: none"));
        assert!(prompt.contains("Do not suggest these words: none"));
    }

    #[test]
    fn parse_accepts_plain_and_fenced_arrays() {
        assert_eq!(parse_candidates(r#"["Apple", " apply "]"#), vec!["apple", "apply"]);
        assert_eq!(
            parse_candidates("```json\n[\"ample\"]\n```"),
            vec!["ample"]
        );
        assert_eq!(parse_candidates("```\n[\"angle\"]\n```"), vec!["angle"]);
    }

    #[test]
    fn parse_tolerates_malformed_replies() {
        assert!(parse_candidates("Sure! Here are some words: apple, apply").is_empty());
        assert!(parse_candidates(r#"{"words": ["apple"]}"#).is_empty());
        assert!(parse_candidates("").is_empty());
    }

    #[tokio::test]
    async fn candidates_posts_chat_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion(r#"["apple", "apply", "apple", "ample"]"#)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = GenerativeClient::new(reqwest::Client::new(), server.uri(), "test-model", "sk-test");
        let pattern: Pattern = "ap???".parse().unwrap();
        let knowledge = LetterKnowledge::new();
        let tried = TriedWords::new();
        let context = SearchContext {
            pattern: &pattern,
            knowledge: &knowledge,
            tried: &tried,
            max: 3,
        };

        let words = client.candidates(&context).await.unwrap();
        assert_eq!(words, vec!["apple", "apply", "apple"]);
    }

    #[tokio::test]
    async fn malformed_reply_is_empty_batch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("no idea")))
            .mount(&server)
            .await;

        let client = GenerativeClient::new(reqwest::Client::new(), server.uri(), "m", "k");
        let pattern = Pattern::new(5);
        let knowledge = LetterKnowledge::new();
        let tried = TriedWords::new();
        let context = SearchContext {
            pattern: &pattern,
            knowledge: &knowledge,
            tried: &tried,
            max: 100,
        };

        assert!(client.candidates(&context).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unauthorized_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let client = GenerativeClient::new(reqwest::Client::new(), server.uri(), "m", "k");
        let pattern = Pattern::new(5);
        let knowledge = LetterKnowledge::new();
        let tried = TriedWords::new();
        let context = SearchContext {
            pattern: &pattern,
            knowledge: &knowledge,
            tried: &tried,
            max: 100,
        };

        assert!(matches!(
            client.candidates(&context).await,
            Err(CandidateSourceError::Status { status: 401, .. })
        ));
    }
}
