//! Shared HTTP client
//!
//! One `reqwest::Client` is built per process and cloned into every service
//! client. Clones share the connection pool.

use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 30;
const REQUEST_TIMEOUT_SECS: u64 = 120;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

/// Build the process-wide HTTP client
///
/// # Errors
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Read an error response body, truncated to a bounded size
pub async fn read_capped_error_body(response: reqwest::Response) -> String {
    let Ok(body) = response.bytes().await else {
        return String::new();
    };
    if body.len() > MAX_ERROR_BODY_BYTES {
        let text = String::from_utf8_lossy(&body[..MAX_ERROR_BODY_BYTES]);
        return format!("{text}...(truncated)");
    }
    String::from_utf8_lossy(&body).into_owned()
}

/// Join a base URL and a path without doubling the slash
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
