use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "meta-llama/llama-3.3-70b-instruct";
/// Total attempts per call, including the first.
const MAX_ATTEMPTS: usize = 3;
const BACKOFF_BASE: Duration = Duration::from_millis(800);
const BACKOFF_CAP: Duration = Duration::from_secs(6);

/// OpenAI-compatible chat-completions client for the itinerary chain.
///
/// Retries transport-class failures only (network errors, 429, 5xx, and
/// provider envelopes missing the assistant content); a syntactically
/// valid assistant reply is returned as-is and any JSON problems inside it
/// belong to the parser layer.
#[derive(Clone, Debug)]
pub struct LlmClient {
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    top_p: f32,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            top_p: 0.9,
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one system+human exchange and return the raw assistant text.
    pub async fn complete(&self, system: &str, user: &str, timeout: Duration) -> Result<String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PlannerError::Transport(format!("failed to build HTTP client: {err}")))?;

        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "top_p": self.top_p,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
        });

        let request_url = build_chat_url(&self.base_url);
        let mut attempt = 0;
        let mut backoff = BACKOFF_BASE;

        loop {
            let can_retry = attempt + 1 < MAX_ATTEMPTS;

            let response = match client
                .post(&request_url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Content-Type", "application/json")
                .json(&body)
                .send()
                .await
            {
                Ok(response) => response,
                Err(err) => {
                    if can_retry {
                        warn!(attempt, error = %err, "LLM request failed, retrying");
                        tokio::time::sleep(backoff).await;
                        attempt += 1;
                        backoff = (backoff * 2).min(BACKOFF_CAP);
                        continue;
                    }
                    return Err(PlannerError::Transport(format!(
                        "HTTP request failed: {err}"
                    )));
                }
            };

            let status = response.status();
            let headers = response.headers().clone();
            let response_text = response.text().await.map_err(|err| {
                PlannerError::Transport(format!("failed to read response: {err}"))
            })?;

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = headers
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(backoff);

                if can_retry {
                    warn!(attempt, "rate limited, backing off");
                    tokio::time::sleep(retry_after).await;
                    attempt += 1;
                    backoff = (backoff * 2).min(BACKOFF_CAP);
                    continue;
                }
                return Err(PlannerError::RateLimit {
                    retry_after: retry_after.as_secs().max(1),
                });
            }

            if status.is_server_error() {
                if can_retry {
                    warn!(attempt, %status, "provider error, retrying");
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    backoff = (backoff * 2).min(BACKOFF_CAP);
                    continue;
                }
                return Err(PlannerError::Transport(format!(
                    "provider returned {status} after {MAX_ATTEMPTS} attempts"
                )));
            }

            if !status.is_success() {
                // Client errors are deterministic for an unchanged request.
                let message = api_error_message(&response_text).unwrap_or(response_text);
                return Err(PlannerError::Transport(format!(
                    "HTTP {status} error: {message}"
                )));
            }

            match extract_content(&response_text) {
                Some(content) => {
                    debug!(chars = content.len(), "received assistant content");
                    return Ok(content);
                }
                None => {
                    if can_retry {
                        warn!(attempt, "provider envelope missing content, retrying");
                        tokio::time::sleep(backoff).await;
                        attempt += 1;
                        backoff = (backoff * 2).min(BACKOFF_CAP);
                        continue;
                    }
                    return Err(PlannerError::Transport(
                        "provider response missing assistant message content".to_string(),
                    ));
                }
            }
        }
    }
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

fn extract_content(response_text: &str) -> Option<String> {
    let response_json: Value = serde_json::from_str(response_text).ok()?;
    if response_json.get("error").is_some() {
        return None;
    }
    response_json
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|s| s.to_string())
}

fn api_error_message(response_text: &str) -> Option<String> {
    let response_json: Value = serde_json::from_str(response_text).ok()?;
    response_json
        .get("error")?
        .get("message")?
        .as_str()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_appends_path_once() {
        assert_eq!(
            build_chat_url("https://openrouter.ai/api/v1"),
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(
            build_chat_url("https://openrouter.ai/api/v1/chat/completions/"),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn content_extraction_requires_full_envelope() {
        let ok = r#"{"choices":[{"message":{"content":"{\"pois\":[]}"}}]}"#;
        assert_eq!(extract_content(ok).unwrap(), "{\"pois\":[]}");

        assert!(extract_content(r#"{"choices":[]}"#).is_none());
        assert!(extract_content(r#"{"error":{"message":"boom"}}"#).is_none());
        assert!(extract_content("not json").is_none());
    }
}
