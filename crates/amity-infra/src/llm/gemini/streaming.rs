//! SSE stream creation for `streamGenerateContent`.
//!
//! Each SSE `data:` payload is a `GenerateContentResponse` chunk whose first
//! candidate carries the next piece of reply text. The adapter yields plain
//! text fragments and, after a clean stream, appends the completed user and
//! model turns to the session's shared history. A failed stream leaves the
//! history untouched so the session never learns a turn the user never saw
//! answered.

use std::sync::{Arc, Mutex};

use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use secrecy::{ExposeSecret, SecretString};

use amity_core::llm::ReplyStream;
use amity_types::llm::ProviderError;

use super::types::{Content, GenerateContentRequest, GenerateContentResponse};

/// Open a streaming SSE connection and adapt it to a [`ReplyStream`].
pub(super) fn create_gemini_stream(
    http: reqwest::Client,
    url: String,
    request: GenerateContentRequest,
    api_key: SecretString,
    history: Arc<Mutex<Vec<Content>>>,
    user_text: String,
) -> ReplyStream {
    Box::pin(async_stream::try_stream! {
        let response = http
            .post(&url)
            .header("x-goog-api-key", api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            fail_for_status(status, body)?;
            unreachable!("non-success status already raised");
        }

        let mut events = response.bytes_stream().eventsource();
        let mut full_reply = String::new();

        while let Some(event) = events.next().await {
            let event = event.map_err(|e| ProviderError::Stream(e.to_string()))?;
            let chunk: GenerateContentResponse = serde_json::from_str(&event.data)
                .map_err(|e| {
                    ProviderError::Deserialization(format!("bad stream chunk: {e}"))
                })?;

            if let Some(fragment) = chunk.text_fragment() {
                full_reply.push_str(&fragment);
                yield fragment;
            }
        }

        if !full_reply.is_empty() {
            let mut history = history
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            history.push(Content::user(user_text));
            history.push(Content::model(full_reply));
        }
    })
}

/// Map a non-success HTTP status to the provider error taxonomy.
fn fail_for_status(status: reqwest::StatusCode, body: String) -> Result<(), ProviderError> {
    Err(match status.as_u16() {
        401 | 403 => ProviderError::AuthenticationFailed,
        429 => ProviderError::RateLimited {
            retry_after_ms: None,
        },
        _ => ProviderError::Provider {
            message: format!("HTTP {status}: {body}"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_for_status_mapping() {
        let auth = fail_for_status(reqwest::StatusCode::UNAUTHORIZED, String::new()).unwrap_err();
        assert!(matches!(auth, ProviderError::AuthenticationFailed));

        let forbidden = fail_for_status(reqwest::StatusCode::FORBIDDEN, String::new()).unwrap_err();
        assert!(matches!(forbidden, ProviderError::AuthenticationFailed));

        let limited =
            fail_for_status(reqwest::StatusCode::TOO_MANY_REQUESTS, String::new()).unwrap_err();
        assert!(matches!(limited, ProviderError::RateLimited { .. }));

        let other = fail_for_status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
        )
        .unwrap_err();
        assert!(matches!(
            other,
            ProviderError::Provider { message } if message.contains("boom")
        ));
    }
}

