//! GeminiClient -- concrete [`ChatProvider`] implementation for the Gemini
//! API.
//!
//! Sessions are client-side: each holds the system instruction plus the
//! turn history accumulated so far, and every streamed send posts the whole
//! context to `streamGenerateContent`. The API key is wrapped in
//! [`secrecy::SecretString`] and never appears in Debug output or logs.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use amity_core::llm::{ChatProvider, ChatSession, ReplyStream};
use amity_types::config::GlobalConfig;
use amity_types::llm::{ProviderError, SessionConfig};

use super::streaming::create_gemini_stream;
use super::types::{Content, GenerateContentRequest};

/// Gemini chat provider.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Fails with [`ProviderError::Unavailable`] when the credential is
    /// blank or the HTTP client cannot be built. This is terminal for the
    /// conversation feature and is surfaced at setup.
    pub fn new(api_key: SecretString, config: &GlobalConfig) -> Result<Self, ProviderError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(ProviderError::Unavailable(
                "API credential is empty".to_string(),
            ));
        }

        // Bounded timeout so a dead connection surfaces as a stream failure
        // instead of wedging the exchange forever.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::Unavailable(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: config.model.clone(),
        })
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn stream_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.base_url, self.model
        )
    }
}

// GeminiClient intentionally does NOT derive Debug; the SecretString field
// already refuses to print the key, and omitting Debug keeps the rest of
// the client state out of logs too.

impl ChatProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn open_session(&self, config: SessionConfig) -> Result<Box<dyn ChatSession>, ProviderError> {
        let history: Vec<Content> = config.history.iter().map(Content::from).collect();

        Ok(Box::new(GeminiChatSession {
            http: self.http.clone(),
            api_key: self.api_key.clone(),
            url: self.stream_url(),
            system_instruction: Content::system(config.system_instruction),
            history: Arc::new(Mutex::new(history)),
        }))
    }
}

/// One open Gemini dialogue context.
///
/// The history lives behind an `Arc` so an in-flight reply stream (which is
/// `'static`) can append the completed turn pair after the session handle
/// itself has been superseded.
struct GeminiChatSession {
    http: reqwest::Client,
    api_key: SecretString,
    url: String,
    system_instruction: Content,
    history: Arc<Mutex<Vec<Content>>>,
}

impl ChatSession for GeminiChatSession {
    fn send_streaming(&mut self, text: &str) -> ReplyStream {
        let contents = {
            let history = self
                .history
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let mut contents = history.clone();
            contents.push(Content::user(text));
            contents
        };

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(self.system_instruction.clone()),
        };

        create_gemini_stream(
            self.http.clone(),
            self.url.clone(),
            request,
            self.api_key.clone(),
            Arc::clone(&self.history),
            text.to_string(),
        )
    }
}
