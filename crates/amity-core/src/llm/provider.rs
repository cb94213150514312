//! ChatProvider and ChatSession trait definitions.
//!
//! These are the ports the infrastructure layer implements (e.g., the
//! Gemini client in `amity-infra`). Both traits are object-safe: sessions
//! are held as `Box<dyn ChatSession>` by the session manager, and reply
//! streams are boxed so they can cross the trait boundary.

use std::pin::Pin;

use futures_util::Stream;

use amity_types::llm::{ProviderError, SessionConfig};

/// A lazy, finite, non-restartable sequence of reply text fragments.
///
/// The stream is `'static`: it owns everything it needs, so a superseded
/// session's in-flight reply can run to completion without borrowing the
/// session manager.
pub type ReplyStream = Pin<Box<dyn Stream<Item = Result<String, ProviderError>> + Send + 'static>>;

/// An open dialogue context with the provider, bound to one instruction set
/// and turn history.
pub trait ChatSession: Send {
    /// Submit a user message and stream the reply.
    ///
    /// Fragments arrive in provider emission order and terminate with either
    /// normal completion or a single error. A session accepts one in-flight
    /// send at a time (`&mut self`).
    fn send_streaming(&mut self, text: &str) -> ReplyStream;
}

/// Factory for provider sessions.
///
/// Implementations live in `amity-infra` (e.g., `GeminiClient`).
pub trait ChatProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Open a new session bound to the given instruction and seed history.
    ///
    /// Fails with [`ProviderError::Unavailable`] when the underlying client
    /// never initialized (e.g., missing credential).
    fn open_session(&self, config: SessionConfig) -> Result<Box<dyn ChatSession>, ProviderError>;
}
