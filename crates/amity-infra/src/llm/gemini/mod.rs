//! Gemini provider: HTTP client, wire types, and SSE streaming.

mod client;
mod streaming;
mod types;

pub use client::GeminiClient;
