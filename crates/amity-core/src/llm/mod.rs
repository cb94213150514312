//! Provider port for the conversation core.

pub mod provider;

pub use provider::{ChatProvider, ChatSession, ReplyStream};
