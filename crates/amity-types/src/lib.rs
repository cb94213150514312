//! Shared domain types for Amity.
//!
//! This crate contains the core domain types used across the Amity client:
//! companion profiles, the message log, friendship progression, provider
//! turn types, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
pub mod progression;
