//! Conversation logic for Amity.
//!
//! This crate holds the personality/progression catalog, the provider port
//! (the trait the infrastructure layer implements), the session manager, and
//! the conversation controller. It depends only on `amity-types` -- never on
//! `amity-infra` or any HTTP/IO crate.

pub mod catalog;
pub mod chat;
pub mod llm;
