//! Static personality and friendship-level catalog.
//!
//! Pure lookup tables with no mutation and no side effects, safe for
//! unsynchronized concurrent reads. Persona lookups by enum are exhaustive
//! matches; the string boundary (setup input) goes through [`persona::lookup`].

pub mod levels;
pub mod persona;

pub use levels::{FriendshipLevel, level_descriptor, max_level};
pub use persona::{PersonaDescriptor, descriptor, lookup};
