//! # studycast Core
//!
//! Domain types, traits, and error definitions for the studycast broadcast
//! bot. This crate has **zero framework dependencies** — it defines the domain
//! model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The delivery seam is defined as a trait here. Implementations live in their
//! respective crates. This enables:
//! - Swapping the outbound channel via configuration
//! - Easy testing with recording fake channels
//! - Clean dependency graph (all crates depend inward on core)

pub mod channel;
pub mod error;
pub mod key;
pub mod topic;

// Re-export key types at crate root for ergonomics
pub use channel::{Channel, ParseMode};
pub use error::{BankError, ChannelError, Error, RegistryError, Result, SynthError};
pub use key::DedupKey;
pub use topic::{Bank, SynthesizedQuestion, TopicRecord};
