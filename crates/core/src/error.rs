//! Error types for the studycast domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all studycast operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Topic bank errors ---
    #[error("Bank error: {0}")]
    Bank(#[from] BankError),

    // --- Dedup registry errors ---
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    // --- Delivery channel errors ---
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures loading a topic bank. Always fatal for the run: a bank that
/// cannot be read means the run's candidate pool is incomplete.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("Bank file not readable at {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Bank file corrupt at {path}: {reason}")]
    Corrupt { path: String, reason: String },
}

/// Failures around the posted-question registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Registry file corrupt at {path}: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("Registry read failed at {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Registry write failed at {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

/// Per-record synthesis failures. Recoverable: the assembler skips the
/// record and continues with the rest of the bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthError {
    #[error("Topic record has no concepts: {subject} / {chapter}")]
    NoConcepts { subject: String, chapter: String },

    #[error("Topic record has an empty template list: {subject} / {chapter}")]
    NoTemplates { subject: String, chapter: String },
}

/// Outbound delivery failures. Fatal for persistence: the registry must
/// never advance past a bulletin that was not confirmed delivered.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Channel not configured: {0}")]
    NotConfigured(String),

    #[error("Message delivery failed to {destination}: {reason}")]
    DeliveryFailed { destination: String, reason: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}
