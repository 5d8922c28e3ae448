//! Channel trait — the abstraction over outbound messaging platforms.
//!
//! A Channel delivers a finished bulletin to a destination (a Telegram
//! channel, a chat id, ...). studycast only broadcasts; there is no inbound
//! message path.

use crate::error::ChannelError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// How the destination platform should interpret the bulletin text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Deliver the text verbatim.
    Plain,
    /// Deliver with lightweight rich-text markup (bold, emphasis).
    Markdown,
}

impl std::fmt::Display for ParseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// The outbound delivery trait.
///
/// Implementations handle platform-specific transport, authentication, and
/// error mapping. A failed send must surface as an error — the caller's
/// dedup state depends on knowing whether delivery was confirmed.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name (e.g. "telegram").
    fn name(&self) -> &str;

    /// Deliver one bulletin to a destination chat/channel.
    async fn send(
        &self,
        destination: &str,
        text: &str,
        mode: ParseMode,
    ) -> std::result::Result<(), ChannelError>;

    /// Health check — is the channel authenticated and operational?
    async fn health_check(&self) -> std::result::Result<bool, ChannelError> {
        Ok(true)
    }
}
