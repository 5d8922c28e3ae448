//! Telegram channel adapter.
//!
//! Delivers bulletins through the Telegram Bot API (`sendMessage`) over
//! HTTPS. A non-`ok` API envelope or transport failure surfaces as a
//! `ChannelError` — the caller's dedup registry is only committed after a
//! confirmed send.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use studycast_core::channel::{Channel, ParseMode};
use studycast_core::error::ChannelError;
use tracing::{debug, info};

/// Telegram channel configuration.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token from @BotFather.
    pub bot_token: String,
    /// API base URL. Overridable for tests; defaults to the public API.
    pub api_base: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            api_base: "https://api.telegram.org".into(),
            timeout_secs: 30,
        }
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Telegram channel adapter.
pub struct TelegramChannel {
    config: TelegramConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
}

/// Telegram's standard response envelope.
#[derive(Deserialize)]
struct ApiEnvelope {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

fn wire_parse_mode(mode: ParseMode) -> Option<&'static str> {
    match mode {
        ParseMode::Plain => None,
        ParseMode::Markdown => Some("Markdown"),
    }
}

impl TelegramChannel {
    pub fn new(config: TelegramConfig) -> Result<Self, ChannelError> {
        if config.bot_token.is_empty() {
            return Err(ChannelError::NotConfigured("empty bot token".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChannelError::NotConfigured(format!("HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.config.api_base.trim_end_matches('/'),
            self.config.bot_token
        )
    }

    async fn check_envelope(
        response: reqwest::Response,
        destination: &str,
    ) -> Result<(), ChannelError> {
        let status = response.status();
        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| ChannelError::InvalidResponse(format!("HTTP {status}: {e}")))?;

        if !envelope.ok {
            return Err(ChannelError::DeliveryFailed {
                destination: destination.into(),
                reason: envelope
                    .description
                    .unwrap_or_else(|| format!("HTTP {status}")),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(
        &self,
        destination: &str,
        text: &str,
        mode: ParseMode,
    ) -> Result<(), ChannelError> {
        debug!(
            destination = %destination,
            content_len = text.len(),
            mode = %mode,
            "Telegram sendMessage"
        );

        let request = SendMessageRequest {
            chat_id: destination,
            text,
            parse_mode: wire_parse_mode(mode),
        };

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ChannelError::DeliveryFailed {
                destination: destination.into(),
                reason: format!("network: {e}"),
            })?;

        Self::check_envelope(response, destination).await?;
        info!(destination = %destination, "Bulletin delivered");
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, ChannelError> {
        let response = self
            .client
            .get(self.method_url("getMe"))
            .send()
            .await
            .map_err(|e| ChannelError::DeliveryFailed {
                destination: "getMe".into(),
                reason: format!("network: {e}"),
            })?;

        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| ChannelError::InvalidResponse(e.to_string()))?;
        Ok(envelope.ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TelegramConfig {
        TelegramConfig::new("123:test-token")
    }

    #[test]
    fn channel_name() {
        let ch = TelegramChannel::new(test_config()).unwrap();
        assert_eq!(ch.name(), "telegram");
    }

    #[test]
    fn empty_token_is_rejected() {
        let result = TelegramChannel::new(TelegramConfig::new(""));
        assert!(matches!(result, Err(ChannelError::NotConfigured(_))));
    }

    #[test]
    fn config_debug_redacts_token() {
        let debug = format!("{:?}", test_config());
        assert!(!debug.contains("test-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn method_url_embeds_token_and_method() {
        let ch = TelegramChannel::new(test_config()).unwrap();
        assert_eq!(
            ch.method_url("sendMessage"),
            "https://api.telegram.org/bot123:test-token/sendMessage"
        );
    }

    #[test]
    fn method_url_tolerates_trailing_slash_in_base() {
        let mut config = test_config();
        config.api_base = "http://localhost:8081/".into();
        let ch = TelegramChannel::new(config).unwrap();
        assert_eq!(
            ch.method_url("getMe"),
            "http://localhost:8081/bot123:test-token/getMe"
        );
    }

    #[test]
    fn plain_mode_omits_parse_mode_field() {
        let request = SendMessageRequest {
            chat_id: "@c",
            text: "hello",
            parse_mode: wire_parse_mode(ParseMode::Plain),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("parse_mode").is_none());
    }

    #[test]
    fn markdown_mode_sets_parse_mode_field() {
        let request = SendMessageRequest {
            chat_id: "@c",
            text: "hello",
            parse_mode: wire_parse_mode(ParseMode::Markdown),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["parse_mode"], "Markdown");
        assert_eq!(json["chat_id"], "@c");
    }

    #[test]
    fn envelope_parses_failure_description() {
        let envelope: ApiEnvelope =
            serde_json::from_str(r#"{"ok":false,"description":"Forbidden: bot is not a member"}"#)
                .unwrap();
        assert!(!envelope.ok);
        assert_eq!(
            envelope.description.as_deref(),
            Some("Forbidden: bot is not a member")
        );
    }
}
