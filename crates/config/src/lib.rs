//! Configuration loading, validation, and management for studycast.
//!
//! Loads configuration from `~/.studycast/config.toml` with environment
//! variable overrides. Validates all settings at startup. The bot token and
//! destination channel are required before a run may touch any state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.studycast/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Telegram bot token (from @BotFather). Required at run time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,

    /// Destination chat id or @channel handle. Required at run time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Directory holding the topic bank files and the posted-question registry.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Ordered bank file names, processed in this order every run.
    #[serde(default = "default_banks")]
    pub banks: Vec<String>,

    /// Registry file name inside `data_dir`.
    #[serde(default = "default_registry_file")]
    pub registry_file: String,

    /// Fixed UTC offset in minutes used to compute the run date. The daily
    /// dedup reset boundary follows this zone, not host-local time.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    /// Bulletin text formatting: "plain" or "markdown".
    #[serde(default = "default_parse_mode")]
    pub parse_mode: String,
}

fn default_data_dir() -> PathBuf {
    AppConfig::config_dir().join("data")
}

fn default_banks() -> Vec<String> {
    vec![
        "data_class11.json".into(),
        "data_class12.json".into(),
        "data_college_year1.json".into(),
        "data_college_year2.json".into(),
        "data_college_year3.json".into(),
    ]
}

fn default_registry_file() -> String {
    "posted.json".into()
}

fn default_utc_offset_minutes() -> i32 {
    360 // UTC+06:00
}

fn default_parse_mode() -> String {
    "markdown".into()
}

fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bot_token", &redact(&self.bot_token))
            .field("channel", &self.channel)
            .field("data_dir", &self.data_dir)
            .field("banks", &self.banks)
            .field("registry_file", &self.registry_file)
            .field("utc_offset_minutes", &self.utc_offset_minutes)
            .field("parse_mode", &self.parse_mode)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.studycast/config.toml).
    ///
    /// Also checks environment variables:
    /// - `STUDYCAST_BOT_TOKEN` (highest priority), then `TELEGRAM_BOT_TOKEN`
    /// - `STUDYCAST_CHANNEL`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        // Environment variable overrides (highest priority)
        if let Ok(token) = std::env::var("STUDYCAST_BOT_TOKEN") {
            config.bot_token = Some(token);
        } else if config.bot_token.is_none() {
            config.bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok();
        }

        if let Ok(channel) = std::env::var("STUDYCAST_CHANNEL") {
            config.channel = Some(channel);
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".studycast")
    }

    /// Absolute path of the posted-question registry file.
    pub fn registry_path(&self) -> PathBuf {
        self.data_dir.join(&self.registry_file)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        // ±18h covers every real-world UTC offset
        if self.utc_offset_minutes.abs() > 18 * 60 {
            return Err(ConfigError::ValidationError(
                "utc_offset_minutes must be within ±1080".into(),
            ));
        }

        if !matches!(self.parse_mode.as_str(), "plain" | "markdown") {
            return Err(ConfigError::ValidationError(format!(
                "parse_mode must be \"plain\" or \"markdown\", got \"{}\"",
                self.parse_mode
            )));
        }

        if self.banks.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one bank file must be configured".into(),
            ));
        }

        Ok(())
    }

    /// Fail fast when the required run-time settings are missing.
    ///
    /// Called before a run touches any state: a misconfigured bot must not
    /// load or mutate the registry.
    pub fn ensure_ready(&self) -> Result<(&str, &str), ConfigError> {
        let token = self.bot_token.as_deref().ok_or_else(|| {
            ConfigError::MissingSetting("bot_token (or STUDYCAST_BOT_TOKEN)".into())
        })?;
        let channel = self
            .channel
            .as_deref()
            .ok_or_else(|| ConfigError::MissingSetting("channel (or STUDYCAST_CHANNEL)".into()))?;
        Ok((token, channel))
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            channel: None,
            data_dir: default_data_dir(),
            banks: default_banks(),
            registry_file: default_registry_file(),
            utc_offset_minutes: default_utc_offset_minutes(),
            parse_mode: default_parse_mode(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("Required setting missing: {0}")]
    MissingSetting(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.banks.len(), 5);
        assert_eq!(config.utc_offset_minutes, 360);
        assert_eq!(config.parse_mode, "markdown");
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.banks, config.banks);
        assert_eq!(parsed.registry_file, config.registry_file);
    }

    #[test]
    fn invalid_offset_rejected() {
        let config = AppConfig {
            utc_offset_minutes: 2000,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_parse_mode_rejected() {
        let config = AppConfig {
            parse_mode: "html".into(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_bank_list_rejected() {
        let config = AppConfig {
            banks: vec![],
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = AppConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_ok());
        assert_eq!(result.unwrap().registry_file, "posted.json");
    }

    #[test]
    fn corrupt_config_file_is_an_error() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "banks = \"not an array\"").unwrap();
        let result = AppConfig::load_from(tmp.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn ensure_ready_requires_token_and_channel() {
        let config = AppConfig::default();
        assert!(matches!(
            config.ensure_ready(),
            Err(ConfigError::MissingSetting(_))
        ));

        let config = AppConfig {
            bot_token: Some("123:abc".into()),
            channel: Some("@studychannel".into()),
            ..AppConfig::default()
        };
        let (token, channel) = config.ensure_ready().unwrap();
        assert_eq!(token, "123:abc");
        assert_eq!(channel, "@studychannel");
    }

    #[test]
    fn debug_redacts_token() {
        let config = AppConfig {
            bot_token: Some("123:secret".into()),
            ..AppConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("data_class11.json"));
        assert!(toml_str.contains("posted.json"));
    }
}
