//! Outbound delivery channels for studycast.
//!
//! Each channel implements the `Channel` trait from `studycast-core` and
//! delivers a finished bulletin to its platform.
//!
//! Available channels:
//! - **Telegram** — Telegram Bot API over HTTPS (`sendMessage`)

pub mod telegram;

pub use telegram::{TelegramChannel, TelegramConfig};
