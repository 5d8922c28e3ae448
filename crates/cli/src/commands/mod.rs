//! CLI command implementations.

pub mod onboard;
pub mod post;
pub mod preview;
pub mod status;

use chrono::{FixedOffset, NaiveDate, Utc};
use studycast_config::AppConfig;
use studycast_core::ParseMode;

/// Today's date in the configured fixed UTC offset. The daily dedup reset
/// boundary follows this zone, not host-local time.
pub(crate) fn run_date(config: &AppConfig) -> NaiveDate {
    let offset = FixedOffset::east_opt(config.utc_offset_minutes * 60)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
    Utc::now().with_timezone(&offset).date_naive()
}

/// Map the config's parse-mode string to the channel enum.
/// `validate()` has already restricted the value set.
pub(crate) fn parse_mode(config: &AppConfig) -> ParseMode {
    match config.parse_mode.as_str() {
        "plain" => ParseMode::Plain,
        _ => ParseMode::Markdown,
    }
}
