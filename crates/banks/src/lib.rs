//! Topic bank loading for studycast.
//!
//! A bank file is a JSON array of topic records, one file per class/education
//! level. Loading is a pure read: records come back in stored order and are
//! never mutated downstream. An unreadable or corrupt bank aborts the run —
//! a partial candidate pool would silently skew selection.

use std::path::Path;
use studycast_core::{Bank, BankError, TopicRecord};
use tracing::debug;

/// Load one bank file, preserving record order.
///
/// The bank label (used for bulletin group headers and dedup key scopes)
/// is taken from the first record's class level, falling back to the file
/// stem for an empty bank.
pub fn load_bank(path: &Path) -> Result<Bank, BankError> {
    let content = std::fs::read_to_string(path).map_err(|e| BankError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let topics: Vec<TopicRecord> =
        serde_json::from_str(&content).map_err(|e| BankError::Corrupt {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let label = topics
        .first()
        .map(|t| t.class_level.clone())
        .unwrap_or_else(|| file_stem(path));

    debug!(path = %path.display(), label = %label, count = topics.len(), "Bank loaded");
    Ok(Bank { label, topics })
}

/// Load every configured bank, in the configured order.
pub fn load_all(data_dir: &Path, files: &[String]) -> Result<Vec<Bank>, BankError> {
    files
        .iter()
        .map(|name| load_bank(&data_dir.join(name)))
        .collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
