//! Dedup key — the composite identity of a broadcast question.
//!
//! A key is `(scope, question text)` where scope identifies where the
//! question came from: bank label + subject + chapter. Two runs that
//! synthesize the same question text for the same scope must produce the
//! same key, regardless of any other randomness.

use serde::{Deserialize, Serialize};

/// Opaque, deterministic identity for one (scope, question) pair.
///
/// Components are escaped before joining so a field value containing the
/// separator cannot collide with a different pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DedupKey(String);

impl DedupKey {
    /// Build a key from the scope components and the synthesized text.
    pub fn new(bank_label: &str, subject: &str, chapter: &str, question: &str) -> Self {
        let parts = [bank_label, subject, chapter, question];
        let encoded: Vec<String> = parts.iter().map(|p| escape(p)).collect();
        Self(encoded.join("|"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for DedupKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for DedupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Escape the join separator and the escape character itself.
fn escape(component: &str) -> String {
    component.replace('\\', "\\\\").replace('|', "\\|")
}
