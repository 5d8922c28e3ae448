//! Topic bank domain types.
//!
//! A `Bank` is one curated collection of topic records for a class or
//! education level. Records are immutable once loaded; the loader owns
//! construction, everything downstream reads them.

use serde::{Deserialize, Serialize};

/// One subject/chapter unit with its concepts and phrasing templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRecord {
    /// Class or education level label (e.g. "Class 11")
    #[serde(rename = "class")]
    pub class_level: String,

    /// Subject name (e.g. "Biology", "History")
    pub subject: String,

    /// Chapter title within the subject
    pub chapter: String,

    /// Candidate concepts for question synthesis. Must be non-empty for the
    /// record to yield a question.
    pub concepts: Vec<String>,

    /// Explicit phrasing templates with a `{{concept}}` placeholder.
    /// `None` routes the record through the built-in language-keyed pools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<String>>,

    /// Importance marker shown in the bulletin (e.g. "High")
    pub importance: String,

    /// Exam-type tag shown in the bulletin (e.g. "Board Exam")
    pub tag: String,
}

/// A named, ordered collection of topic records for one class/level.
#[derive(Debug, Clone)]
pub struct Bank {
    /// Human-readable level label, used as the bulletin group header and as
    /// part of every dedup key scope.
    pub label: String,

    /// Records in stored order. Iteration order is part of the contract:
    /// assembly is deterministic given fixed input order.
    pub topics: Vec<TopicRecord>,
}

/// A concrete question produced from one concept and one template.
///
/// Transient: exists only during bulletin assembly, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedQuestion {
    pub text: String,
}
