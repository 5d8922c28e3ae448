//! Bulletin assembly — iterate banks, keep only unseen questions, format.
//!
//! Seen keys are skipped silently: repetition avoidance is expected
//! behavior, not a failure. A run that yields nothing new returns the
//! caller's registry untouched so no reset date or partial key ever gets
//! persisted for a bulletin that was never sent.

use crate::registry::Registry;
use crate::synthesizer::synthesize;
use rand::Rng;
use studycast_core::{Bank, DedupKey, TopicRecord};
use tracing::{debug, warn};

const TITLE: &str = "📘 *Daily Exam Suggestion*\n━━━━━━━━━━━━━━━━━━\n🎯 *Exam Important Questions*\n\n";
const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━\n";

/// The outcome of one assembly pass.
pub struct Assembly {
    /// The formatted bulletin, or `None` when every candidate was already
    /// posted (callers must then skip delivery and persistence entirely).
    pub bulletin: Option<String>,

    /// The registry to persist after confirmed delivery. Equal to the input
    /// registry when `bulletin` is `None`.
    pub registry: Registry,

    /// Number of topic blocks emitted.
    pub new_count: usize,
}

/// Walk every bank in caller order, topics in stored order, and accumulate
/// one block per question not yet in the registry.
pub fn assemble<R: Rng>(
    banks: &[Bank],
    registry: &Registry,
    rng: &mut R,
    channel_handle: &str,
) -> Assembly {
    let mut working = registry.clone();
    let mut body = String::new();
    let mut new_count = 0usize;

    for bank in banks {
        let mut bank_has_new = false;
        for record in &bank.topics {
            let question = match synthesize(record, rng) {
                Ok(q) => q,
                Err(e) => {
                    warn!(bank = %bank.label, error = %e, "Skipping malformed topic record");
                    continue;
                }
            };

            let key = DedupKey::new(&bank.label, &record.subject, &record.chapter, &question.text);
            if working.contains(&key) {
                debug!(key = %key, "Already posted, skipping");
                continue;
            }
            working.insert(key);

            if !bank_has_new {
                body.push_str(&format!("🏫 *{}*\n\n", bank.label));
                bank_has_new = true;
            }
            body.push_str(&topic_block(record, &question.text));
            new_count += 1;
        }
    }

    if new_count == 0 {
        debug!("No new questions this run");
        return Assembly {
            bulletin: None,
            registry: registry.clone(),
            new_count: 0,
        };
    }

    let footer = format!(
        "📌 Follow & Share: {channel_handle}\n#ExamSuggestion #StudyNotes"
    );
    Assembly {
        bulletin: Some(format!("{TITLE}{body}{footer}")),
        registry: working,
        new_count,
    }
}

fn topic_block(record: &TopicRecord, question: &str) -> String {
    format!(
        "📖 *Subject:* {subject}\n\
         🧩 *Chapter:* {chapter}\n\n\
         ❓ *Question:*\n{question}\n\n\
         🟢 *Importance:* {importance}\n\
         🏷️ *Type:* {tag}\n\n{DIVIDER}",
        subject = record.subject,
        chapter = record.chapter,
        question = question,
        importance = record.importance,
        tag = record.tag,
    )
}
