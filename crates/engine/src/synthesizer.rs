//! Question synthesis — one concept plus one phrasing template.
//!
//! A record may carry its own template list; records without one fall
//! through to the built-in pools, keyed by subject language. The subject
//! table is static configuration: membership is looked up, never inferred
//! from content. All randomness comes from the injected `rng`, so a seeded
//! run reproduces exactly.

use rand::Rng;
use studycast_core::{SynthError, SynthesizedQuestion, TopicRecord};

/// Subjects answered in the secondary language (Bengali-medium papers).
/// Everything else uses the default-language pool.
const SECONDARY_LANGUAGE_SUBJECTS: &[&str] =
    &["Bangla", "History", "Islamic History", "Civics", "Logic"];

/// Default-language phrasing pool. Each template contains `{{concept}}`
/// and may reference `{{chapter}}`.
const DEFAULT_TEMPLATES: &[&str] = &[
    "What is {{concept}}? Explain.",
    "Describe {{concept}} in detail.",
    "Write short notes on {{concept}}.",
    "Explain the importance of {{concept}} in {{chapter}}.",
    "Discuss {{concept}} with reference to {{chapter}}.",
];

/// Secondary-language phrasing pool.
const SECONDARY_TEMPLATES: &[&str] = &[
    "{{concept}} কী? ব্যাখ্যা করো।",
    "{{concept}} সম্পর্কে বিস্তারিত লেখো।",
    "{{concept}} এর গুরুত্ব আলোচনা করো।",
    "{{chapter}} অধ্যায়ের আলোকে {{concept}} ব্যাখ্যা করো।",
    "{{concept}} সম্পর্কে সংক্ষিপ্ত টীকা লেখো।",
];

fn uses_secondary_language(subject: &str) -> bool {
    SECONDARY_LANGUAGE_SUBJECTS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(subject))
}

/// Produce a concrete question from a topic record.
///
/// Draws one concept uniformly at random, picks a template (the record's own
/// list when present, otherwise the pool matching the subject's language),
/// and substitutes `{{concept}}` and `{{chapter}}`.
pub fn synthesize<R: Rng>(
    record: &TopicRecord,
    rng: &mut R,
) -> Result<SynthesizedQuestion, SynthError> {
    if record.concepts.is_empty() {
        return Err(SynthError::NoConcepts {
            subject: record.subject.clone(),
            chapter: record.chapter.clone(),
        });
    }
    let concept = &record.concepts[rng.gen_range(0..record.concepts.len())];

    let templates: &[String];
    let pool: Vec<String>;
    match &record.templates {
        Some(own) if own.is_empty() => {
            return Err(SynthError::NoTemplates {
                subject: record.subject.clone(),
                chapter: record.chapter.clone(),
            });
        }
        Some(own) => templates = own,
        None => {
            let source = if uses_secondary_language(&record.subject) {
                SECONDARY_TEMPLATES
            } else {
                DEFAULT_TEMPLATES
            };
            pool = source.iter().map(|t| t.to_string()).collect();
            templates = &pool;
        }
    }

    let template = &templates[rng.gen_range(0..templates.len())];
    let text = template
        .replace("{{concept}}", concept)
        .replace("{{chapter}}", &record.chapter);

    Ok(SynthesizedQuestion { text })
}
