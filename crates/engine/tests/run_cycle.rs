//! End-to-end run lifecycle against a temp registry and a recording
//! fake channel: dedup across runs, the nothing-new path, the daily
//! reset boundary, and delivery failure leaving no trace on disk.

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Mutex;
use studycast_core::{Bank, Channel, ChannelError, DedupKey, Error, ParseMode, TopicRecord};
use studycast_engine::registry::{Registry, RegistryStore};
use studycast_engine::run::{RunOutcome, run_once};

struct FakeChannel {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeChannel {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Channel for FakeChannel {
    fn name(&self) -> &str {
        "fake"
    }

    async fn send(
        &self,
        destination: &str,
        text: &str,
        _mode: ParseMode,
    ) -> Result<(), ChannelError> {
        if self.fail {
            return Err(ChannelError::DeliveryFailed {
                destination: destination.into(),
                reason: "simulated outage".into(),
            });
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn single_candidate_banks() -> Vec<Bank> {
    vec![Bank {
        label: "Class 11".into(),
        topics: vec![TopicRecord {
            class_level: "Class 11".into(),
            subject: "Biology".into(),
            chapter: "Photosynthesis".into(),
            concepts: vec!["Photosynthesis".into()],
            templates: Some(vec!["What is {{concept}}? Explain.".into()]),
            importance: "High".into(),
            tag: "Board Exam".into(),
        }],
    }]
}

#[tokio::test]
async fn first_run_posts_second_run_is_idle() {
    let dir = tempfile::tempdir().unwrap();
    let store = RegistryStore::new(dir.path().join("posted.json"));
    let channel = FakeChannel::new();
    let banks = single_candidate_banks();
    let today = day("2026-08-04");

    let outcome = run_once(
        &banks,
        &store,
        &channel,
        "@studychannel",
        ParseMode::Markdown,
        &mut StdRng::seed_from_u64(1),
        today,
    )
    .await
    .unwrap();
    assert_eq!(outcome, RunOutcome::Posted { new_count: 1 });
    assert_eq!(channel.sent_count(), 1);
    assert!(store.path().exists());

    let after_first = std::fs::read_to_string(store.path()).unwrap();

    // Same day, same single candidate: everything is already posted.
    let outcome = run_once(
        &banks,
        &store,
        &channel,
        "@studychannel",
        ParseMode::Markdown,
        &mut StdRng::seed_from_u64(2),
        today,
    )
    .await
    .unwrap();
    assert_eq!(outcome, RunOutcome::NothingNew);
    assert_eq!(channel.sent_count(), 1);

    // Nothing-new runs must not rewrite the registry at all.
    let after_second = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn delivery_failure_leaves_registry_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = RegistryStore::new(dir.path().join("posted.json"));
    let today = day("2026-08-04");

    // Seed a prior day's registry on disk so there is a before-state.
    let mut prior = Registry::new(day("2026-08-03"));
    prior.insert(DedupKey::new("Class 11", "Math", "Algebra", "Old question"));
    store.persist(&prior).unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    let channel = FakeChannel::failing();
    let result = run_once(
        &single_candidate_banks(),
        &store,
        &channel,
        "@studychannel",
        ParseMode::Markdown,
        &mut StdRng::seed_from_u64(1),
        today,
    )
    .await;

    assert!(matches!(result, Err(Error::Channel(_))));
    let after = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn date_change_makes_yesterdays_question_eligible_again() {
    let dir = tempfile::tempdir().unwrap();
    let store = RegistryStore::new(dir.path().join("posted.json"));
    let channel = FakeChannel::new();
    let banks = single_candidate_banks();

    let outcome = run_once(
        &banks,
        &store,
        &channel,
        "@studychannel",
        ParseMode::Markdown,
        &mut StdRng::seed_from_u64(1),
        day("2026-08-03"),
    )
    .await
    .unwrap();
    assert_eq!(outcome, RunOutcome::Posted { new_count: 1 });

    // Next calendar day: the registry resets, the same question goes out again.
    let outcome = run_once(
        &banks,
        &store,
        &channel,
        "@studychannel",
        ParseMode::Markdown,
        &mut StdRng::seed_from_u64(1),
        day("2026-08-04"),
    )
    .await
    .unwrap();
    assert_eq!(outcome, RunOutcome::Posted { new_count: 1 });
    assert_eq!(channel.sent_count(), 2);

    let reloaded = store.load(day("2026-08-04")).unwrap();
    assert_eq!(reloaded.date(), day("2026-08-04"));
    assert_eq!(reloaded.len(), 1);
}

#[tokio::test]
async fn failed_first_run_leaves_no_registry_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = RegistryStore::new(dir.path().join("posted.json"));
    let channel = FakeChannel::failing();

    let result = run_once(
        &single_candidate_banks(),
        &store,
        &channel,
        "@studychannel",
        ParseMode::Markdown,
        &mut StdRng::seed_from_u64(1),
        day("2026-08-04"),
    )
    .await;

    assert!(result.is_err());
    assert!(!store.path().exists());
}
