use std::sync::Arc;
use std::time::Duration;

use tanka_cache::{LocalCache, MemoryStore};
use tanka_config::validation::ValidationPolicy;
use tanka_remote::{MemoryRemoteStore, RemoteError, RemoteStore, Subscription};
use tanka_types::{PhraseClass, PhraseDocument, PhraseSubmission};

use crate::bundle::PhraseBundle;
use crate::clock::ManualClock;
use crate::error::{InvalidPhrase, Rejection};
use crate::state::TankaState;
use crate::submission::{LOCAL_ONLY_MESSAGE, SHARED_MESSAGE, Submitter};
use crate::validate::Validator;

const START: u64 = 1_700_000_000_000;

struct Harness {
    state: Arc<TankaState>,
    cache: Arc<LocalCache>,
    remote: Arc<MemoryRemoteStore>,
    clock: Arc<ManualClock>,
    submitter: Submitter,
}

fn harness() -> Harness {
    let bundle = PhraseBundle {
        phrases5: vec!["ひさかたの".to_string()],
        phrases7: vec!["ひかりのどけき".to_string()],
    };
    let state = Arc::new(TankaState::from_bundle(&bundle));
    let cache = Arc::new(LocalCache::new(Arc::new(MemoryStore::new())));
    let remote = Arc::new(MemoryRemoteStore::new());
    let clock = Arc::new(ManualClock::new(START));

    let submitter = Submitter::new(
        state.clone(),
        Validator::new(ValidationPolicy::Mora, None),
        cache.clone(),
        Some(remote.clone()),
        clock.clone(),
        Duration::from_secs(30),
    );

    Harness {
        state,
        cache,
        remote,
        clock,
        submitter,
    }
}

fn submission(class: PhraseClass, text: &str, reading: &str) -> PhraseSubmission {
    PhraseSubmission {
        class,
        text: text.to_string(),
        reading: Some(reading.to_string()),
    }
}

#[tokio::test]
async fn test_accepted_phrase_lands_everywhere() {
    let h = harness();

    let accepted = h
        .submitter
        .submit(submission(PhraseClass::Five, " 古池や ", "ふるいけや"))
        .await
        .unwrap();

    assert_eq!(accepted.text, "古池や");
    assert_eq!(accepted.reading.as_deref(), Some("ふるいけや"));
    assert_eq!(accepted.created_at, START);
    assert!(accepted.cached && accepted.shared);
    assert_eq!(accepted.message(), SHARED_MESSAGE);

    assert!(h.state.contains(PhraseClass::Five, "古池や").await);
    assert_eq!(h.state.last_accepted_at().await, Some(START));
    assert_eq!(
        h.cache.load(PhraseClass::Five).await.unwrap(),
        vec!["古池や"]
    );
    assert_eq!(
        h.remote.documents().await,
        vec![PhraseDocument {
            class: PhraseClass::Five,
            text: "古池や".to_string(),
            reading: Some("ふるいけや".to_string()),
            created_at: START,
        }]
    );
}

#[tokio::test]
async fn test_width_variants_are_kept_as_typed() {
    let h = harness();

    let accepted = h
        .submitter
        .submit(submission(PhraseClass::Five, " ﾌﾙｲｹﾔ\n", "ふるいけや"))
        .await
        .unwrap();
    assert_eq!(accepted.text, "ﾌﾙｲｹﾔ");
    assert!(h.state.contains(PhraseClass::Five, "ﾌﾙｲｹﾔ").await);
    assert!(!h.state.contains(PhraseClass::Five, "フルイケヤ").await);

    h.clock.advance(Duration::from_secs(30));

    // Full-width spelling is a different phrase
    let accepted = h
        .submitter
        .submit(submission(PhraseClass::Five, "フルイケヤ", "ふるいけや"))
        .await
        .unwrap();
    assert_eq!(accepted.text, "フルイケヤ");
    assert_eq!(
        h.cache.load(PhraseClass::Five).await.unwrap(),
        vec!["ﾌﾙｲｹﾔ", "フルイケヤ"]
    );
    assert_eq!(h.remote.documents().await[0].text, "ﾌﾙｲｹﾔ");
}

#[tokio::test]
async fn test_invalid_reading_changes_nothing() {
    let h = harness();

    let err = h
        .submitter
        .submit(submission(PhraseClass::Five, "古池や", "フルイケヤ"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Rejection::Invalid {
            policy: ValidationPolicy::Mora,
            reason: InvalidPhrase::ReadingNotHiragana(_)
        }
    ));
    assert_eq!(h.state.counts().await, (1, 1));
    assert_eq!(h.state.last_accepted_at().await, None);
    assert!(h.cache.load(PhraseClass::Five).await.unwrap().is_empty());
    assert!(h.remote.documents().await.is_empty());
}

#[tokio::test]
async fn test_duplicate_is_rejected_regardless_of_reading() {
    let h = harness();

    h.submitter
        .submit(submission(PhraseClass::Seven, "蛙飛び込む", "かわずとびこむ"))
        .await
        .unwrap();
    h.clock.advance(Duration::from_secs(60));

    let err = h
        .submitter
        .submit(submission(PhraseClass::Seven, "蛙飛び込む", "かわずがとびこむ"))
        .await
        .unwrap_err();
    assert_eq!(err, Rejection::Duplicate(PhraseClass::Seven));

    // Bundled phrases count too
    let err = h
        .submitter
        .submit(submission(PhraseClass::Five, "ひさかたの", "ひさかたの"))
        .await
        .unwrap_err();
    assert_eq!(err, Rejection::Duplicate(PhraseClass::Five));
}

#[tokio::test]
async fn test_duplicate_wins_over_rate_limit() {
    let h = harness();

    h.submitter
        .submit(submission(PhraseClass::Five, "古池や", "ふるいけや"))
        .await
        .unwrap();

    let err = h
        .submitter
        .submit(submission(PhraseClass::Five, "古池や", "ふるいけや"))
        .await
        .unwrap_err();
    assert_eq!(err, Rejection::Duplicate(PhraseClass::Five));
}

#[tokio::test]
async fn test_rate_limit_spans_classes_and_expires() {
    let h = harness();

    h.submitter
        .submit(submission(PhraseClass::Five, "古池や", "ふるいけや"))
        .await
        .unwrap();

    h.clock.advance(Duration::from_secs(29));
    let err = h
        .submitter
        .submit(submission(PhraseClass::Seven, "蛙飛び込む", "かわずとびこむ"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Rejection::RateLimited {
            limit_seconds: 30,
            retry_after_ms: 1000
        }
    );
    assert_eq!(err.to_string(), "連続投稿は30秒あけてください。");
    assert!(!h.state.contains(PhraseClass::Seven, "蛙飛び込む").await);

    h.clock.advance(Duration::from_secs(1));
    let accepted = h
        .submitter
        .submit(submission(PhraseClass::Seven, "蛙飛び込む", "かわずとびこむ"))
        .await
        .unwrap();
    assert_eq!(accepted.created_at, START + 30_000);
}

#[tokio::test]
async fn test_rejected_submission_does_not_reset_the_window() {
    let h = harness();

    h.submitter
        .submit(submission(PhraseClass::Five, "古池や", "ふるいけや"))
        .await
        .unwrap();
    h.clock.advance(Duration::from_secs(20));
    assert!(
        h.submitter
            .submit(submission(PhraseClass::Five, "夏草や", "なつくさや"))
            .await
            .is_err()
    );

    h.clock.advance(Duration::from_secs(10));
    assert!(
        h.submitter
            .submit(submission(PhraseClass::Five, "夏草や", "なつくさや"))
            .await
            .is_ok()
    );
}

struct FailingRemote;

#[async_trait::async_trait]
impl RemoteStore for FailingRemote {
    async fn put(&self, _doc: &PhraseDocument) -> Result<(), RemoteError> {
        Err(RemoteError::ApiError("HTTP 503".to_string()))
    }

    async fn subscribe(&self) -> Result<Subscription, RemoteError> {
        Err(RemoteError::Closed)
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[tokio::test]
async fn test_remote_failure_keeps_the_phrase() {
    let state = Arc::new(TankaState::new());
    let cache = Arc::new(LocalCache::new(Arc::new(MemoryStore::new())));
    let submitter = Submitter::new(
        state.clone(),
        Validator::new(ValidationPolicy::Mora, None),
        cache.clone(),
        Some(Arc::new(FailingRemote)),
        Arc::new(ManualClock::new(START)),
        Duration::from_secs(30),
    );

    let accepted = submitter
        .submit(submission(PhraseClass::Five, "古池や", "ふるいけや"))
        .await
        .unwrap();

    assert!(accepted.cached);
    assert!(!accepted.shared);
    assert_eq!(accepted.message(), LOCAL_ONLY_MESSAGE);
    assert!(state.contains(PhraseClass::Five, "古池や").await);
}

#[tokio::test]
async fn test_concurrent_submissions_admit_one() {
    let h = harness();
    let submitter = Arc::new(h.submitter);

    let mut handles = Vec::new();
    for (text, reading) in [
        ("古池や", "ふるいけや"),
        ("夏草や", "なつくさや"),
        ("閑さや", "しずかさや"),
    ] {
        let submitter = submitter.clone();
        handles.push(tokio::spawn(async move {
            submitter
                .submit(submission(PhraseClass::Five, text, reading))
                .await
        }));
    }

    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(h.state.counts().await, (2, 1));
}
