use alliance_core::domain::{Partner, RankLabel, RankLabelChange};
use alliance_core::error::SyncError;
use alliance_core::memory::MemoryPersistence;
use alliance_core::notice::{NoticeKind, NoticeLog};
use alliance_core::sync::{Persistence, SyncController, SyncState};

#[tokio::test]
async fn test_save_failure_preserves_draft() {
    let store = MemoryPersistence::new(vec![Partner {
        id: 1,
        ..Partner::with_rank("gold")
    }]);
    let log = NoticeLog::new();
    let mut sync = SyncController::new(store.clone(), log.clone());
    sync.load().await.unwrap();

    sync.append(Partner::with_rank("silver"));
    let confirmed_before = sync.list().confirmed().to_vec();
    let draft_before = sync.list().current().to_vec();

    store.fail_next_save(SyncError::Server {
        status: Some(500),
        message: "Failed to save settings.".to_string(),
    });
    let err = sync.save().await.unwrap_err();
    assert!(matches!(err, SyncError::Server { .. }));

    assert_eq!(sync.list().confirmed(), confirmed_before.as_slice());
    assert_eq!(sync.list().draft(), Some(draft_before.as_slice()));
    assert_eq!(log.len(), 1);
    assert_eq!(log.last().map(|n| n.kind), Some(NoticeKind::Error));
    assert!(sync.can_save());

    // retry goes through with the same draft
    sync.save().await.unwrap();
    assert_eq!(sync.list().confirmed(), draft_before.as_slice());
    assert_eq!(sync.state(), SyncState::Clean);
    assert_eq!(store.save_calls(), 2);
    assert_eq!(log.len(), 2);
}

#[tokio::test]
async fn test_successful_save_commits_submitted_draft() {
    let store = MemoryPersistence::new(vec![RankLabel {
        id: 10,
        ..RankLabel::titled("Gold")
    }]);
    let log = NoticeLog::new();
    let mut sync = SyncController::new(store.clone(), log.clone());
    sync.load().await.unwrap();

    sync.append(RankLabel::blank());
    sync.update(1, RankLabelChange::Title("Silver".to_string()));
    let submitted = sync.list().current().to_vec();

    sync.save().await.unwrap();
    assert_eq!(sync.list().confirmed(), submitted.as_slice());
    assert!(sync.list().draft().is_none());
    assert_eq!(sync.list().original_order(), &[0, 1]);
    assert_eq!(log.last().map(|n| n.message), Some("Rank labels saved successfully.".to_string()));

    // the store handed out an id; a reload picks it up
    let reloaded = sync.load().await.unwrap();
    assert_eq!(reloaded[1].id, 11);
    assert_eq!(reloaded[1].slug, "silver");
}

#[tokio::test]
async fn test_every_rejected_save_notifies_once() {
    let store = MemoryPersistence::new(Vec::<RankLabel>::new());
    let log = NoticeLog::new();
    let mut sync = SyncController::new(store.clone(), log.clone());
    sync.load().await.unwrap();

    sync.append(RankLabel::blank());
    assert!(sync.save().await.is_err());
    assert_eq!(log.len(), 1);

    sync.update(0, RankLabelChange::Title("Gold".to_string()));
    store.fail_next_save(SyncError::from_status(401, None));
    assert!(sync.save().await.is_err());
    assert_eq!(log.len(), 2);

    store.fail_next_save(SyncError::Network("connection refused".to_string()));
    assert!(sync.save().await.is_err());
    assert_eq!(log.len(), 3);

    let titles: Vec<String> = log.notices().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["Validation Error", "Authentication Required", "Connection Error"]);
    assert_eq!(store.save_calls(), 2);
}

#[tokio::test]
async fn test_refresh_after_save_stays_silent_when_reload_fails() {
    let store = MemoryPersistence::new(vec![RankLabel {
        id: 10,
        ..RankLabel::titled("Gold")
    }]);
    let log = NoticeLog::new();
    let mut sync = SyncController::new(store.clone(), log.clone());
    sync.load().await.unwrap();
    sync.append(RankLabel::titled("Silver"));

    let ticket = sync.begin_save().unwrap().unwrap();
    assert!(ticket.has_new_records());
    let outcome = store.save(ticket.records()).await;
    sync.finish_save(ticket, outcome).unwrap();

    store.fail_next_load(SyncError::Network("blip".to_string()));
    let refreshed = store.load().await;
    assert!(!sync.finish_refresh(refreshed));

    let titles: Vec<String> = log.notices().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["Saved"]);
    assert_eq!(sync.state(), SyncState::Clean);
    assert_eq!(sync.last_failure(), None);
    assert_eq!(sync.list().confirmed()[1].id, 0);

    // a later refresh still picks up the assigned id
    let refreshed = store.load().await;
    assert!(sync.finish_refresh(refreshed));
    assert_eq!(sync.list().confirmed()[1].id, 11);
    assert_eq!(log.len(), 1);
}
