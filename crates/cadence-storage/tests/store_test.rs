//! NotificationStore behaviour, run against both implementations.

use chrono::{DateTime, Duration, TimeZone, Utc};

use cadence_core::errors::{CadenceError, StorageError};
use cadence_core::models::{
    InsertOutcome, NewNotification, NotificationCandidate, NotificationKind,
    NotificationMetadata, Priority,
};
use cadence_core::traits::NotificationStore;
use cadence_storage::{InMemoryNotificationStore, SqliteNotificationStore};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
}

fn candidate(user: &str, rule: &str, cooldown_days: u32) -> NotificationCandidate {
    NotificationCandidate {
        user_id: user.to_string(),
        title: format!("{rule} title"),
        message: format!("{rule} message"),
        kind: NotificationKind::Insight,
        priority: Priority::Normal,
        metadata: NotificationMetadata {
            rule_id: rule.to_string(),
        },
        cooldown_days,
    }
}

fn new(user: &str, rule: &str, cooldown_days: u32, at: DateTime<Utc>) -> NewNotification {
    candidate(user, rule, cooldown_days).into_new(at)
}

fn stores() -> Vec<(&'static str, Box<dyn NotificationStore>)> {
    vec![
        ("memory", Box::new(InMemoryNotificationStore::new())),
        ("sqlite", Box::new(SqliteNotificationStore::open_in_memory().unwrap())),
    ]
}

fn inserted_id(outcome: InsertOutcome) -> String {
    match outcome {
        InsertOutcome::Inserted { id } => id,
        other => panic!("expected insert, got {other:?}"),
    }
}

// ── Insert + uniqueness ──────────────────────────────────────────────────

#[test]
fn same_bucket_insert_is_duplicate() {
    for (name, store) in stores() {
        let first = store.insert(&new("u1", "D-2", 3, t0())).unwrap();
        assert!(matches!(first, InsertOutcome::Inserted { .. }), "{name}");

        let second = store
            .insert(&new("u1", "D-2", 3, t0() + Duration::hours(2)))
            .unwrap();
        assert_eq!(second, InsertOutcome::Duplicate, "{name}");
        assert_eq!(store.count_since("u1", t0() - Duration::days(1)).unwrap(), 1, "{name}");
    }
}

#[test]
fn zero_cooldown_never_collides() {
    for (name, store) in stores() {
        for i in 0..3 {
            let outcome = store
                .insert(&new("u1", "D-1", 0, t0() + Duration::minutes(i)))
                .unwrap();
            assert!(matches!(outcome, InsertOutcome::Inserted { .. }), "{name}");
        }
        assert_eq!(store.count_since("u1", t0()).unwrap(), 3, "{name}");
    }
}

#[test]
fn uniqueness_is_per_user_and_rule() {
    for (name, store) in stores() {
        inserted_id(store.insert(&new("u1", "W7-1", 7, t0())).unwrap());
        inserted_id(store.insert(&new("u2", "W7-1", 7, t0())).unwrap());
        inserted_id(store.insert(&new("u1", "W7-2", 7, t0())).unwrap());
        assert_eq!(store.count_since("u1", t0()).unwrap(), 2, "{name}");
    }
}

#[test]
fn firings_a_full_cooldown_apart_both_insert() {
    for (name, store) in stores() {
        inserted_id(store.insert(&new("u1", "P-5", 14, t0())).unwrap());
        inserted_id(store.insert(&new("u1", "P-5", 14, t0() + Duration::days(14))).unwrap());
        assert_eq!(store.list_for_user("u1", 10).unwrap().len(), 2, "{name}");
    }
}

// ── find_since / count_since ─────────────────────────────────────────────

#[test]
fn find_since_is_strictly_after() {
    for (name, store) in stores() {
        store.insert(&new("u1", "F0-3", 30, t0())).unwrap();

        assert!(store.find_since("u1", "F0-3", t0()).unwrap().is_none(), "{name}");
        let hit = store
            .find_since("u1", "F0-3", t0() - Duration::seconds(1))
            .unwrap()
            .expect("row created after since");
        assert_eq!(hit.metadata.rule_id, "F0-3", "{name}");
        assert_eq!(hit.created_at, t0(), "{name}");
        assert!(store.find_since("u1", "F0-4", t0() - Duration::days(1)).unwrap().is_none());
        assert!(store.find_since("u2", "F0-3", t0() - Duration::days(1)).unwrap().is_none());
    }
}

#[test]
fn count_since_is_inclusive() {
    for (name, store) in stores() {
        store.insert(&new("u1", "D-1", 0, t0())).unwrap();
        store.insert(&new("u1", "D-1", 0, t0() - Duration::seconds(1))).unwrap();
        assert_eq!(store.count_since("u1", t0()).unwrap(), 1, "{name}");
    }
}

// ── insert_within_quota ──────────────────────────────────────────────────

#[test]
fn quota_insert_stops_at_the_limit() {
    let day_start = t0() - Duration::hours(9);
    for (name, store) in stores() {
        for i in 0..3 {
            let outcome = store
                .insert_within_quota(&new("u1", &format!("R{i}"), 0, t0()), day_start, 3)
                .unwrap();
            assert!(matches!(outcome, InsertOutcome::Inserted { .. }), "{name}");
        }
        let fourth = store
            .insert_within_quota(&new("u1", "R3", 0, t0()), day_start, 3)
            .unwrap();
        assert_eq!(fourth, InsertOutcome::QuotaExhausted, "{name}");
        assert_eq!(store.count_since("u1", day_start).unwrap(), 3, "{name}");

        // Other users have their own quota.
        let other = store
            .insert_within_quota(&new("u2", "R0", 0, t0()), day_start, 3)
            .unwrap();
        assert!(matches!(other, InsertOutcome::Inserted { .. }), "{name}");
    }
}

#[test]
fn quota_insert_ignores_rows_before_day_start() {
    let day_start = t0() - Duration::hours(9);
    for (name, store) in stores() {
        inserted_id(store.insert(&new("u1", "old", 0, day_start - Duration::seconds(1))).unwrap());
        let outcome = store
            .insert_within_quota(&new("u1", "new", 0, t0()), day_start, 1)
            .unwrap();
        assert!(matches!(outcome, InsertOutcome::Inserted { .. }), "{name}");
    }
}

#[test]
fn quota_insert_still_reports_bucket_duplicates() {
    let day_start = t0() - Duration::hours(9);
    for (name, store) in stores() {
        inserted_id(
            store
                .insert_within_quota(&new("u1", "W", 7, t0()), day_start, 5)
                .unwrap(),
        );
        let again = store
            .insert_within_quota(&new("u1", "W", 7, t0() + Duration::hours(1)), day_start, 5)
            .unwrap();
        assert_eq!(again, InsertOutcome::Duplicate, "{name}");
        assert_eq!(store.count_since("u1", day_start).unwrap(), 1, "{name}");
    }
}

#[test]
fn concurrent_quota_inserts_never_exceed_the_limit() {
    let day_start = t0() - Duration::hours(9);
    for (name, store) in stores() {
        let store = &*store;
        std::thread::scope(|scope| {
            for worker in 0..4 {
                scope.spawn(move || {
                    for i in 0..5 {
                        let n = new("u1", &format!("W{worker}-{i}"), 0, t0());
                        store.insert_within_quota(&n, day_start, 5).unwrap();
                    }
                });
            }
        });
        assert_eq!(store.count_since("u1", day_start).unwrap(), 5, "{name}");
    }
}

// ── UI operations ────────────────────────────────────────────────────────

#[test]
fn soft_deleted_rows_hidden_from_list_but_still_counted() {
    for (name, store) in stores() {
        let id = inserted_id(store.insert(&new("u1", "D-6", 1, t0())).unwrap());
        store.insert(&new("u1", "D-1", 0, t0() + Duration::minutes(1))).unwrap();

        store.soft_delete(&id, t0() + Duration::hours(1)).unwrap();
        store.soft_delete(&id, t0() + Duration::hours(5)).unwrap();

        let listed = store.list_for_user("u1", 10).unwrap();
        assert_eq!(listed.len(), 1, "{name}");
        assert_eq!(listed[0].metadata.rule_id, "D-1", "{name}");

        assert_eq!(store.count_since("u1", t0()).unwrap(), 2, "{name}");
        let cooling = store
            .find_since("u1", "D-6", t0() - Duration::days(1))
            .unwrap()
            .unwrap();
        assert_eq!(cooling.deleted_at, Some(t0() + Duration::hours(1)), "{name}");
    }
}

#[test]
fn mark_read_and_missing_ids() {
    for (name, store) in stores() {
        let id = inserted_id(store.insert(&new("u1", "L-1", 0, t0())).unwrap());
        store.mark_read(&id).unwrap();
        assert!(store.list_for_user("u1", 1).unwrap()[0].is_read, "{name}");

        let err = store.mark_read("nope").unwrap_err();
        assert!(matches!(err, CadenceError::NotificationNotFound { .. }), "{name}");
        let err = store.soft_delete("nope", t0()).unwrap_err();
        assert!(matches!(err, CadenceError::NotificationNotFound { .. }), "{name}");
    }
}

#[test]
fn list_is_newest_first_and_limited() {
    for (name, store) in stores() {
        for i in 0..5 {
            store
                .insert(&new("u1", &format!("R-{i}"), 0, t0() + Duration::minutes(i)))
                .unwrap();
        }
        let listed = store.list_for_user("u1", 3).unwrap();
        let ids: Vec<&str> = listed.iter().map(|n| n.metadata.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["R-4", "R-3", "R-2"], "{name}");
    }
}

// ── SQLite specifics ─────────────────────────────────────────────────────

#[test]
fn sqlite_file_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notifications.db");

    {
        let store = SqliteNotificationStore::open_path(&path, 1000).unwrap();
        assert!(store.is_wal().unwrap());
        store.insert(&new("u1", "F0-1", 0, t0())).unwrap();
    }

    let store = SqliteNotificationStore::open_path(&path, 1000).unwrap();
    assert_eq!(store.schema_version().unwrap(), cadence_storage::migrations::LATEST_VERSION);
    let rows = store.list_for_user("u1", 10).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "F0-1 title");
    assert_eq!(rows[0].priority, Priority::Normal);
    assert_eq!(rows[0].kind, NotificationKind::Insight);
}

#[test]
fn sqlite_opens_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = cadence_core::config::StorageConfig::default();
    config.db_path = dir.path().join("cfg.db").display().to_string();

    let store = SqliteNotificationStore::open(&config).unwrap();
    assert_eq!(store.db_path(), Some(dir.path().join("cfg.db").as_path()));
}

#[test]
fn sqlite_open_in_unwritable_location_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("x.db");
    let err = SqliteNotificationStore::open_path(&path, 1000).err().unwrap();
    assert!(matches!(
        err,
        CadenceError::StorageError(StorageError::SqliteError { .. })
    ));
}
