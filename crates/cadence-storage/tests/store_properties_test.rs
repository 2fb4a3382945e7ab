//! Property: at most one row per (user, rule, cooldown bucket).

use std::collections::HashSet;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use cadence_core::models::{
    InsertOutcome, NotificationCandidate, NotificationKind, NotificationMetadata, Priority,
};
use cadence_core::traits::NotificationStore;
use cadence_storage::{InMemoryNotificationStore, SqliteNotificationStore};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bucket_key_is_unique(
        cooldown in 1u32..30,
        offsets_hours in prop::collection::vec(0i64..24 * 60, 1..25),
    ) {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let sqlite = SqliteNotificationStore::open_in_memory().unwrap();
        let memory = InMemoryNotificationStore::new();

        let mut buckets = HashSet::new();
        for h in &offsets_hours {
            let at = base + Duration::hours(*h);
            let n = NotificationCandidate {
                user_id: "u".into(),
                title: "t".into(),
                message: "m".into(),
                kind: NotificationKind::Tip,
                priority: Priority::Low,
                metadata: NotificationMetadata { rule_id: "R".into() },
                cooldown_days: cooldown,
            }
            .into_new(at);
            let fresh = buckets.insert(n.cooldown_bucket);

            let stores: [&dyn NotificationStore; 2] = [&sqlite, &memory];
            for store in stores {
                let outcome = store.insert(&n).unwrap();
                prop_assert_eq!(matches!(outcome, InsertOutcome::Inserted { .. }), fresh);
            }
        }
        prop_assert_eq!(sqlite.count_since("u", base).unwrap(), buckets.len());
        prop_assert_eq!(memory.len(), buckets.len());
    }
}
