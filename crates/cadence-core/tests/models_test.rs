use chrono::{Duration, NaiveDate, TimeZone, Utc};

use cadence_core::models::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn trigger_wire_names() {
    assert_eq!(
        serde_json::to_string(&Trigger::F0Create).unwrap(),
        "\"F0_CREATE\""
    );
    assert_eq!(
        serde_json::to_string(&Trigger::DailyLogSave).unwrap(),
        "\"DAILY_LOG_SAVE\""
    );
    let periodic: Trigger = serde_json::from_str("\"PERIODIC\"").unwrap();
    assert_eq!(periodic, Trigger::DailyCheck);
    assert_eq!(Trigger::LessonCompleted.to_string(), "LESSON_COMPLETED");
}

#[test]
fn priority_orders_urgent_first_and_serializes_as_int() {
    let mut ps = vec![Priority::Low, Priority::Urgent, Priority::Normal];
    ps.sort();
    assert_eq!(ps, vec![Priority::Urgent, Priority::Normal, Priority::Low]);
    assert_eq!(serde_json::to_string(&Priority::Normal).unwrap(), "2");
    assert!(serde_json::from_str::<Priority>("4").is_err());
}

#[test]
fn candidate_serializes_output_contract() {
    let candidate = NotificationCandidate {
        user_id: "u1".into(),
        title: "Short night".into(),
        message: "Sleep matters".into(),
        kind: NotificationKind::Alert,
        priority: Priority::Urgent,
        metadata: NotificationMetadata {
            rule_id: "D-1".into(),
        },
        cooldown_days: 0,
    };
    let json = serde_json::to_value(&candidate).unwrap();
    assert_eq!(json["type"], "alert");
    assert_eq!(json["priority"], 1);
    assert_eq!(json["metadata"]["ruleId"], "D-1");
    assert!(json.get("id").is_none());
    assert!(json.get("createdAt").is_none());
    assert!(json.get("cooldownDays").is_none());
}

#[test]
fn cooldown_bucket_is_none_without_cooldown() {
    assert_eq!(cooldown_bucket(Utc::now(), 0), None);
}

#[test]
fn cooldown_bucket_differs_for_firings_a_full_cooldown_apart() {
    let t = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 0).unwrap();
    for days in [1u32, 3, 7, 14, 30] {
        let later = t + Duration::days(i64::from(days));
        assert_ne!(cooldown_bucket(t, days), cooldown_bucket(later, days));
    }
}

#[test]
fn cooldown_bucket_same_for_concurrent_firings() {
    let t = Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).unwrap();
    let t2 = t + Duration::seconds(2);
    assert_eq!(cooldown_bucket(t, 14), cooldown_bucket(t2, 14));
}

#[test]
fn daily_log_validate_rejects_out_of_range_values() {
    let mut log = DailyLog::new("u1", date(2024, 1, 10));
    assert!(log.validate().is_ok());

    log.stress_level = Some(6);
    assert!(log.validate().is_err());

    log.stress_level = Some(3);
    log.sleep_hours = Some(25.0);
    assert!(log.validate().is_err());

    log.sleep_hours = Some(7.5);
    log.basal_temperature = Some(36.6);
    assert!(log.validate().is_ok());
}

#[test]
fn cervical_mucus_fertility() {
    assert!(CervicalMucus::EggWhite.is_fertile());
    assert!(CervicalMucus::Watery.is_fertile());
    assert!(!CervicalMucus::Dry.is_fertile());
}

#[test]
fn course_module_completion() {
    let module = CourseModule {
        id: "m1".into(),
        title: "Nutrition".into(),
        lessons_total: 4,
        lessons_completed: 4,
        completed_at: None,
        last_lesson_completed_at: None,
    };
    assert!(module.is_completed());
}
