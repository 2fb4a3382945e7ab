use std::sync::Arc;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use cadence_context::{ContextBuilder, ContextInputs};
use cadence_core::models::{DailyLog, Trigger, UserProfile};
use cadence_rules::{RuleCatalog, RuleEngine};
use cadence_storage::InMemoryNotificationStore;

fn bench_evaluate(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap();
    let mut profile = UserProfile::new("bench", now - Duration::days(90));
    profile.cycle_length = Some(29);
    profile.last_period_date = NaiveDate::from_ymd_opt(2024, 6, 3);

    let logs: Vec<DailyLog> = (0..60)
        .map(|i| {
            let mut log = DailyLog::new("bench", now.date_naive() - Duration::days(i));
            log.sleep_hours = Some(5.0 + (i % 4) as f64);
            log.stress_level = Some((i % 5 + 1) as u8);
            log.water_glasses = Some((i % 8) as u32);
            log
        })
        .collect();

    let builder = ContextBuilder::default();
    let engine = RuleEngine::new(
        RuleCatalog::standard(),
        Arc::new(InMemoryNotificationStore::new()),
    );
    let ctx = builder.build(&ContextInputs::new(&profile, now).with_logs(&logs));

    c.bench_function("build_context_60_logs", |b| {
        b.iter(|| builder.build(&ContextInputs::new(&profile, now).with_logs(&logs)))
    });
    c.bench_function("evaluate_daily_log_save", |b| {
        b.iter(|| engine.evaluate(Trigger::DailyLogSave, &ctx))
    });
    c.bench_function("evaluate_daily_check", |b| {
        b.iter(|| engine.evaluate(Trigger::DailyCheck, &ctx))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
