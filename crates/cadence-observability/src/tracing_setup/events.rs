//! Structured log events for pipeline milestones.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

pub fn rule_fired(user_id: &str, rule_id: &str, priority: u8) {
    tracing::debug!(
        event = "rule_fired",
        user_id = %user_id,
        rule_id = %rule_id,
        priority = priority,
        "rule fired"
    );
}

pub fn rule_skipped(user_id: &str, rule_id: &str, reason: &str) {
    tracing::debug!(
        event = "rule_skipped",
        user_id = %user_id,
        rule_id = %rule_id,
        reason = %reason,
        "rule skipped"
    );
}

/// A condition or message builder panicked; the rule is treated as not fired.
pub fn rule_errored(user_id: &str, rule_id: &str, cause: &str) {
    tracing::warn!(
        event = "rule_errored",
        user_id = %user_id,
        rule_id = %rule_id,
        cause = %cause,
        "rule evaluation failed"
    );
}

/// Cooldown history unreachable; the rule is skipped.
pub fn cooldown_lookup_failed(user_id: &str, rule_id: &str, error: &str) {
    tracing::warn!(
        event = "cooldown_lookup_failed",
        user_id = %user_id,
        rule_id = %rule_id,
        error = %error,
        "cooldown lookup failed, skipping rule"
    );
}

pub fn evaluation_completed(user_id: &str, trigger: &str, selected: usize, fired: usize) {
    tracing::debug!(
        event = "evaluation_completed",
        user_id = %user_id,
        trigger = %trigger,
        selected = selected,
        fired = fired,
        "evaluation completed"
    );
}

/// Quota count unavailable; nothing is persisted this pass.
pub fn quota_count_failed(user_id: &str, error: &str) {
    tracing::warn!(
        event = "quota_count_failed",
        user_id = %user_id,
        error = %error,
        "quota count failed, dropping all candidates"
    );
}

pub fn notification_persisted(user_id: &str, rule_id: &str, notification_id: &str) {
    tracing::info!(
        event = "notification_persisted",
        user_id = %user_id,
        rule_id = %rule_id,
        notification_id = %notification_id,
        "notification persisted"
    );
}

/// Another pass already recorded this rule in the current cooldown bucket.
pub fn notification_already_fired(user_id: &str, rule_id: &str) {
    tracing::debug!(
        event = "notification_already_fired",
        user_id = %user_id,
        rule_id = %rule_id,
        "duplicate insert rejected"
    );
}

pub fn notification_insert_failed(user_id: &str, rule_id: &str, error: &str) {
    tracing::warn!(
        event = "notification_insert_failed",
        user_id = %user_id,
        rule_id = %rule_id,
        error = %error,
        "notification insert failed"
    );
}

pub fn delivery_completed(user_id: &str, persisted: usize, dropped: usize, remaining_quota: u32) {
    tracing::info!(
        event = "delivery_completed",
        user_id = %user_id,
        persisted = persisted,
        dropped = dropped,
        remaining_quota = remaining_quota,
        "delivery completed"
    );
}

pub fn batch_completed(trigger: &str, users: usize, persisted: usize) {
    tracing::info!(
        event = "batch_completed",
        trigger = %trigger,
        users = users,
        persisted = persisted,
        "batch pipeline run completed"
    );
}
