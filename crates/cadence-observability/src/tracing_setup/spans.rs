//! Span definitions per pipeline stage.

/// Span around one rule-evaluation pass.
#[macro_export]
macro_rules! evaluation_span {
    ($user_id:expr, $trigger:expr) => {
        tracing::info_span!("cadence.evaluate", user_id = %$user_id, trigger = %$trigger)
    };
}

/// Span around persisting one pass's candidates.
#[macro_export]
macro_rules! delivery_span {
    ($user_id:expr, $candidates:expr) => {
        tracing::info_span!("cadence.deliver", user_id = %$user_id, candidates = $candidates)
    };
}

/// Span around a full trigger pipeline run.
#[macro_export]
macro_rules! pipeline_span {
    ($user_id:expr, $trigger:expr) => {
        tracing::info_span!("cadence.pipeline", user_id = %$user_id, trigger = %$trigger)
    };
}
