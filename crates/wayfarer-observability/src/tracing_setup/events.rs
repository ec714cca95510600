//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed profile recomputation.
pub fn profile_computed(
    action_count: usize,
    interest_count: usize,
    avoidance_count: usize,
    pace: &str,
) {
    tracing::info!(
        event = "profile_computed",
        action_count = action_count,
        interest_count = interest_count,
        avoidance_count = avoidance_count,
        pace = %pace,
        "profile computed"
    );
}

/// Log an avoidance that cleared the evidence floor.
pub fn avoidance_emitted(category: &str, evidence: u32, confidence: f64) {
    tracing::debug!(
        event = "avoidance_emitted",
        category = %category,
        evidence = evidence,
        confidence = confidence,
        "avoidance emitted"
    );
}

/// Log a closed dwell-tracking session.
pub fn dwell_session_closed(place_type: &str, seconds: f64) {
    tracing::debug!(
        event = "dwell_session_closed",
        place_type = %place_type,
        seconds = seconds,
        "dwell session closed"
    );
}

/// Log an action the session refused to append.
pub fn action_rejected(action_type: &str, reason: &str) {
    tracing::warn!(
        event = "action_rejected",
        action_type = %action_type,
        reason = %reason,
        "action rejected"
    );
}
