use chrono::{DateTime, Duration, Utc};

use super::super::domain::AssessmentResult;

/// Age at which evidence reaches the weight floor.
pub const RECENCY_WINDOW_DAYS: i64 = 90;
/// Lowest weight any evidence carries, however old.
pub const RECENCY_FLOOR: f64 = 0.5;

/// Linear decay from 1.0 for evidence completed at `now` down to the floor at the window edge.
///
/// Evidence stamped after `now` is treated as fresh rather than weighted above 1.0.
pub fn recency_weight(completed_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_ms = (now - completed_at).num_milliseconds() as f64;
    let window_ms = Duration::days(RECENCY_WINDOW_DAYS).num_milliseconds() as f64;
    (1.0 - age_ms / window_ms).clamp(RECENCY_FLOOR, 1.0)
}

/// Sum of recency-weighted scores divided by the evidence count (not by the weight total).
pub fn calculate_weighted_score(evidence: &[AssessmentResult], now: DateTime<Utc>) -> f64 {
    if evidence.is_empty() {
        return 0.0;
    }

    let weighted: f64 = evidence
        .iter()
        .map(|assessment| assessment.score * recency_weight(assessment.timestamp, now))
        .sum();

    weighted / evidence.len() as f64
}
