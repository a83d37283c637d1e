use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::catalog::ProfileCatalog;
use crate::assessment::domain::{AssessmentResult, AssessmentType, CandidateId, ProfileId};
use crate::assessment::mapper::AssessmentMapper;
use crate::assessment::report::AssessmentReport;

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn assessment(
    id: &str,
    kind: AssessmentType,
    score: f64,
    days_ago: i64,
) -> AssessmentResult {
    AssessmentResult {
        assessment_id: id.to_string(),
        kind,
        score,
        feedback: format!("{} feedback", kind.label()),
        timestamp: now() - Duration::days(days_ago),
        category: String::new(),
    }
}

pub(super) fn mapper() -> AssessmentMapper {
    AssessmentMapper::new(Arc::new(ProfileCatalog::with_builtin_profiles()))
}

pub(super) fn report_for(profile: &str, assessments: &[AssessmentResult]) -> AssessmentReport {
    mapper()
        .generate_report_at(
            CandidateId::from("candidate-001"),
            &ProfileId::from(profile),
            assessments,
            now(),
        )
        .expect("profile exists")
}

pub(super) fn skill_names(report: &AssessmentReport) -> Vec<&str> {
    report
        .skills
        .iter()
        .map(|skill| skill.skill_name.as_str())
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
