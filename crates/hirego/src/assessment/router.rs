use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::CatalogError;
use super::domain::{AssessmentResult, CandidateId, ProfileId, ProfileType};
use super::mapper::AssessmentMapper;

/// Request body for report generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub candidate_id: CandidateId,
    pub profile_id: ProfileId,
    #[serde(default)]
    pub assessments: Vec<AssessmentResult>,
}

/// Compact listing entry for profile selectors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummaryView {
    pub id: ProfileId,
    pub name: String,
    pub category: String,
    pub skill_count: usize,
}

impl From<&ProfileType> for ProfileSummaryView {
    fn from(profile: &ProfileType) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            category: profile.category.clone(),
            skill_count: profile.skill_mappings.len(),
        }
    }
}

/// Router builder exposing the catalog and report generation over HTTP.
pub fn assessment_router(mapper: Arc<AssessmentMapper>) -> Router {
    Router::new()
        .route(
            "/api/v1/profiles",
            get(list_profiles_handler).post(register_profile_handler),
        )
        .route("/api/v1/profiles/:profile_id", get(profile_handler))
        .route("/api/v1/reports", post(report_handler))
        .with_state(mapper)
}

pub(crate) async fn list_profiles_handler(State(mapper): State<Arc<AssessmentMapper>>) -> Response {
    let profiles: Vec<ProfileSummaryView> = mapper
        .get_all_profile_types()
        .iter()
        .map(ProfileSummaryView::from)
        .collect();
    (StatusCode::OK, axum::Json(profiles)).into_response()
}

pub(crate) async fn profile_handler(
    State(mapper): State<Arc<AssessmentMapper>>,
    Path(profile_id): Path<String>,
) -> Response {
    let id = ProfileId(profile_id);
    match mapper.get_profile_type(&id) {
        Some(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        None => not_found(&id),
    }
}

pub(crate) async fn register_profile_handler(
    State(mapper): State<Arc<AssessmentMapper>>,
    axum::Json(profile): axum::Json<ProfileType>,
) -> Response {
    let view = ProfileSummaryView::from(&profile);
    match mapper.add_profile_type(profile) {
        Ok(None) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Ok(Some(_)) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error @ CatalogError::InvalidProfile { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler(
    State(mapper): State<Arc<AssessmentMapper>>,
    axum::Json(request): axum::Json<ReportRequest>,
) -> Response {
    let ReportRequest {
        candidate_id,
        profile_id,
        assessments,
    } = request;

    if let Some(error) = assessments.iter().find_map(|result| result.validate().err()) {
        let payload = json!({
            "error": error.to_string(),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    match mapper.generate_report(candidate_id, &profile_id, &assessments) {
        Some(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        None => not_found(&profile_id),
    }
}

fn not_found(profile_id: &ProfileId) -> Response {
    let payload = json!({
        "error": "unknown profile type",
        "profile_id": profile_id,
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
