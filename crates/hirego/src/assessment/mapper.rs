use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::catalog::{CatalogError, ProfileCatalog};
use super::domain::{AssessmentResult, CandidateId, ProfileId, ProfileType};
use super::report::{assemble, AssessmentReport};

/// Entry point tying the catalog to the scoring pipeline.
#[derive(Debug, Clone)]
pub struct AssessmentMapper {
    catalog: Arc<ProfileCatalog>,
}

impl Default for AssessmentMapper {
    fn default() -> Self {
        Self::new(Arc::new(ProfileCatalog::with_builtin_profiles()))
    }
}

impl AssessmentMapper {
    pub fn new(catalog: Arc<ProfileCatalog>) -> Self {
        Self { catalog }
    }

    pub fn get_profile_type(&self, profile_id: &ProfileId) -> Option<ProfileType> {
        self.catalog.get_profile_type(profile_id)
    }

    pub fn add_profile_type(
        &self,
        profile: ProfileType,
    ) -> Result<Option<ProfileType>, CatalogError> {
        self.catalog.add_profile_type(profile)
    }

    pub fn get_all_profile_types(&self) -> Vec<ProfileType> {
        self.catalog.get_all_profile_types()
    }

    /// Build a report stamped with the current time. `None` when the profile id is unknown.
    pub fn generate_report(
        &self,
        candidate_id: CandidateId,
        profile_id: &ProfileId,
        assessment_results: &[AssessmentResult],
    ) -> Option<AssessmentReport> {
        self.generate_report_at(candidate_id, profile_id, assessment_results, Utc::now())
    }

    /// Same as [`generate_report`](Self::generate_report) against a fixed clock.
    pub fn generate_report_at(
        &self,
        candidate_id: CandidateId,
        profile_id: &ProfileId,
        assessment_results: &[AssessmentResult],
        now: DateTime<Utc>,
    ) -> Option<AssessmentReport> {
        let Some(profile) = self.catalog.get_profile_type(profile_id) else {
            warn!(%profile_id, %candidate_id, "unknown profile template");
            return None;
        };

        let report = assemble(candidate_id, &profile, assessment_results, now);

        if !report.coverage.is_complete() {
            let missing: Vec<&str> = report
                .coverage
                .missing
                .iter()
                .map(|kind| kind.label())
                .collect();
            warn!(
                %profile_id,
                candidate_id = %report.candidate_id,
                missing = ?missing,
                "required assessment types not conducted"
            );
        }

        info!(
            %profile_id,
            candidate_id = %report.candidate_id,
            overall_score = report.overall_score,
            skills = report.skills.len(),
            gaps = report.gaps.len(),
            strengths = report.strengths.len(),
            "assessment report generated"
        );

        Some(report)
    }
}
