mod coverage;
mod gaps;
mod recommendations;

pub use coverage::AssessmentCoverage;
pub use gaps::{extract_gaps, extract_strengths, SkillGap, STRENGTH_MARGIN};
pub use recommendations::{generate_recommendations, Priority, Recommendation, RecommendationKind};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentResult, CandidateId, ProfileType, SkillCategory};
use super::scoring::{calculate_overall_score, generate_skill_profile, GeneratedSkillProfile};

/// One evaluation pass for one candidate against one template. Never patched; regenerate instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// Template display name.
    pub profile_type: String,
    pub candidate_id: CandidateId,
    pub generated_at: DateTime<Utc>,
    pub overall_score: u8,
    pub skills: Vec<GeneratedSkillProfile>,
    pub gaps: Vec<SkillGap>,
    pub strengths: Vec<SkillGap>,
    pub recommendations: Vec<Recommendation>,
    /// The caller's input, unfiltered and in original order.
    pub assessments_conducted: Vec<AssessmentResult>,
    pub coverage: AssessmentCoverage,
}

impl AssessmentReport {
    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &GeneratedSkillProfile> {
        self.skills
            .iter()
            .filter(move |skill| skill.category == category)
    }

    pub fn skill(&self, name: &str) -> Option<&GeneratedSkillProfile> {
        self.skills.iter().find(|skill| skill.skill_name == name)
    }
}

pub(crate) fn assemble(
    candidate_id: CandidateId,
    profile: &ProfileType,
    assessment_results: &[AssessmentResult],
    now: DateTime<Utc>,
) -> AssessmentReport {
    let skills = generate_skill_profile(assessment_results, profile, now);
    let overall_score = calculate_overall_score(&skills, &profile.weightage);
    let gaps = extract_gaps(&skills);
    let strengths = extract_strengths(&skills);
    let recommendations = generate_recommendations(&skills, &gaps);
    let coverage = AssessmentCoverage::evaluate(profile, assessment_results);

    AssessmentReport {
        profile_type: profile.name.clone(),
        candidate_id,
        generated_at: now,
        overall_score,
        skills,
        gaps,
        strengths,
        recommendations,
        assessments_conducted: assessment_results.to_vec(),
        coverage,
    }
}
