mod aggregate;
mod recency;

pub use aggregate::{calculate_overall_score, category_mean};
pub use recency::{calculate_weighted_score, recency_weight, RECENCY_FLOOR, RECENCY_WINDOW_DAYS};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{AssessmentResult, AssessmentType, ProfileType, SkillCategory, SkillMapping};

/// Computed proficiency for one skill of one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSkillProfile {
    pub skill_name: String,
    pub category: SkillCategory,
    pub proficiency: u8,
    pub required: u8,
    /// Results that counted toward this skill, in input order.
    pub evidence: Vec<AssessmentResult>,
    /// Distinct contributing types, first-seen order.
    pub proficiency_source: Vec<AssessmentType>,
}

impl GeneratedSkillProfile {
    pub fn meets_requirement(&self) -> bool {
        self.proficiency >= self.required
    }
}

/// Score every skill of the template that has at least one matching result.
///
/// Skills without evidence are left out entirely rather than reported at zero.
pub fn generate_skill_profile(
    assessment_results: &[AssessmentResult],
    profile: &ProfileType,
    now: DateTime<Utc>,
) -> Vec<GeneratedSkillProfile> {
    profile
        .skill_mappings
        .iter()
        .filter_map(|mapping| score_skill(assessment_results, mapping, now))
        .collect()
}

fn score_skill(
    assessment_results: &[AssessmentResult],
    mapping: &SkillMapping,
    now: DateTime<Utc>,
) -> Option<GeneratedSkillProfile> {
    let evidence: Vec<AssessmentResult> = assessment_results
        .iter()
        .filter(|result| mapping.accepts(result.kind))
        .cloned()
        .collect();

    if evidence.is_empty() {
        debug!(skill = %mapping.skill_name, "no matching evidence, skill omitted");
        return None;
    }

    let mut proficiency_source = Vec::new();
    for result in &evidence {
        if !proficiency_source.contains(&result.kind) {
            proficiency_source.push(result.kind);
        }
    }

    let weighted = calculate_weighted_score(&evidence, now);
    let proficiency = weighted.round().clamp(0.0, 100.0) as u8;

    debug!(
        skill = %mapping.skill_name,
        evidence = evidence.len(),
        proficiency,
        "scored skill"
    );

    Some(GeneratedSkillProfile {
        skill_name: mapping.skill_name.clone(),
        category: mapping.skill_category,
        proficiency,
        required: mapping.min_required,
        evidence,
        proficiency_source,
    })
}
