use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for job-profile templates (e.g. `frontend_developer`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub String);

impl ProfileId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for the candidate a report is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of evaluation that produced an [`AssessmentResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentType {
    Video,
    Written,
    Coding,
    CaseStudy,
    Communication,
    Technical,
    Behavioral,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 7] = [
        AssessmentType::Video,
        AssessmentType::Written,
        AssessmentType::Coding,
        AssessmentType::CaseStudy,
        AssessmentType::Communication,
        AssessmentType::Technical,
        AssessmentType::Behavioral,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AssessmentType::Video => "video",
            AssessmentType::Written => "written",
            AssessmentType::Coding => "coding",
            AssessmentType::CaseStudy => "case-study",
            AssessmentType::Communication => "communication",
            AssessmentType::Technical => "technical",
            AssessmentType::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One completed evaluation event, produced upstream and consumed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub assessment_id: String,
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    /// 0-100.
    pub score: f64,
    #[serde(default)]
    pub feedback: String,
    pub timestamp: DateTime<Utc>,
    /// Display-only sub-topic label; never matched against skill names.
    #[serde(default)]
    pub category: String,
}

impl AssessmentResult {
    /// Boundary check for results arriving from outside the process.
    pub fn validate(&self) -> Result<(), InvalidAssessment> {
        if self.assessment_id.trim().is_empty() {
            return Err(InvalidAssessment::MissingId);
        }
        if !self.score.is_finite() || !(0.0..=100.0).contains(&self.score) {
            return Err(InvalidAssessment::ScoreOutOfRange {
                assessment_id: self.assessment_id.clone(),
                score: self.score,
            });
        }
        Ok(())
    }
}

/// Rejection reasons for malformed assessment input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidAssessment {
    #[error("assessment is missing an assessmentId")]
    MissingId,
    #[error("assessment '{assessment_id}' has score {score} outside 0-100")]
    ScoreOutOfRange { assessment_id: String, score: f64 },
}

/// The three fixed top-level axes every skill is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Communication,
    Confidence,
}

impl SkillCategory {
    pub const fn ordered() -> [SkillCategory; 3] {
        [
            SkillCategory::Technical,
            SkillCategory::Communication,
            SkillCategory::Confidence,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Communication => "communication",
            SkillCategory::Confidence => "confidence",
        }
    }
}

/// Ties one named skill to the assessment types that count as evidence for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMapping {
    pub skill_name: String,
    pub skill_category: SkillCategory,
    pub assessment_types: Vec<AssessmentType>,
    /// Share of the category, 0-1. Carried on the template but not used by aggregation.
    pub weightage: f64,
    pub min_required: u8,
}

impl SkillMapping {
    pub fn accepts(&self, kind: AssessmentType) -> bool {
        self.assessment_types.contains(&kind)
    }
}

/// Category weights for the overall score; expected to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightageConfig {
    pub technical: f64,
    pub communication: f64,
    pub confidence: f64,
}

impl WeightageConfig {
    pub fn for_category(&self, category: SkillCategory) -> f64 {
        match category {
            SkillCategory::Technical => self.technical,
            SkillCategory::Communication => self.communication,
            SkillCategory::Confidence => self.confidence,
        }
    }

    pub fn total(&self) -> f64 {
        self.technical + self.communication + self.confidence
    }
}

/// Job-role template describing what "good" looks like for that role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileType {
    pub id: ProfileId,
    pub name: String,
    /// Free-text grouping such as technical, management, creative.
    pub category: String,
    /// Advisory; absent types never fail scoring.
    pub required_assessments: Vec<AssessmentType>,
    pub skill_mappings: Vec<SkillMapping>,
    pub weightage: WeightageConfig,
}
