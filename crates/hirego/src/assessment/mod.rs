//! Assessment-to-skill-profile mapping.
//!
//! A [`ProfileCatalog`] holds the job-role templates. [`AssessmentMapper`] resolves a template,
//! scores each of its skills from the candidate's assessment results, aggregates an overall fit
//! score across the technical, communication, and confidence axes, and derives gaps, strengths,
//! and recommendations into an immutable [`AssessmentReport`].

pub mod catalog;
pub mod domain;
pub mod mapper;
pub mod report;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{builtin_profiles, CatalogError, ProfileCatalog, TemplateViolation};
pub use domain::{
    AssessmentResult, AssessmentType, CandidateId, InvalidAssessment, ProfileId, ProfileType,
    SkillCategory, SkillMapping, WeightageConfig,
};
pub use mapper::AssessmentMapper;
pub use report::{
    AssessmentCoverage, AssessmentReport, Priority, Recommendation, RecommendationKind, SkillGap,
};
pub use router::{assessment_router, ReportRequest};
pub use scoring::GeneratedSkillProfile;
