use std::collections::HashSet;

use super::super::domain::{ProfileType, SkillCategory};

/// Tolerance when checking that category weights sum to 1.0.
pub const WEIGHTAGE_SUM_TOLERANCE: f64 = 1e-6;

/// Ways a profile template can be malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateViolation {
    #[error("profile id must not be empty")]
    MissingId,
    #[error("{} weightage {value} must be a finite fraction between 0 and 1", .category.label())]
    WeightageOutOfRange { category: SkillCategory, value: f64 },
    #[error("category weightages sum to {0:.4}, expected 1.0")]
    WeightageSum(f64),
    #[error("skill '{0}' is listed more than once")]
    DuplicateSkill(String),
    #[error("skill '{skill}' weightage {value} must be between 0 and 1")]
    SkillWeightageOutOfRange { skill: String, value: f64 },
    #[error("skill '{skill}' requires {value}, above the 100 point scale")]
    RequirementOutOfRange { skill: String, value: u8 },
    #[error("skill '{0}' lists no assessment types")]
    NoEvidenceTypes(String),
}

pub(crate) fn validate_template(profile: &ProfileType) -> Result<(), TemplateViolation> {
    if profile.id.as_str().trim().is_empty() {
        return Err(TemplateViolation::MissingId);
    }

    for category in SkillCategory::ordered() {
        let value = profile.weightage.for_category(category);
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(TemplateViolation::WeightageOutOfRange { category, value });
        }
    }

    let total = profile.weightage.total();
    if (total - 1.0).abs() > WEIGHTAGE_SUM_TOLERANCE {
        return Err(TemplateViolation::WeightageSum(total));
    }

    let mut seen = HashSet::new();
    for mapping in &profile.skill_mappings {
        if !seen.insert(mapping.skill_name.as_str()) {
            return Err(TemplateViolation::DuplicateSkill(mapping.skill_name.clone()));
        }
        if !mapping.weightage.is_finite() || !(0.0..=1.0).contains(&mapping.weightage) {
            return Err(TemplateViolation::SkillWeightageOutOfRange {
                skill: mapping.skill_name.clone(),
                value: mapping.weightage,
            });
        }
        if mapping.min_required > 100 {
            return Err(TemplateViolation::RequirementOutOfRange {
                skill: mapping.skill_name.clone(),
                value: mapping.min_required,
            });
        }
        if mapping.assessment_types.is_empty() {
            return Err(TemplateViolation::NoEvidenceTypes(
                mapping.skill_name.clone(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::builtin::{builtin_profiles, frontend_developer};
    use super::*;
    use crate::assessment::domain::ProfileId;

    #[test]
    fn builtin_templates_are_well_formed() {
        for profile in builtin_profiles() {
            assert_eq!(validate_template(&profile), Ok(()), "{}", profile.id);
        }
    }

    #[test]
    fn rejects_blank_profile_id() {
        let mut profile = frontend_developer();
        profile.id = ProfileId::from(" ");

        assert_eq!(
            validate_template(&profile),
            Err(TemplateViolation::MissingId)
        );
    }

    #[test]
    fn rejects_skill_weightage_above_one() {
        let mut profile = frontend_developer();
        profile.skill_mappings[3].weightage = 1.5;

        match validate_template(&profile) {
            Err(violation @ TemplateViolation::SkillWeightageOutOfRange { .. }) => {
                assert_eq!(
                    violation,
                    TemplateViolation::SkillWeightageOutOfRange {
                        skill: "UI/UX Understanding".to_string(),
                        value: 1.5,
                    }
                );
                assert!(violation.to_string().contains("weightage 1.5"));
            }
            other => panic!("expected skill weightage violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_weightage_that_does_not_sum_to_one() {
        let mut profile = frontend_developer();
        profile.weightage.confidence = 0.3;

        match validate_template(&profile) {
            Err(TemplateViolation::WeightageSum(total)) => assert!((total - 1.2).abs() < 1e-9),
            other => panic!("expected weightage sum violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_category_weight() {
        let mut profile = frontend_developer();
        profile.weightage.technical = -0.1;
        profile.weightage.communication = 1.0;

        assert!(matches!(
            validate_template(&profile),
            Err(TemplateViolation::WeightageOutOfRange {
                category: SkillCategory::Technical,
                ..
            })
        ));
    }

    #[test]
    fn rejects_duplicate_skill_names() {
        let mut profile = frontend_developer();
        let copy = profile.skill_mappings[0].clone();
        profile.skill_mappings.push(copy);

        assert_eq!(
            validate_template(&profile),
            Err(TemplateViolation::DuplicateSkill(
                "React/Vue/Angular".to_string()
            ))
        );
    }

    #[test]
    fn rejects_requirements_above_scale_and_empty_evidence() {
        let mut profile = frontend_developer();
        profile.skill_mappings[1].min_required = 120;
        assert!(matches!(
            validate_template(&profile),
            Err(TemplateViolation::RequirementOutOfRange { value: 120, .. })
        ));

        let mut profile = frontend_developer();
        profile.skill_mappings[2].assessment_types.clear();
        assert_eq!(
            validate_template(&profile),
            Err(TemplateViolation::NoEvidenceTypes(
                "JavaScript/TypeScript".to_string()
            ))
        );
    }
}
