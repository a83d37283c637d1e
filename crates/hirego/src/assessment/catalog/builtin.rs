use super::super::domain::{
    AssessmentType, ProfileId, ProfileType, SkillCategory, SkillMapping, WeightageConfig,
};

use super::super::domain::AssessmentType::{Behavioral, CaseStudy, Coding, Communication, Technical};

fn skill(
    name: &str,
    category: SkillCategory,
    assessment_types: &[AssessmentType],
    weightage: f64,
    min_required: u8,
) -> SkillMapping {
    SkillMapping {
        skill_name: name.to_string(),
        skill_category: category,
        assessment_types: assessment_types.to_vec(),
        weightage,
        min_required,
    }
}

fn weights(technical: f64, communication: f64, confidence: f64) -> WeightageConfig {
    WeightageConfig {
        technical,
        communication,
        confidence,
    }
}

/// The templates HireGo ships with, in catalog order.
pub fn builtin_profiles() -> Vec<ProfileType> {
    vec![
        frontend_developer(),
        backend_developer(),
        product_manager(),
        data_scientist(),
        ux_designer(),
    ]
}

pub fn frontend_developer() -> ProfileType {
    ProfileType {
        id: ProfileId::from("frontend_developer"),
        name: "Frontend Developer".to_string(),
        category: "technical".to_string(),
        required_assessments: vec![Coding, Communication, CaseStudy],
        skill_mappings: vec![
            skill(
                "React/Vue/Angular",
                SkillCategory::Technical,
                &[Coding, CaseStudy],
                0.25,
                80,
            ),
            skill("CSS/Styling", SkillCategory::Technical, &[Coding], 0.15, 75),
            skill(
                "JavaScript/TypeScript",
                SkillCategory::Technical,
                &[Coding, Technical],
                0.25,
                85,
            ),
            skill(
                "UI/UX Understanding",
                SkillCategory::Technical,
                &[CaseStudy, Behavioral],
                0.15,
                70,
            ),
            skill(
                "Communication",
                SkillCategory::Communication,
                &[Communication, CaseStudy],
                0.10,
                70,
            ),
            skill(
                "Problem Solving",
                SkillCategory::Confidence,
                &[Coding, CaseStudy],
                0.10,
                75,
            ),
        ],
        weightage: weights(0.80, 0.10, 0.10),
    }
}

pub fn backend_developer() -> ProfileType {
    ProfileType {
        id: ProfileId::from("backend_developer"),
        name: "Backend Developer".to_string(),
        category: "technical".to_string(),
        required_assessments: vec![Coding, Technical, CaseStudy],
        skill_mappings: vec![
            skill(
                "Database Design",
                SkillCategory::Technical,
                &[Coding, Technical, CaseStudy],
                0.25,
                85,
            ),
            skill(
                "API Design",
                SkillCategory::Technical,
                &[Coding, CaseStudy],
                0.20,
                80,
            ),
            skill(
                "Server Architecture",
                SkillCategory::Technical,
                &[Technical, CaseStudy],
                0.20,
                80,
            ),
            skill(
                "System Design",
                SkillCategory::Technical,
                &[CaseStudy, Technical],
                0.15,
                75,
            ),
            skill(
                "Problem Analysis",
                SkillCategory::Confidence,
                &[Coding, CaseStudy],
                0.10,
                75,
            ),
            skill(
                "Technical Communication",
                SkillCategory::Communication,
                &[Communication],
                0.10,
                70,
            ),
        ],
        weightage: weights(0.80, 0.10, 0.10),
    }
}

pub fn product_manager() -> ProfileType {
    ProfileType {
        id: ProfileId::from("product_manager"),
        name: "Product Manager".to_string(),
        category: "management".to_string(),
        required_assessments: vec![CaseStudy, Communication, Behavioral],
        skill_mappings: vec![
            skill(
                "Product Strategy",
                SkillCategory::Technical,
                &[CaseStudy, Behavioral],
                0.25,
                80,
            ),
            skill(
                "User Research",
                SkillCategory::Technical,
                &[CaseStudy],
                0.15,
                75,
            ),
            skill(
                "Communication Skills",
                SkillCategory::Communication,
                &[Communication, CaseStudy, Behavioral],
                0.25,
                85,
            ),
            skill(
                "Stakeholder Management",
                SkillCategory::Communication,
                &[Behavioral, Communication],
                0.15,
                80,
            ),
            skill(
                "Decision Making",
                SkillCategory::Confidence,
                &[CaseStudy, Behavioral],
                0.10,
                75,
            ),
            skill(
                "Leadership",
                SkillCategory::Confidence,
                &[Behavioral],
                0.10,
                75,
            ),
        ],
        weightage: weights(0.40, 0.40, 0.20),
    }
}

pub fn data_scientist() -> ProfileType {
    ProfileType {
        id: ProfileId::from("data_scientist"),
        name: "Data Scientist".to_string(),
        category: "technical".to_string(),
        required_assessments: vec![Coding, Technical, CaseStudy],
        skill_mappings: vec![
            skill(
                "Machine Learning",
                SkillCategory::Technical,
                &[Coding, Technical],
                0.30,
                85,
            ),
            skill(
                "Statistical Analysis",
                SkillCategory::Technical,
                &[Technical, CaseStudy],
                0.20,
                80,
            ),
            skill(
                "Data Visualization",
                SkillCategory::Technical,
                &[CaseStudy],
                0.15,
                75,
            ),
            skill(
                "Python/R Programming",
                SkillCategory::Technical,
                &[Coding],
                0.20,
                85,
            ),
            skill(
                "Problem Analysis",
                SkillCategory::Confidence,
                &[CaseStudy, Coding],
                0.10,
                75,
            ),
            skill(
                "Communication",
                SkillCategory::Communication,
                &[CaseStudy],
                0.05,
                70,
            ),
        ],
        weightage: weights(0.85, 0.05, 0.10),
    }
}

pub fn ux_designer() -> ProfileType {
    ProfileType {
        id: ProfileId::from("ux_designer"),
        name: "UX Designer".to_string(),
        category: "creative".to_string(),
        required_assessments: vec![CaseStudy, Communication, Behavioral],
        skill_mappings: vec![
            skill(
                "User Research",
                SkillCategory::Technical,
                &[CaseStudy],
                0.20,
                80,
            ),
            skill(
                "Wireframing/Prototyping",
                SkillCategory::Technical,
                &[CaseStudy],
                0.20,
                80,
            ),
            skill(
                "Design Thinking",
                SkillCategory::Technical,
                &[CaseStudy, Behavioral],
                0.15,
                75,
            ),
            skill(
                "Communication",
                SkillCategory::Communication,
                &[Communication, CaseStudy],
                0.20,
                80,
            ),
            skill(
                "Creativity",
                SkillCategory::Confidence,
                &[CaseStudy, Behavioral],
                0.15,
                75,
            ),
            skill(
                "Attention to Detail",
                SkillCategory::Confidence,
                &[CaseStudy],
                0.10,
                75,
            ),
        ],
        weightage: weights(0.55, 0.20, 0.25),
    }
}
