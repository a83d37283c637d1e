use serde::{Deserialize, Serialize};

use super::super::scoring::GeneratedSkillProfile;
use super::gaps::SkillGap;

const HIGH_PRIORITY_GAPS: usize = 2;
const MEDIUM_PRIORITY_GAPS: usize = 2;
const LEVERAGED_STRENGTHS: usize = 2;
/// Stricter than the strengths list margin.
const LEVERAGE_MARGIN: i16 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Strength,
    Improvement,
    /// Part of the taxonomy; no rule emits it yet.
    Development,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub skill: String,
    pub description: String,
    pub priority: Priority,
}

/// Build recommendations from gaps already sorted by deficit.
///
/// Order is fixed: top gaps at high priority, the next gaps at medium, then strengths worth
/// leveraging in the skills' own order.
pub fn generate_recommendations(
    skills: &[GeneratedSkillProfile],
    gaps: &[SkillGap],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for gap in gaps.iter().take(HIGH_PRIORITY_GAPS) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Improvement,
            skill: gap.skill.clone(),
            description: format!(
                "Focus on improving {}. Current level: {}%, Required: {}%",
                gap.skill, gap.current, gap.required
            ),
            priority: Priority::High,
        });
    }

    for gap in gaps
        .iter()
        .skip(HIGH_PRIORITY_GAPS)
        .take(MEDIUM_PRIORITY_GAPS)
    {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Improvement,
            skill: gap.skill.clone(),
            description: format!("Consider improving {} to meet job requirements.", gap.skill),
            priority: Priority::Medium,
        });
    }

    for skill in skills
        .iter()
        .filter(|skill| {
            i16::from(skill.proficiency) >= i16::from(skill.required) + LEVERAGE_MARGIN
        })
        .take(LEVERAGED_STRENGTHS)
    {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Strength,
            skill: skill.skill_name.clone(),
            description: format!(
                "Your {} is a strong asset. Continue leveraging this in interviews.",
                skill.skill_name
            ),
            priority: Priority::High,
        });
    }

    recommendations
}
