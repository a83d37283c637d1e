use serde::{Deserialize, Serialize};

use super::super::scoring::GeneratedSkillProfile;

/// Points above the requirement before a skill counts as a strength.
pub const STRENGTH_MARGIN: i16 = 10;

/// Comparison of a skill against its requirement.
///
/// `gap` is the deficit in the gaps list and the surplus in the strengths list; positive in both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current: u8,
    pub required: u8,
    pub gap: i16,
}

impl SkillGap {
    /// How far `current` gets toward `required`; 0 when nothing is required.
    pub fn completion_ratio(&self) -> f64 {
        if self.required == 0 {
            0.0
        } else {
            f64::from(self.current) / f64::from(self.required)
        }
    }
}

/// Skills below requirement, largest deficit first.
pub fn extract_gaps(skills: &[GeneratedSkillProfile]) -> Vec<SkillGap> {
    let mut gaps: Vec<SkillGap> = skills
        .iter()
        .filter(|skill| skill.proficiency < skill.required)
        .map(|skill| SkillGap {
            skill: skill.skill_name.clone(),
            current: skill.proficiency,
            required: skill.required,
            gap: i16::from(skill.required) - i16::from(skill.proficiency),
        })
        .collect();

    gaps.sort_by(|a, b| b.gap.cmp(&a.gap));
    gaps
}

/// Skills at least [`STRENGTH_MARGIN`] points over requirement, largest surplus first.
pub fn extract_strengths(skills: &[GeneratedSkillProfile]) -> Vec<SkillGap> {
    let mut strengths: Vec<SkillGap> = skills
        .iter()
        .filter(|skill| {
            i16::from(skill.proficiency) >= i16::from(skill.required) + STRENGTH_MARGIN
        })
        .map(|skill| SkillGap {
            skill: skill.skill_name.clone(),
            current: skill.proficiency,
            required: skill.required,
            gap: i16::from(skill.proficiency) - i16::from(skill.required),
        })
        .collect();

    strengths.sort_by(|a, b| b.gap.cmp(&a.gap));
    strengths
}
