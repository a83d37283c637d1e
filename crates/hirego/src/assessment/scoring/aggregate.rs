use super::super::domain::{SkillCategory, WeightageConfig};
use super::GeneratedSkillProfile;

/// Arithmetic mean proficiency of the skills on one axis; 0 when the axis has none.
pub fn category_mean(skills: &[GeneratedSkillProfile], category: SkillCategory) -> f64 {
    let (sum, count) = skills
        .iter()
        .filter(|skill| skill.category == category)
        .fold((0.0_f64, 0_usize), |(sum, count), skill| {
            (sum + f64::from(skill.proficiency), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Weighted sum of the three axis means.
///
/// An axis with no scored skills contributes 0 at its full configured weight; weights are never
/// renormalised over the axes that happened to be assessed.
pub fn calculate_overall_score(skills: &[GeneratedSkillProfile], weightage: &WeightageConfig) -> u8 {
    let total: f64 = SkillCategory::ordered()
        .into_iter()
        .map(|category| category_mean(skills, category) * weightage.for_category(category))
        .sum();

    total.round().clamp(0.0, 100.0) as u8
}
