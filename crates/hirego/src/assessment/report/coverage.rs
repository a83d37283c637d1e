use serde::{Deserialize, Serialize};

use super::super::domain::{AssessmentResult, AssessmentType, ProfileType};

/// Which of the template's expected assessment types the candidate actually sat.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssessmentCoverage {
    pub required: Vec<AssessmentType>,
    /// Distinct types present in the input, first-seen order.
    pub conducted: Vec<AssessmentType>,
    pub missing: Vec<AssessmentType>,
}

impl AssessmentCoverage {
    pub fn evaluate(profile: &ProfileType, results: &[AssessmentResult]) -> Self {
        let mut conducted = Vec::new();
        for result in results {
            if !conducted.contains(&result.kind) {
                conducted.push(result.kind);
            }
        }

        let missing = profile
            .required_assessments
            .iter()
            .copied()
            .filter(|kind| !conducted.contains(kind))
            .collect();

        Self {
            required: profile.required_assessments.clone(),
            conducted,
            missing,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
