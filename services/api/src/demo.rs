use crate::infra::{build_mapper, read_assessments};
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use hirego::assessment::{
    AssessmentMapper, AssessmentReport, AssessmentResult, AssessmentType, CandidateId, ProfileId,
    SkillCategory,
};
use hirego::config::AppConfig;
use hirego::error::AppError;
use std::path::PathBuf;

const DEMO_CANDIDATE: &str = "candidate-001";
const DEMO_PROFILES: [&str; 3] = ["frontend_developer", "backend_developer", "product_manager"];

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Limit the demo to a single profile template id.
    #[arg(long)]
    pub(crate) profile: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Candidate identifier echoed into the report
    #[arg(long)]
    pub(crate) candidate: String,
    /// Profile template id (e.g. frontend_developer)
    #[arg(long)]
    pub(crate) profile: String,
    /// JSON file holding an array of assessment results
    #[arg(long)]
    pub(crate) assessments: PathBuf,
}

fn load_mapper() -> Result<AssessmentMapper, AppError> {
    let config = AppConfig::load()?;
    build_mapper(&config.catalog)
}

pub(crate) fn run_profiles() -> Result<(), AppError> {
    let mapper = load_mapper()?;

    println!("Profile templates");
    for profile in mapper.get_all_profile_types() {
        let required: Vec<&str> = profile
            .required_assessments
            .iter()
            .map(|kind| kind.label())
            .collect();
        println!(
            "- {} ({}) | {} skills | requires {}",
            profile.name,
            profile.id,
            profile.skill_mappings.len(),
            required.join(", ")
        );
        println!(
            "  weightage: technical {:.0}% / communication {:.0}% / confidence {:.0}%",
            profile.weightage.technical * 100.0,
            profile.weightage.communication * 100.0,
            profile.weightage.confidence * 100.0
        );
    }

    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        candidate,
        profile,
        assessments,
    } = args;

    let mapper = load_mapper()?;
    let results = read_assessments(&assessments)?;
    let report = mapper
        .generate_report(
            CandidateId(candidate),
            &ProfileId(profile.clone()),
            &results,
        )
        .ok_or_else(|| AppError::Input(format!("unknown profile type `{profile}`")))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mapper = load_mapper()?;
    let now = Utc::now();

    let profiles: Vec<String> = match args.profile {
        Some(profile) => vec![profile],
        None => DEMO_PROFILES.iter().map(|id| id.to_string()).collect(),
    };

    println!("Assessment mapping demo");
    for profile in profiles {
        let results = sample_assessments(&profile, now);
        let report = mapper
            .generate_report_at(
                CandidateId::from(DEMO_CANDIDATE),
                &ProfileId(profile.clone()),
                &results,
                now,
            )
            .ok_or_else(|| AppError::Input(format!("unknown profile type `{profile}`")))?;
        render_report(&report);
    }

    Ok(())
}

fn render_report(report: &AssessmentReport) {
    println!(
        "\n{} for {} | overall {}% | {} assessments",
        report.profile_type,
        report.candidate_id,
        report.overall_score,
        report.assessments_conducted.len()
    );

    println!("Assessments:");
    for line in assessment_lines(report) {
        println!("  - {line}");
    }

    for category in SkillCategory::ordered() {
        let mut skills = report.skills_in(category).peekable();
        if skills.peek().is_none() {
            continue;
        }
        println!("{} skills:", category.label());
        for skill in skills {
            let marker = if skill.meets_requirement() { "ok" } else { "gap" };
            println!(
                "  - {}: {}% (required {}%) [{}]",
                skill.skill_name, skill.proficiency, skill.required, marker
            );
        }
    }

    if !report.gaps.is_empty() {
        println!("Gaps:");
        for gap in &report.gaps {
            println!("  - {} short by {} points", gap.skill, gap.gap);
        }
    }
    if !report.strengths.is_empty() {
        println!("Strengths:");
        for strength in &report.strengths {
            println!("  - {} ahead by {} points", strength.skill, strength.gap);
        }
    }
    if !report.recommendations.is_empty() {
        println!("Recommendations:");
        for recommendation in &report.recommendations {
            println!(
                "  - [{}] {}",
                recommendation.priority.label(),
                recommendation.description
            );
        }
    }
    if !report.coverage.is_complete() {
        let missing: Vec<&str> = report
            .coverage
            .missing
            .iter()
            .map(|kind| kind.label())
            .collect();
        println!("Missing required assessments: {}", missing.join(", "));
    }
}

fn assessment_lines(report: &AssessmentReport) -> Vec<String> {
    report
        .assessments_conducted
        .iter()
        .map(|result| {
            let mut line = format!(
                "{} ({}) {:.0}%",
                result.assessment_id,
                result.kind.label(),
                result.score
            );
            if !result.feedback.is_empty() {
                line.push_str(": ");
                line.push_str(&result.feedback);
            }
            line
        })
        .collect()
}

fn sample(
    id: &str,
    kind: AssessmentType,
    score: f64,
    days_ago: i64,
    category: &str,
    feedback: &str,
    now: DateTime<Utc>,
) -> AssessmentResult {
    AssessmentResult {
        assessment_id: id.to_string(),
        kind,
        score,
        feedback: feedback.to_string(),
        timestamp: now - Duration::days(days_ago),
        category: category.to_string(),
    }
}

/// Sample results per built-in profile; unknown profiles get an empty set.
pub(crate) fn sample_assessments(profile: &str, now: DateTime<Utc>) -> Vec<AssessmentResult> {
    use AssessmentType::{Behavioral, CaseStudy, Coding, Communication, Technical};

    match profile {
        "frontend_developer" => vec![
            sample(
                "code-1",
                Coding,
                92.0,
                7,
                "React/Vue/Angular",
                "Excellent React implementation with proper hooks",
                now,
            ),
            sample(
                "code-2",
                Coding,
                85.0,
                5,
                "CSS/Styling",
                "Good CSS skills, some optimization opportunities",
                now,
            ),
            sample(
                "case-1",
                CaseStudy,
                88.0,
                3,
                "Problem Solving",
                "Strong problem-solving approach",
                now,
            ),
            sample(
                "comm-1",
                Communication,
                76.0,
                2,
                "Communication",
                "Clear explanation, could improve depth",
                now,
            ),
        ],
        "backend_developer" => vec![
            sample(
                "code-1",
                Coding,
                94.0,
                7,
                "Database Design",
                "Excellent database design patterns",
                now,
            ),
            sample(
                "tech-1",
                Technical,
                89.0,
                4,
                "System Design",
                "Strong understanding of system architecture",
                now,
            ),
            sample(
                "case-1",
                CaseStudy,
                86.0,
                3,
                "API Design",
                "Good API design thinking",
                now,
            ),
            sample(
                "comm-1",
                Communication,
                72.0,
                1,
                "Technical Communication",
                "Technical communication needs improvement",
                now,
            ),
        ],
        "product_manager" => vec![
            sample(
                "case-1",
                CaseStudy,
                90.0,
                6,
                "Product Strategy",
                "Excellent strategic thinking",
                now,
            ),
            sample(
                "comm-1",
                Communication,
                88.0,
                4,
                "Communication Skills",
                "Clear and persuasive communication",
                now,
            ),
            sample(
                "behav-1",
                Behavioral,
                85.0,
                2,
                "Leadership",
                "Good decision-making process",
                now,
            ),
            sample(
                "case-2",
                CaseStudy,
                80.0,
                1,
                "User Research",
                "Decent user research approach",
                now,
            ),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_profiles_have_samples_that_cover_their_requirements() {
        let mapper = AssessmentMapper::default();
        let now = Utc::now();

        for profile in DEMO_PROFILES {
            let results = sample_assessments(profile, now);
            assert_eq!(results.len(), 4, "{profile}");
            assert!(results.iter().all(|result| result.validate().is_ok()));

            let report = mapper
                .generate_report_at(
                    CandidateId::from(DEMO_CANDIDATE),
                    &ProfileId::from(profile),
                    &results,
                    now,
                )
                .expect("built-in profile");
            assert!(report.coverage.is_complete(), "{profile}");
            assert!(report.overall_score > 0);
        }
    }

    #[test]
    fn rendered_assessments_carry_type_score_and_feedback() {
        let now = Utc::now();
        let report = AssessmentMapper::default()
            .generate_report_at(
                CandidateId::from(DEMO_CANDIDATE),
                &ProfileId::from("frontend_developer"), &sample_assessments("frontend_developer", now),
                now,
            )
            .expect("built-in profile");

        let lines = assessment_lines(&report);
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "code-1 (coding) 92%: Excellent React implementation with proper hooks"
        );
        assert_eq!(
            lines[3],
            "comm-1 (communication) 76%: Clear explanation, could improve depth"
        );
    }

    #[test]
    fn unknown_demo_profile_has_no_samples() {
        assert!(sample_assessments("nonexistent_role", Utc::now()).is_empty());
    }
}
