use std::io::Write;
use std::sync::Arc;
use std::thread;

use super::common::*;
use crate::assessment::catalog::{builtin_profiles, CatalogError, ProfileCatalog};
use crate::assessment::domain::{
    AssessmentType, CandidateId, ProfileId, ProfileType, SkillCategory, SkillMapping,
    WeightageConfig,
};
use crate::assessment::TemplateViolation;

fn qa_engineer() -> ProfileType {
    ProfileType {
        id: ProfileId::from("qa_engineer"),
        name: "QA Engineer".to_string(),
        category: "technical".to_string(),
        required_assessments: vec![AssessmentType::Technical, AssessmentType::Written],
        skill_mappings: vec![
            SkillMapping {
                skill_name: "Test Design".to_string(),
                skill_category: SkillCategory::Technical,
                assessment_types: vec![AssessmentType::Technical, AssessmentType::Written],
                weightage: 0.6,
                min_required: 75,
            },
            SkillMapping {
                skill_name: "Bug Reporting".to_string(),
                skill_category: SkillCategory::Communication,
                assessment_types: vec![AssessmentType::Written],
                weightage: 0.4,
                min_required: 70,
            },
        ],
        weightage: WeightageConfig {
            technical: 0.7,
            communication: 0.3,
            confidence: 0.0,
        },
    }
}

#[test]
fn registered_templates_are_resolvable_and_listed_last() {
    let catalog = ProfileCatalog::with_builtin_profiles();

    let previous = catalog
        .add_profile_type(qa_engineer())
        .expect("valid template");

    assert!(previous.is_none());
    assert_eq!(catalog.len(), 6);
    let all = catalog.get_all_profile_types();
    assert_eq!(all.last().map(|p| p.id.as_str()), Some("qa_engineer"));
    assert_eq!(
        catalog
            .get_profile_type(&ProfileId::from("qa_engineer"))
            .map(|p| p.name),
        Some("QA Engineer".to_string())
    );
}

#[test]
fn overwriting_keeps_the_original_position() {
    let catalog = ProfileCatalog::with_builtin_profiles();
    let mut revised = builtin_profiles()
        .into_iter()
        .find(|p| p.id == ProfileId::from("backend_developer"))
        .expect("backend template");
    revised.name = "Backend Engineer".to_string();

    let previous = catalog.add_profile_type(revised).expect("valid template");

    assert_eq!(previous.map(|p| p.name), Some("Backend Developer".to_string()));
    let all = catalog.get_all_profile_types();
    assert_eq!(all.len(), 5);
    assert_eq!(all[1].name, "Backend Engineer");
}

#[test]
fn malformed_templates_are_rejected_without_mutation() {
    let catalog = ProfileCatalog::with_builtin_profiles();
    let mut broken = qa_engineer();
    broken.weightage.confidence = 0.2;

    let err = catalog
        .add_profile_type(broken)
        .expect_err("weights must sum to one");

    match err {
        CatalogError::InvalidProfile {
            profile_id,
            violation: TemplateViolation::WeightageSum(_),
        } => assert_eq!(profile_id, ProfileId::from("qa_engineer")),
        other => panic!("expected weightage violation, got {other:?}"),
    }
    assert_eq!(catalog.len(), 5);
}

#[test]
fn blank_ids_and_oversized_skill_weights_leave_the_catalog_empty() {
    let catalog = ProfileCatalog::empty();

    let mut unnamed = qa_engineer();
    unnamed.id = ProfileId::from(" ");
    let err = catalog
        .add_profile_type(unnamed)
        .expect_err("blank id rejected");
    assert_eq!(
        err.to_string(),
        "profile ' ' rejected: profile id must not be empty"
    );

    let mut overweighted = qa_engineer();
    overweighted.skill_mappings[0].weightage = 1.5;
    let err = catalog
        .add_profile_type(overweighted)
        .expect_err("skill weightage rejected");
    assert!(matches!(
        err,
        CatalogError::InvalidProfile {
            violation: TemplateViolation::SkillWeightageOutOfRange { .. },
            ..
        }
    ));

    assert!(catalog.is_empty());
}

#[test]
fn isolated_catalogs_do_not_share_registrations() {
    let first = ProfileCatalog::with_builtin_profiles();
    let second = ProfileCatalog::with_builtin_profiles();

    first.add_profile_type(qa_engineer()).expect("valid template");

    assert!(second
        .get_profile_type(&ProfileId::from("qa_engineer"))
        .is_none());
}

#[test]
fn concurrent_registration_and_reads_are_serialised() {
    let catalog = Arc::new(ProfileCatalog::empty());

    let handles: Vec<_> = (0..8)
        .map(|index| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let mut profile = qa_engineer();
                profile.id = ProfileId(format!("qa_engineer_{index}"));
                catalog.add_profile_type(profile).expect("valid template");
                catalog.get_all_profile_types().len()
            })
        })
        .collect();

    for handle in handles {
        let seen = handle.join().expect("thread completes");
        assert!((1..=8).contains(&seen));
    }
    assert_eq!(catalog.len(), 8);
}

#[test]
fn registered_templates_drive_reports() {
    let catalog = Arc::new(ProfileCatalog::with_builtin_profiles());
    catalog.add_profile_type(qa_engineer()).expect("valid template");
    let mapper = crate::assessment::AssessmentMapper::new(catalog);

    let report = mapper
        .generate_report_at(
            CandidateId::from("c-42"),
            &ProfileId::from("qa_engineer"),
            &[
                assessment("written-1", AssessmentType::Written, 90.0, 0),
                assessment("tech-1", AssessmentType::Technical, 70.0, 0),
            ],
            now(),
        )
        .expect("template registered");

    assert_eq!(report.profile_type, "QA Engineer");
    // technical 80 * 0.7 + communication 90 * 0.3
    assert_eq!(report.overall_score, 83);
}

#[test]
fn loads_additional_templates_from_json() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let payload = serde_json::to_string(&vec![qa_engineer()]).expect("serializes");
    file.write_all(payload.as_bytes()).expect("write catalog");

    let catalog = ProfileCatalog::with_builtin_profiles();
    let loaded = catalog
        .load_profiles_from_path(file.path())
        .expect("catalog loads");

    assert_eq!(loaded, 1);
    assert_eq!(catalog.len(), 6);
    assert_eq!(
        catalog.get_profile_type(&ProfileId::from("qa_engineer")),
        Some(qa_engineer())
    );
}

#[test]
fn template_files_use_camel_case_fields() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{
            "id": "support_lead",
            "name": "Support Lead",
            "category": "management",
            "requiredAssessments": ["communication", "behavioral"],
            "skillMappings": [{{
                "skillName": "Empathy",
                "skillCategory": "confidence",
                "assessmentTypes": ["behavioral"],
                "weightage": 1.0,
                "minRequired": 70
            }}],
            "weightage": {{ "technical": 0.2, "communication": 0.5, "confidence": 0.3 }}
        }}]"#
    )
    .expect("write catalog");

    let catalog = ProfileCatalog::empty();
    assert_eq!(catalog.load_profiles_from_path(file.path()).expect("loads"), 1);
    let profile = catalog
        .get_profile_type(&ProfileId::from("support_lead"))
        .expect("registered");
    assert_eq!(profile.skill_mappings[0].min_required, 70);
    assert_eq!(
        profile.required_assessments,
        vec![AssessmentType::Communication, AssessmentType::Behavioral]
    );
}

#[test]
fn unreadable_or_malformed_files_surface_errors() {
    let catalog = ProfileCatalog::empty();
    let missing = catalog.load_profiles_from_path("/nonexistent/hirego/profiles.json");
    assert!(matches!(missing, Err(CatalogError::Read { .. })));

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"{ not json").expect("write catalog");
    let malformed = catalog.load_profiles_from_path(file.path());
    assert!(matches!(malformed, Err(CatalogError::Parse { .. })));
    assert!(catalog.is_empty());
}
