use std::collections::{BTreeMap, BTreeSet};

use crate::diagnostics::domain::{
    ChapterDefinition, ChaptersSelection, DiagnosticData, ExamPrepEvidence, Level,
    MethodologyProfile, MiniTestResult, PrerequisiteLevel, RatedProgress, SchoolContext,
    ScoringPolicy, SelfRatings, SelfReportedPerformance, SkillAssessment, SkillMeta,
    SkillProgress, StudentIdentity, TierCutoffs, TierThresholds, Track,
};
use crate::diagnostics::scoring::ScoringOptions;

pub(super) fn rated(mastery: Option<u8>) -> RatedProgress {
    RatedProgress {
        mastery,
        confidence: None,
        friction: None,
        error_types: BTreeSet::new(),
        evidence: String::new(),
    }
}

pub(super) fn studied(skill_id: &str, mastery: u8) -> SkillAssessment {
    SkillAssessment {
        skill_id: skill_id.to_string(),
        label: skill_id.to_string(),
        progress: SkillProgress::Studied(rated(Some(mastery))),
    }
}

pub(super) fn studied_unrated(skill_id: &str) -> SkillAssessment {
    SkillAssessment {
        skill_id: skill_id.to_string(),
        label: skill_id.to_string(),
        progress: SkillProgress::Studied(rated(None)),
    }
}

pub(super) fn in_progress(skill_id: &str, mastery: u8) -> SkillAssessment {
    SkillAssessment {
        skill_id: skill_id.to_string(),
        label: skill_id.to_string(),
        progress: SkillProgress::InProgress(rated(Some(mastery))),
    }
}

pub(super) fn in_progress_unrated(skill_id: &str) -> SkillAssessment {
    SkillAssessment {
        skill_id: skill_id.to_string(),
        label: skill_id.to_string(),
        progress: SkillProgress::InProgress(rated(None)),
    }
}

pub(super) fn not_studied(skill_id: &str) -> SkillAssessment {
    SkillAssessment {
        skill_id: skill_id.to_string(),
        label: skill_id.to_string(),
        progress: SkillProgress::NotStudied,
    }
}

pub(super) fn unknown(skill_id: &str) -> SkillAssessment {
    SkillAssessment {
        skill_id: skill_id.to_string(),
        label: skill_id.to_string(),
        progress: SkillProgress::Unknown,
    }
}

pub(super) fn with_confidence(mut skill: SkillAssessment, confidence: u8) -> SkillAssessment {
    match &mut skill.progress {
        SkillProgress::Studied(ratings) | SkillProgress::InProgress(ratings) => {
            ratings.confidence = Some(confidence);
        }
        SkillProgress::NotStudied | SkillProgress::Unknown => {
            panic!("cannot rate an untouched skill")
        }
    }
    skill
}

pub(super) fn with_friction(mut skill: SkillAssessment, friction: u8) -> SkillAssessment {
    match &mut skill.progress {
        SkillProgress::Studied(ratings) | SkillProgress::InProgress(ratings) => {
            ratings.friction = Some(friction);
        }
        SkillProgress::NotStudied | SkillProgress::Unknown => {
            panic!("cannot rate an untouched skill")
        }
    }
    skill
}

pub(super) fn with_errors(mut skill: SkillAssessment, errors: &[&str]) -> SkillAssessment {
    match &mut skill.progress {
        SkillProgress::Studied(ratings) | SkillProgress::InProgress(ratings) => {
            ratings.error_types = errors.iter().map(|error| (*error).to_string()).collect();
        }
        SkillProgress::NotStudied | SkillProgress::Unknown => {
            panic!("cannot tag errors on an untouched skill")
        }
    }
    skill
}

pub(super) fn domains(entries: Vec<(&str, Vec<SkillAssessment>)>) -> BTreeMap<String, Vec<SkillAssessment>> {
    entries
        .into_iter()
        .map(|(domain, skills)| (domain.to_string(), skills))
        .collect()
}

pub(super) fn diagnostic(competencies: BTreeMap<String, Vec<SkillAssessment>>) -> DiagnosticData {
    DiagnosticData {
        student: StudentIdentity {
            first_name: "Lina".to_string(),
            last_name: "Moreau".to_string(),
            email: None,
        },
        school: SchoolContext {
            establishment: "Lycée Jean Moulin".to_string(),
            track: Track::Maths,
            level: Level::Premiere,
            class_name: Some("1G3".to_string()),
        },
        performance: SelfReportedPerformance::default(),
        competencies,
        exam_prep: ExamPrepEvidence::default(),
        methodology: MethodologyProfile::default(),
        submitted_at: None,
    }
}

pub(super) fn mini_test(score: f64, finished_on_time: bool) -> MiniTestResult {
    MiniTestResult {
        score,
        duration_minutes: Some(20),
        finished_on_time,
    }
}

pub(super) fn self_ratings(
    exam_confidence: Option<u8>,
    study_autonomy: Option<u8>,
    stress_level: Option<u8>,
) -> SelfRatings {
    SelfRatings {
        exam_confidence,
        study_autonomy,
        stress_level,
    }
}

/// Four-chapter programme shared by the coverage tests: two algebra skills in
/// ch1, two analysis skills in ch2, one geometry skill in ch3, one
/// probability skill in ch4.
pub(super) fn programme_chapters() -> Vec<ChapterDefinition> {
    vec![
        chapter("ch1", "algebra", &["alg-1", "alg-2"]),
        chapter("ch2", "analysis", &["ana-1", "ana-2"]),
        chapter("ch3", "geometry", &["geo-1"]),
        chapter("ch4", "probabilities", &["pro-1"]),
    ]
}

pub(super) fn chapter(chapter_id: &str, domain_id: &str, skills: &[&str]) -> ChapterDefinition {
    ChapterDefinition {
        chapter_id: chapter_id.to_string(),
        label: chapter_id.to_string(),
        description: String::new(),
        domain_id: domain_id.to_string(),
        skills: skills.iter().map(|skill| (*skill).to_string()).collect(),
    }
}

pub(super) fn selection(
    selected: &[&str],
    in_progress: &[&str],
    not_yet: &[&str],
) -> ChaptersSelection {
    ChaptersSelection {
        selected: selected.iter().map(|id| (*id).to_string()).collect(),
        in_progress: in_progress.iter().map(|id| (*id).to_string()).collect(),
        not_yet: not_yet.iter().map(|id| (*id).to_string()).collect(),
    }
}

pub(super) fn core_meta(skill_id: &str, chapter_id: &str) -> SkillMeta {
    SkillMeta {
        skill_id: skill_id.to_string(),
        chapter_id: chapter_id.to_string(),
        prerequisite: true,
        prerequisite_level: Some(PrerequisiteLevel::Core),
    }
}

pub(super) fn plain_meta(skill_id: &str, chapter_id: &str) -> SkillMeta {
    SkillMeta {
        skill_id: skill_id.to_string(),
        chapter_id: chapter_id.to_string(),
        prerequisite: false,
        prerequisite_level: None,
    }
}

pub(super) fn weights_policy(weights: &[(&str, f64)]) -> ScoringPolicy {
    ScoringPolicy {
        domain_weights: weights
            .iter()
            .map(|(domain, weight)| ((*domain).to_string(), *weight))
            .collect(),
        thresholds: TierThresholds {
            confirmed: TierCutoffs {
                min_readiness: 65.0,
                max_risk: 35.0,
            },
            conditional: TierCutoffs {
                min_readiness: 45.0,
                max_risk: 55.0,
            },
        },
    }
}

pub(super) fn options_with_policy(weights: &[(&str, f64)]) -> ScoringOptions {
    ScoringOptions {
        policy: Some(weights_policy(weights)),
        ..ScoringOptions::default()
    }
}

pub(super) fn coverage_options(
    selection: ChaptersSelection,
    chapters: Vec<ChapterDefinition>,
) -> ScoringOptions {
    ScoringOptions {
        policy: None,
        chapters_selection: Some(selection),
        chapters: Some(chapters),
        skill_meta: None,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
