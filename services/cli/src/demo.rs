use std::collections::{BTreeMap, BTreeSet};

use chrono::Local;
use clap::Args;
use placement_ai::diagnostics::definitions::{get_definition, DiagnosticDefinition};
use placement_ai::diagnostics::domain::{
    ChaptersSelection, DiagnosticData, ExamPrepEvidence, Level, MethodologyProfile,
    MiniTestResult, RatedProgress, SchoolContext, SelfRatings, SelfReportedPerformance,
    SkillAssessment, SkillProgress, StudentIdentity, Track,
};
use placement_ai::diagnostics::scoring::{compute_scoring_v2, ScoringResult};
use placement_ai::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the raw scoring result as JSON instead of the readable report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { json } = args;

    let definition = get_definition("maths-premiere")?;
    let data = sample_diagnostic();
    let mut options = definition.scoring_options();
    options.chapters_selection = Some(sample_selection());

    let result = compute_scoring_v2(&data, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Diagnostic scoring demo (mid-year première sample)\n");
    render_result(&data, definition, &result);
    Ok(())
}

pub(crate) fn render_result(
    data: &DiagnosticData,
    definition: &DiagnosticDefinition,
    result: &ScoringResult,
) {
    println!(
        "Student: {} {} | {} {} | {}",
        data.student.first_name,
        data.student.last_name,
        data.school.track.label(),
        data.school.level.label(),
        data.school.establishment
    );
    println!("Definition: {} (v{})", definition.key, definition.version);

    println!("\nDomain scores");
    for domain in &result.domain_scores {
        match domain.score {
            Some(score) => println!(
                "- {}: {:.0}/100 ({}/{} skills rated)",
                domain.domain, score, domain.evaluated_count, domain.total_count
            ),
            None => println!(
                "- {}: too few rated skills ({}/{})",
                domain.domain, domain.evaluated_count, domain.total_count
            ),
        }
    }

    println!("\nIndices");
    println!("- Mastery {:.1}/100", result.mastery_index);
    println!("- Coverage {:.1}/100", result.coverage_index);
    println!("- Readiness {:.1}/100", result.readiness_score);
    println!("- Risk {:.1}/100", result.risk_index);

    if let Some(coverage) = &result.coverage_programme {
        println!("\nProgramme coverage");
        println!(
            "- {}/{} chapters seen ({:.0}%), {} in progress",
            coverage.seen_chapters,
            coverage.total_chapters,
            coverage.seen_chapter_ratio * 100.0,
            coverage.in_progress_chapters
        );
        println!(
            "- {:.0}% of covered-chapter skills rated",
            coverage.evaluated_skill_ratio * 100.0
        );
    }

    if result.alerts.is_empty() {
        println!("\nCoverage alerts: none");
    } else {
        println!("\nCoverage alerts");
        for alert in &result.alerts {
            println!("- {}", alert.summary());
        }
    }

    if result.inconsistencies.is_empty() {
        println!("\nInconsistencies: none");
    } else {
        println!("\nInconsistencies");
        for finding in &result.inconsistencies {
            println!("- {}", finding.summary());
        }
    }

    println!(
        "\nData quality: {} ({} active domains)",
        result.data_quality.quality.label(),
        result.data_quality.active_domains
    );
}

fn sample_diagnostic() -> DiagnosticData {
    let mut competencies = BTreeMap::new();
    competencies.insert(
        "algebra".to_string(),
        vec![
            studied("second-degre", "Polynômes du second degré", 3, Some(3), None, &[]),
            studied(
                "calcul-litteral",
                "Calcul littéral et équations",
                2,
                Some(2),
                Some(2),
                &["calcul"],
            ),
            in_progress(
                "inequations",
                "Inéquations et tableaux de signes",
                Some(1),
                Some(3),
                &["signes"],
            ),
            in_progress(
                "suites-numeriques",
                "Suites arithmétiques et géométriques",
                None,
                None,
                &[],
            ),
        ],
    );
    competencies.insert(
        "analysis".to_string(),
        vec![
            studied("derivation", "Dérivation et nombre dérivé", 2, Some(2), None, &[]),
            studied("variations", "Variations et extremums", 3, Some(3), None, &[]),
            not_studied("exponentielle", "Fonction exponentielle"),
            studied(
                "fonctions-reference",
                "Fonctions de référence",
                2,
                None,
                Some(1),
                &[],
            ),
        ],
    );
    competencies.insert(
        "geometry".to_string(),
        vec![
            studied(
                "produit-scalaire",
                "Produit scalaire dans le plan",
                1,
                Some(1),
                None,
                &[],
            ),
            unknown("geometrie-reperee", "Géométrie repérée"),
            studied("trigonometrie", "Trigonométrie", 1, Some(1), None, &["formules"]),
        ],
    );
    competencies.insert(
        "probabilities".to_string(),
        vec![
            not_studied("probabilites-conditionnelles", "Probabilités conditionnelles"),
            not_studied("variables-aleatoires", "Variables aléatoires réelles"),
            studied("statistiques", "Statistiques et échantillonnage", 2, None, None, &[]),
        ],
    );

    DiagnosticData {
        student: StudentIdentity {
            first_name: "Camille".to_string(),
            last_name: "Roussel".to_string(),
            email: Some("camille.roussel@example.fr".to_string()),
        },
        school: SchoolContext {
            establishment: "Lycée Émile Zola".to_string(),
            track: Track::Maths,
            level: Level::Premiere,
            class_name: Some("1G2".to_string()),
        },
        performance: SelfReportedPerformance {
            declared_average: Some("13,5".to_string()),
            declared_rank: Some("8/32".to_string()),
        },
        competencies,
        exam_prep: ExamPrepEvidence {
            mini_test: Some(MiniTestResult {
                score: 11.5,
                duration_minutes: Some(22),
                finished_on_time: true,
            }),
            self_ratings: SelfRatings {
                exam_confidence: Some(6),
                study_autonomy: Some(5),
                stress_level: Some(6),
            },
        },
        methodology: MethodologyProfile {
            study_methods: vec!["fiches".to_string(), "annales".to_string()],
            ambition: Some("mention bien".to_string()),
            weekly_study_hours: Some(4),
        },
        submitted_at: Some(Local::now().naive_local()),
    }
}

fn sample_selection() -> ChaptersSelection {
    ChaptersSelection {
        selected: chapter_set(&["ch-m1-second-degre", "ch-m1-derivation", "ch-m1-fonctions"]),
        in_progress: chapter_set(&["ch-m1-suites"]),
        not_yet: chapter_set(&[
            "ch-m1-exponentielle",
            "ch-m1-produit-scalaire",
            "ch-m1-geometrie-reperee",
            "ch-m1-probabilites",
            "ch-m1-variables-aleatoires",
        ]),
    }
}

fn chapter_set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}

fn studied(
    skill_id: &str,
    label: &str,
    mastery: u8,
    confidence: Option<u8>,
    friction: Option<u8>,
    errors: &[&str],
) -> SkillAssessment {
    SkillAssessment {
        skill_id: skill_id.to_string(),
        label: label.to_string(),
        progress: SkillProgress::Studied(ratings(Some(mastery), confidence, friction, errors)),
    }
}

fn in_progress(
    skill_id: &str,
    label: &str,
    mastery: Option<u8>,
    friction: Option<u8>,
    errors: &[&str],
) -> SkillAssessment {
    SkillAssessment {
        skill_id: skill_id.to_string(),
        label: label.to_string(),
        progress: SkillProgress::InProgress(ratings(mastery, None, friction, errors)),
    }
}

fn not_studied(skill_id: &str, label: &str) -> SkillAssessment {
    SkillAssessment {
        skill_id: skill_id.to_string(),
        label: label.to_string(),
        progress: SkillProgress::NotStudied,
    }
}

fn unknown(skill_id: &str, label: &str) -> SkillAssessment {
    SkillAssessment {
        skill_id: skill_id.to_string(),
        label: label.to_string(),
        progress: SkillProgress::Unknown,
    }
}

fn ratings(
    mastery: Option<u8>,
    confidence: Option<u8>,
    friction: Option<u8>,
    errors: &[&str],
) -> RatedProgress {
    RatedProgress {
        mastery,
        confidence,
        friction,
        error_types: errors.iter().map(|tag| (*tag).to_string()).collect(),
        evidence: String::new(),
    }
}
