use super::common::*;
use crate::diagnostics::scoring::{compute_scoring_v2, ScoringOptions};

fn programme_data() -> crate::diagnostics::domain::DiagnosticData {
    diagnostic(domains(vec![
        ("algebra", vec![studied("alg-1", 3), studied("alg-2", 3)]),
        ("analysis", vec![studied("ana-1", 3), studied("ana-2", 3)]),
        ("geometry", vec![not_studied("geo-1")]),
        ("probabilities", vec![not_studied("pro-1")]),
    ]))
}

#[test]
fn coverage_block_requires_both_selection_and_catalogue() {
    let data = programme_data();

    let neither = compute_scoring_v2(&data, &ScoringOptions::default());
    assert!(neither.coverage_programme.is_none());

    let selection_only = ScoringOptions {
        chapters_selection: Some(selection(&["ch1"], &[], &[])),
        ..ScoringOptions::default()
    };
    assert!(compute_scoring_v2(&data, &selection_only)
        .coverage_programme
        .is_none());

    let catalogue_only = ScoringOptions {
        chapters: Some(programme_chapters()),
        ..ScoringOptions::default()
    };
    assert!(compute_scoring_v2(&data, &catalogue_only)
        .coverage_programme
        .is_none());

    let both = coverage_options(selection(&["ch1"], &[], &[]), programme_chapters());
    assert!(compute_scoring_v2(&data, &both).coverage_programme.is_some());
}

#[test]
fn empty_selection_or_catalogue_suppresses_the_block() {
    let data = programme_data();

    let empty_selection = coverage_options(selection(&[], &[], &[]), programme_chapters());
    assert!(compute_scoring_v2(&data, &empty_selection)
        .coverage_programme
        .is_none());

    let empty_catalogue = coverage_options(selection(&["ch1"], &[], &[]), Vec::new());
    assert!(compute_scoring_v2(&data, &empty_catalogue)
        .coverage_programme
        .is_none());
}

#[test]
fn seen_ratio_spans_zero_to_one() {
    let data = programme_data();

    let half = coverage_options(selection(&["ch1", "ch2"], &[], &[]), programme_chapters());
    let coverage = compute_scoring_v2(&data, &half)
        .coverage_programme
        .expect("coverage present");
    assert_eq!(coverage.seen_chapter_ratio, 0.5);
    assert_eq!(coverage.seen_chapters, 2);
    assert_eq!(coverage.total_chapters, 4);

    let none_seen = coverage_options(
        selection(&[], &[], &["ch1", "ch2", "ch3", "ch4"]),
        programme_chapters(),
    );
    let coverage = compute_scoring_v2(&data, &none_seen)
        .coverage_programme
        .expect("coverage present");
    assert_eq!(coverage.seen_chapter_ratio, 0.0);
    assert_eq!(coverage.seen_chapters, 0);

    let all_seen = coverage_options(
        selection(&["ch1", "ch2", "ch3", "ch4"], &[], &[]),
        programme_chapters(),
    );
    let coverage = compute_scoring_v2(&data, &all_seen)
        .coverage_programme
        .expect("coverage present");
    assert_eq!(coverage.seen_chapter_ratio, 1.0);
}

#[test]
fn in_progress_chapters_count_as_seen() {
    let data = programme_data();
    let options = coverage_options(selection(&["ch1"], &["ch2"], &["ch3"]), programme_chapters());

    let coverage = compute_scoring_v2(&data, &options)
        .coverage_programme
        .expect("coverage present");

    assert_eq!(coverage.seen_chapters, 2);
    assert_eq!(coverage.in_progress_chapters, 1);
    assert_eq!(coverage.seen_chapter_ratio, 0.5);
}

#[test]
fn evaluated_skill_ratio_only_reads_covered_chapters() {
    // alg-1 rated, alg-2 untouched; ch1 is the only covered chapter.
    let data = diagnostic(domains(vec![
        ("algebra", vec![studied("alg-1", 2), not_studied("alg-2")]),
        ("analysis", vec![studied("ana-1", 3), studied("ana-2", 3)]),
    ]));
    let options = coverage_options(selection(&["ch1"], &["ch2"], &[]), programme_chapters());

    let coverage = compute_scoring_v2(&data, &options)
        .coverage_programme
        .expect("coverage present");

    assert_eq!(coverage.evaluated_skill_ratio, 0.5);
}

#[test]
fn evaluated_skill_ratio_is_zero_without_covered_chapters() {
    let data = programme_data();
    let options = coverage_options(selection(&[], &["ch1"], &[]), programme_chapters());

    let coverage = compute_scoring_v2(&data, &options)
        .coverage_programme
        .expect("coverage present");

    assert_eq!(coverage.evaluated_skill_ratio, 0.0);
}

#[test]
fn weak_core_prerequisite_in_unreached_chapter_lowers_readiness() {
    let mut data = programme_data();
    data.competencies
        .insert("geometry".to_string(), vec![studied("geo-1", 0)]);

    let baseline = ScoringOptions {
        skill_meta: Some(vec![core_meta("geo-1", "ch3")]),
        ..ScoringOptions::default()
    };
    let with_gap = ScoringOptions {
        chapters_selection: Some(selection(&["ch1", "ch2"], &[], &["ch3"])),
        chapters: Some(programme_chapters()),
        skill_meta: Some(vec![core_meta("geo-1", "ch3")]),
        ..ScoringOptions::default()
    };

    let baseline_result = compute_scoring_v2(&data, &baseline);
    let adjusted_result = compute_scoring_v2(&data, &with_gap);

    assert!(adjusted_result.readiness_score < baseline_result.readiness_score);
}

#[test]
fn mastered_prerequisite_costs_nothing() {
    let mut data = programme_data();
    data.competencies
        .insert("geometry".to_string(), vec![studied("geo-1", 4)]);

    let baseline = ScoringOptions::default();
    let with_gap = ScoringOptions {
        chapters_selection: Some(selection(&["ch1", "ch2"], &[], &["ch3"])),
        skill_meta: Some(vec![core_meta("geo-1", "ch3")]),
        ..ScoringOptions::default()
    };

    let baseline_result = compute_scoring_v2(&data, &baseline);
    let adjusted_result = compute_scoring_v2(&data, &with_gap);

    assert!(
        (baseline_result.readiness_score - adjusted_result.readiness_score).abs() <= 2.0,
        "full mastery must not cost readiness"
    );
}

#[test]
fn no_unreached_chapters_means_identical_readiness() {
    let data = programme_data();

    let baseline = ScoringOptions::default();
    let no_not_yet = ScoringOptions {
        chapters_selection: Some(selection(&["ch1", "ch2"], &["ch3", "ch4"], &[])),
        chapters: Some(programme_chapters()),
        skill_meta: Some(vec![core_meta("alg-1", "ch1"), core_meta("ana-1", "ch2")]),
        ..ScoringOptions::default()
    };

    let baseline_result = compute_scoring_v2(&data, &baseline);
    let adjusted_result = compute_scoring_v2(&data, &no_not_yet);

    assert_eq!(
        baseline_result.readiness_score,
        adjusted_result.readiness_score
    );
}

#[test]
fn penalty_ignores_non_core_and_unevaluated_skills() {
    let mut data = programme_data();
    data.competencies
        .insert("geometry".to_string(), vec![not_studied("geo-1")]);
    data.competencies
        .insert("probabilities".to_string(), vec![studied("pro-1", 0)]);

    let options = ScoringOptions {
        chapters_selection: Some(selection(&["ch1", "ch2"], &[], &["ch3", "ch4"])),
        chapters: Some(programme_chapters()),
        // geo-1 is unevaluated, pro-1 is not a core prerequisite.
        skill_meta: Some(vec![core_meta("geo-1", "ch3"), plain_meta("pro-1", "ch4")]),
        ..ScoringOptions::default()
    };
    let baseline = ScoringOptions::default();

    let baseline_result = compute_scoring_v2(&data, &baseline);
    let adjusted_result = compute_scoring_v2(&data, &options);

    assert_eq!(
        baseline_result.readiness_score,
        adjusted_result.readiness_score
    );
}

#[test]
fn prerequisite_penalty_is_capped() {
    let skills: Vec<_> = (0..6).map(|i| studied(&format!("geo-{i}"), 0)).collect();
    let mut data = diagnostic(domains(vec![
        ("algebra", vec![studied("alg-1", 4), studied("alg-2", 4)]),
        ("geometry", skills),
    ]));
    data.exam_prep.mini_test = Some(mini_test(16.0, false));

    let meta: Vec<_> = (0..6)
        .map(|i| core_meta(&format!("geo-{i}"), "ch-geo"))
        .collect();
    let options = ScoringOptions {
        chapters_selection: Some(selection(&[], &[], &["ch-geo"])),
        skill_meta: Some(meta),
        ..ScoringOptions::default()
    };

    let baseline_result = compute_scoring_v2(&data, &ScoringOptions::default());
    let adjusted_result = compute_scoring_v2(&data, &options);

    let drop = baseline_result.readiness_score - adjusted_result.readiness_score;
    assert!(drop > 0.0);
    assert!(drop <= 12.0 + 1e-9, "penalty exceeded its cap: {drop}");
}

#[test]
fn readiness_never_goes_negative_under_penalty() {
    let data = diagnostic(domains(vec![(
        "geometry",
        vec![studied("geo-1", 0), studied("geo-2", 0)],
    )]));

    let options = ScoringOptions {
        chapters_selection: Some(selection(&[], &[], &["ch-geo"])),
        skill_meta: Some(vec![core_meta("geo-1", "ch-geo"), core_meta("geo-2", "ch-geo")]),
        ..ScoringOptions::default()
    };

    let result = compute_scoring_v2(&data, &options);

    assert_eq!(result.readiness_score, 0.0);
}
