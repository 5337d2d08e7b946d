//! Scoring pipeline for diagnostic submissions.
//!
//! `compute_scoring_v2` is the single entry point. It is deterministic, free
//! of side effects, and total over well-formed input: every optional input
//! degrades to a documented default instead of failing, and every index it
//! returns stays within 0-100.
//!
//! The stages run in a fixed order: per-domain tallies, composite indices,
//! programme coverage and the prerequisite adjustment, then the rule battery
//! and the data quality band.

mod composite;
mod coverage;
mod domains;
mod quality;
mod rules;

#[cfg(test)]
mod tests;

pub use coverage::ProgrammeCoverage;
pub use domains::DomainScore;
pub use quality::{DataQuality, QualityBand, QualityPolicy};
pub use rules::{CoverageAlert, Inconsistency};

use serde::{Deserialize, Serialize};

use super::domain::{ChapterDefinition, ChaptersSelection, DiagnosticData, ScoringPolicy, SkillMeta};

/// Optional context for a scoring run.
///
/// `Default` scores the bare skill grid: equal domain weights, no programme
/// coverage, no prerequisite adjustment. Definitions hand out a pre-filled
/// value through `DiagnosticDefinition::scoring_options`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringOptions {
    /// Domain weighting and tier cutoffs. `None` weighs every domain equally.
    pub policy: Option<ScoringPolicy>,
    /// Chapter progress reported by the student.
    pub chapters_selection: Option<ChaptersSelection>,
    /// Chapter catalogue of the active programme.
    pub chapters: Option<Vec<ChapterDefinition>>,
    /// Per-skill chapter membership and prerequisite flags.
    pub skill_meta: Option<Vec<SkillMeta>>,
}

/// Everything one scoring run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// One entry per submitted domain, inactive domains included.
    pub domain_scores: Vec<DomainScore>,
    /// Weighted mean of active domain scores, 0-100.
    pub mastery_index: f64,
    /// Share of taxonomy skills carrying a mastery rating, 0-100.
    pub coverage_index: f64,
    /// Composite readiness after the prerequisite adjustment, 0-100.
    pub readiness_score: f64,
    /// Composite risk, 0-100, higher is worse.
    pub risk_index: f64,
    /// Programme coverage, present only when both the chapter selection and
    /// the chapter catalogue were supplied and non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_programme: Option<ProgrammeCoverage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<CoverageAlert>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inconsistencies: Vec<Inconsistency>,
    pub data_quality: DataQuality,
}

/// Score one diagnostic submission.
pub fn compute_scoring_v2(data: &DiagnosticData, options: &ScoringOptions) -> ScoringResult {
    let tallies = domains::tally_domains(&data.competencies);
    let indices = composite::compute_indices(&tallies, data, options.policy.as_ref());

    let coverage_programme = coverage::programme_coverage(
        options.chapters_selection.as_ref(),
        options.chapters.as_deref(),
        data,
    );
    let penalty = coverage::prerequisite_penalty(
        options.chapters_selection.as_ref(),
        options.skill_meta.as_deref(),
        data,
    );
    let readiness_score = (indices.readiness - penalty).clamp(0.0, 100.0);

    let alerts = rules::coverage_alerts(
        coverage_programme.as_ref(),
        options.chapters_selection.as_ref(),
    );
    let inconsistencies = rules::detect_inconsistencies(data, indices.mastery);

    let active_domains = tallies.iter().filter(|tally| tally.is_active()).count();
    let data_quality = QualityPolicy::default().classify(active_domains);

    ScoringResult {
        domain_scores: tallies.iter().map(domains::DomainTally::to_score).collect(),
        mastery_index: indices.mastery,
        coverage_index: indices.coverage,
        readiness_score,
        risk_index: indices.risk,
        coverage_programme,
        alerts,
        inconsistencies,
        data_quality,
    }
}
