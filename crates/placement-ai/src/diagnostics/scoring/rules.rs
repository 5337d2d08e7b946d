//! Alert and inconsistency battery.
//!
//! Every rule evaluates independently: input one rule cannot read silences
//! that rule alone and never blocks the others. Firing order is fixed so the
//! result lists stay deterministic.

use serde::{Deserialize, Serialize};

use crate::diagnostics::domain::{ChaptersSelection, DiagnosticData};

use super::coverage::ProgrammeCoverage;

/// Seen-chapter ratio strictly below this flags the programme as not covered.
const PROGRAMME_COVERED_MIN_RATIO: f64 = 0.30;
/// Evaluated-skill ratio strictly below this flags covered chapters as
/// unassessed.
const COVERED_ASSESSED_MIN_RATIO: f64 = 0.20;
/// Declared 0-20 average at or above which mastery gets cross-checked.
const HIGH_DECLARED_AVERAGE: f64 = 14.0;
/// Mastery index under which a high self-report becomes contradictory.
const LOW_MASTERY_INDEX: f64 = 40.0;
/// Mean skill confidence (0..=4) considered high.
const HIGH_CONFIDENCE_MEAN: f64 = 3.0;
/// Confidence ratings needed before the mean is worth checking.
const MIN_CONFIDENCE_SAMPLES: usize = 2;
/// Studied-but-unrated skills tolerated before the integrity rule fires.
const STUDIED_NO_MASTERY_MIN: usize = 2;

const DECLARED_AVERAGE_SCALE: f64 = 20.0;

/// Coverage alerts, serialized under their stable rule code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageAlert {
    /// The class has covered less than 30% of the programme; indices rest on
    /// too narrow a base for confident placement.
    ProgramNotCovered { seen_chapter_ratio: f64 },
    /// Chapters were marked covered but almost none of their skills carry a
    /// rating, so coverage ratios overstate what was measured.
    SelectedChaptersUnassessed { evaluated_skill_ratio: f64 },
}

impl CoverageAlert {
    pub fn summary(&self) -> String {
        match self {
            CoverageAlert::ProgramNotCovered { seen_chapter_ratio } => format!(
                "programme coverage too thin ({:.0}% of chapters seen)",
                seen_chapter_ratio * 100.0
            ),
            CoverageAlert::SelectedChaptersUnassessed {
                evaluated_skill_ratio,
            } => format!(
                "covered chapters barely assessed ({:.0}% of their skills rated)",
                evaluated_skill_ratio * 100.0
            ),
        }
    }
}

/// Contradictions between self-reports and measured signals, serialized
/// under their stable rule code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Inconsistency {
    /// Declared class average of 14+/20 against a sub-40 mastery index.
    HighAverageLowMastery {
        declared_average: f64,
        mastery_index: f64,
    },
    /// Two or more skills reported as studied but never rated.
    StudiedNoMastery { skill_count: usize },
    /// Mean skill confidence of 3+/4 against a sub-40 mastery index.
    ConfidenceMasteryGap {
        mean_confidence: f64,
        mastery_index: f64,
    },
}

impl Inconsistency {
    pub fn summary(&self) -> String {
        match self {
            Inconsistency::HighAverageLowMastery {
                declared_average,
                mastery_index,
            } => format!(
                "declared average {declared_average:.1}/20 contradicts mastery index {mastery_index:.0}"
            ),
            Inconsistency::StudiedNoMastery { skill_count } => {
                format!("{skill_count} skill(s) marked studied without any rating")
            }
            Inconsistency::ConfidenceMasteryGap {
                mean_confidence,
                mastery_index,
            } => format!(
                "mean confidence {mean_confidence:.1}/4 contradicts mastery index {mastery_index:.0}"
            ),
        }
    }
}

pub(crate) fn coverage_alerts(
    coverage: Option<&ProgrammeCoverage>,
    selection: Option<&ChaptersSelection>,
) -> Vec<CoverageAlert> {
    let mut alerts = Vec::new();
    let coverage = match coverage {
        Some(coverage) => coverage,
        None => return alerts,
    };

    if coverage.seen_chapter_ratio < PROGRAMME_COVERED_MIN_RATIO {
        alerts.push(CoverageAlert::ProgramNotCovered {
            seen_chapter_ratio: coverage.seen_chapter_ratio,
        });
    }

    let has_covered_chapters = selection.map_or(false, |selection| !selection.selected.is_empty());
    if has_covered_chapters && coverage.evaluated_skill_ratio < COVERED_ASSESSED_MIN_RATIO {
        alerts.push(CoverageAlert::SelectedChaptersUnassessed {
            evaluated_skill_ratio: coverage.evaluated_skill_ratio,
        });
    }

    alerts
}

pub(crate) fn detect_inconsistencies(
    data: &DiagnosticData,
    mastery_index: f64,
) -> Vec<Inconsistency> {
    let mut findings = Vec::new();

    if let Some(finding) = high_average_low_mastery(data, mastery_index) {
        findings.push(finding);
    }
    if let Some(finding) = studied_no_mastery(data) {
        findings.push(finding);
    }
    if let Some(finding) = confidence_mastery_gap(data, mastery_index) {
        findings.push(finding);
    }

    findings
}

fn high_average_low_mastery(data: &DiagnosticData, mastery_index: f64) -> Option<Inconsistency> {
    let declared = parse_declared_average(data.performance.declared_average.as_deref()?)?;
    if declared >= HIGH_DECLARED_AVERAGE && mastery_index < LOW_MASTERY_INDEX {
        return Some(Inconsistency::HighAverageLowMastery {
            declared_average: declared,
            mastery_index,
        });
    }
    None
}

/// Lenient 0-20 parse of the declared average. Tolerates surrounding
/// whitespace, a French decimal comma, and a trailing "/20"; anything else
/// silences the rule rather than failing the run.
fn parse_declared_average(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix("/20").unwrap_or(trimmed).trim();
    let value: f64 = trimmed.replace(',', ".").parse().ok()?;
    if (0.0..=DECLARED_AVERAGE_SCALE).contains(&value) {
        Some(value)
    } else {
        None
    }
}

fn studied_no_mastery(data: &DiagnosticData) -> Option<Inconsistency> {
    let skill_count = data
        .all_skills()
        .filter(|skill| skill.is_studied() && skill.mastery().is_none())
        .count();

    if skill_count >= STUDIED_NO_MASTERY_MIN {
        return Some(Inconsistency::StudiedNoMastery { skill_count });
    }
    None
}

fn confidence_mastery_gap(data: &DiagnosticData, mastery_index: f64) -> Option<Inconsistency> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for skill in data.all_skills() {
        if let Some(confidence) = skill.confidence() {
            sum += f64::from(confidence);
            count += 1;
        }
    }
    if count < MIN_CONFIDENCE_SAMPLES {
        return None;
    }

    let mean_confidence = sum / count as f64;
    if mean_confidence >= HIGH_CONFIDENCE_MEAN && mastery_index < LOW_MASTERY_INDEX {
        return Some(Inconsistency::ConfidenceMasteryGap {
            mean_confidence,
            mastery_index,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::parse_declared_average;

    #[test]
    fn parses_plain_and_french_notations() {
        assert_eq!(parse_declared_average("14"), Some(14.0));
        assert_eq!(parse_declared_average("14,5"), Some(14.5));
        assert_eq!(parse_declared_average(" 12.5/20 "), Some(12.5));
        assert_eq!(parse_declared_average("15/20"), Some(15.0));
    }

    #[test]
    fn rejects_out_of_scale_and_free_text() {
        assert_eq!(parse_declared_average("25"), None);
        assert_eq!(parse_declared_average("-3"), None);
        assert_eq!(parse_declared_average("quatorze"), None);
        assert_eq!(parse_declared_average(""), None);
    }
}
