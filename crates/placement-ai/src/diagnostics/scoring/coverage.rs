//! Programme coverage and the prerequisite readiness adjustment.
//!
//! Both computations need chapter context the caller may not have, so both
//! degrade silently: no selection or no catalogue means no coverage block,
//! and no metadata means no penalty.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::diagnostics::domain::{ChapterDefinition, ChaptersSelection, DiagnosticData, SkillMeta};

/// Penalty at mastery 0 for one core prerequisite in an unreached chapter.
const PREREQ_SKILL_PENALTY: f64 = 4.0;
/// Ceiling on the summed prerequisite penalty.
const PREREQ_PENALTY_CAP: f64 = 12.0;

const MASTERY_SCALE: f64 = 4.0;

/// How much of the programme the class has reached, and how much of the
/// covered part the student actually rated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgrammeCoverage {
    /// Covered plus in-progress chapters over the catalogue, 0-1.
    pub seen_chapter_ratio: f64,
    pub total_chapters: usize,
    pub seen_chapters: usize,
    pub in_progress_chapters: usize,
    /// Rated share of the skills in covered chapters, 0-1.
    pub evaluated_skill_ratio: f64,
}

pub(crate) fn programme_coverage(
    selection: Option<&ChaptersSelection>,
    chapters: Option<&[ChapterDefinition]>,
    data: &DiagnosticData,
) -> Option<ProgrammeCoverage> {
    let selection = selection?;
    let chapters = chapters?;
    if selection.is_empty() || chapters.is_empty() {
        return None;
    }

    let total_chapters = chapters.len();
    let seen_chapters = selection.seen_count();

    Some(ProgrammeCoverage {
        seen_chapter_ratio: seen_chapters as f64 / total_chapters as f64,
        total_chapters,
        seen_chapters,
        in_progress_chapters: selection.in_progress.len(),
        evaluated_skill_ratio: evaluated_skill_ratio(selection, chapters, data),
    })
}

/// Rated share of the skills belonging to chapters the student marked as
/// covered. No covered chapter, or covered chapters without skills, yields 0.
fn evaluated_skill_ratio(
    selection: &ChaptersSelection,
    chapters: &[ChapterDefinition],
    data: &DiagnosticData,
) -> f64 {
    let covered_skills: BTreeSet<&str> = chapters
        .iter()
        .filter(|chapter| selection.selected.contains(&chapter.chapter_id))
        .flat_map(|chapter| chapter.skills.iter().map(String::as_str))
        .collect();

    if covered_skills.is_empty() {
        return 0.0;
    }

    let rated: BTreeSet<&str> = data
        .all_skills()
        .filter(|skill| skill.is_evaluated())
        .map(|skill| skill.skill_id.as_str())
        .collect();

    let evaluated = covered_skills.intersection(&rated).count();
    evaluated as f64 / covered_skills.len() as f64
}

/// Readiness points to withhold for weak core prerequisites sitting in
/// chapters the class has not reached.
///
/// Each evaluated core prerequisite in a not-yet chapter contributes
/// proportionally to its mastery gap and the sum is capped, so one student
/// cannot be pushed to the floor by a long tail of unseen chapters. Full
/// mastery contributes exactly nothing.
pub(crate) fn prerequisite_penalty(
    selection: Option<&ChaptersSelection>,
    skill_meta: Option<&[SkillMeta]>,
    data: &DiagnosticData,
) -> f64 {
    let selection = match selection {
        Some(selection) => selection,
        None => return 0.0,
    };
    let skill_meta = match skill_meta {
        Some(meta) => meta,
        None => return 0.0,
    };
    if selection.not_yet.is_empty() {
        return 0.0;
    }

    let mut mastery_by_skill: HashMap<&str, u8> = HashMap::new();
    for skill in data.all_skills() {
        if let Some(mastery) = skill.mastery() {
            mastery_by_skill.insert(skill.skill_id.as_str(), mastery);
        }
    }

    let mut penalty = 0.0;
    for meta in skill_meta {
        if !meta.is_core_prerequisite() || !selection.not_yet.contains(&meta.chapter_id) {
            continue;
        }
        if let Some(mastery) = mastery_by_skill.get(meta.skill_id.as_str()) {
            penalty += PREREQ_SKILL_PENALTY * (1.0 - f64::from(*mastery) / MASTERY_SCALE);
        }
    }

    penalty.min(PREREQ_PENALTY_CAP)
}
