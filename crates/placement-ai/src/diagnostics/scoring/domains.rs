use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diagnostics::domain::SkillAssessment;

/// A domain needs this many rated skills before its score means anything.
pub(crate) const MIN_EVALUATED_FOR_ACTIVE: usize = 2;

const MASTERY_SCALE: f64 = 4.0;

/// Per-domain counts and score published in the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: String,
    /// Mean mastery rescaled to 0-100; `None` while the domain is inactive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub evaluated_count: usize,
    pub not_studied_count: usize,
    pub total_count: usize,
}

/// Working tally for one domain.
#[derive(Debug, Clone)]
pub(crate) struct DomainTally {
    pub(crate) domain: String,
    pub(crate) evaluated: usize,
    pub(crate) not_studied: usize,
    pub(crate) total: usize,
    mastery_sum: f64,
}

impl DomainTally {
    /// Inactive domains keep their counts but drop out of every weighted
    /// aggregate instead of dragging it toward zero.
    pub(crate) fn is_active(&self) -> bool {
        self.evaluated >= MIN_EVALUATED_FOR_ACTIVE
    }

    pub(crate) fn score(&self) -> Option<f64> {
        if !self.is_active() {
            return None;
        }
        Some(self.mastery_sum / self.evaluated as f64 / MASTERY_SCALE * 100.0)
    }

    pub(crate) fn to_score(&self) -> DomainScore {
        DomainScore {
            domain: self.domain.clone(),
            score: self.score(),
            evaluated_count: self.evaluated,
            not_studied_count: self.not_studied,
            total_count: self.total,
        }
    }
}

pub(crate) fn tally_domains(
    competencies: &BTreeMap<String, Vec<SkillAssessment>>,
) -> Vec<DomainTally> {
    competencies
        .iter()
        .map(|(domain, skills)| tally_domain(domain, skills))
        .collect()
}

fn tally_domain(domain: &str, skills: &[SkillAssessment]) -> DomainTally {
    let mut tally = DomainTally {
        domain: domain.to_string(),
        evaluated: 0,
        not_studied: 0,
        total: skills.len(),
        mastery_sum: 0.0,
    };

    for skill in skills {
        if skill.is_not_studied() {
            tally.not_studied += 1;
        }
        // A mastery of 0 still counts as evaluated; only a missing rating
        // keeps a started skill out of the tally.
        if let Some(mastery) = skill.mastery() {
            tally.evaluated += 1;
            tally.mastery_sum += f64::from(mastery);
        }
    }

    tally
}
