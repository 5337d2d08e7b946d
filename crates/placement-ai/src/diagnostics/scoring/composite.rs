//! Composite indices built on top of the domain tallies.
//!
//! Readiness and risk are weighted blends over whatever evidence the student
//! actually supplied: each missing signal removes its weight from the
//! denominator instead of counting as zero, so a sparse submission is scored
//! on what it contains rather than punished for what it omits.

use crate::diagnostics::domain::{DiagnosticData, ScoringPolicy};

use super::domains::DomainTally;

/// Readiness blend weights, renormalized over the signals present.
const W_MASTERY: f64 = 0.50;
const W_MINI_TEST: f64 = 0.25;
const W_EXAM_CONFIDENCE: f64 = 0.10;
const W_AUTONOMY: f64 = 0.05;
const W_CALM: f64 = 0.10;

/// Flat readiness bonus when the mini-test finished within the allotted time.
const ON_TIME_BONUS: f64 = 3.0;

/// Risk blend weights; the coverage gap is always present, so the
/// denominator never reaches zero.
const W_ERROR_PRESSURE: f64 = 0.25;
const W_FRICTION: f64 = 0.25;
const W_STRESS: f64 = 0.20;
const W_CONFIDENCE_GAP: f64 = 0.15;
const W_COVERAGE_GAP: f64 = 0.15;

/// Error tags per rated skill at which error pressure saturates.
const ERROR_SATURATION: f64 = 2.0;

/// Weight applied to domains a policy does not mention.
const DEFAULT_DOMAIN_WEIGHT: f64 = 1.0;

const MINI_TEST_SCALE: f64 = 20.0;
const SELF_RATING_SCALE: f64 = 10.0;
const SKILL_RATING_SCALE: f64 = 4.0;

pub(crate) struct CompositeIndices {
    pub(crate) mastery: f64,
    pub(crate) coverage: f64,
    pub(crate) readiness: f64,
    pub(crate) risk: f64,
}

pub(crate) fn compute_indices(
    tallies: &[DomainTally],
    data: &DiagnosticData,
    policy: Option<&ScoringPolicy>,
) -> CompositeIndices {
    let mastery = mastery_index(tallies, policy);
    let coverage = coverage_index(tallies);
    let readiness = readiness_score(mastery, data);
    let risk = risk_index(data, coverage);

    CompositeIndices {
        mastery,
        coverage,
        readiness,
        risk,
    }
}

/// Weighted mean of active domain scores. Inactive domains shed their weight,
/// and no active domain at all yields 0.
fn mastery_index(tallies: &[DomainTally], policy: Option<&ScoringPolicy>) -> f64 {
    let mut weighted = 0.0;
    let mut weight_total = 0.0;

    for tally in tallies {
        if let Some(score) = tally.score() {
            let weight = domain_weight(policy, &tally.domain);
            weighted += score * weight;
            weight_total += weight;
        }
    }

    if weight_total <= 0.0 {
        return 0.0;
    }

    (weighted / weight_total).clamp(0.0, 100.0)
}

fn domain_weight(policy: Option<&ScoringPolicy>, domain: &str) -> f64 {
    let weight = policy
        .and_then(|policy| policy.domain_weights.get(domain))
        .copied()
        .unwrap_or(DEFAULT_DOMAIN_WEIGHT);

    // Non-finite or negative weights would poison the blend; treat them as
    // excluding the domain.
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// Share of taxonomy skills carrying a mastery rating, 0-100. An empty grid
/// scores 0, not a division error.
fn coverage_index(tallies: &[DomainTally]) -> f64 {
    let total: usize = tallies.iter().map(|tally| tally.total).sum();
    if total == 0 {
        return 0.0;
    }
    let evaluated: usize = tallies.iter().map(|tally| tally.evaluated).sum();
    evaluated as f64 / total as f64 * 100.0
}

fn readiness_score(mastery_index: f64, data: &DiagnosticData) -> f64 {
    let mut weighted = mastery_index * W_MASTERY;
    let mut weight_total = W_MASTERY;

    let prep = &data.exam_prep;
    if let Some(mini_test) = &prep.mini_test {
        let pct = (mini_test.score / MINI_TEST_SCALE * 100.0).clamp(0.0, 100.0);
        weighted += pct * W_MINI_TEST;
        weight_total += W_MINI_TEST;
    }
    if let Some(confidence) = prep.self_ratings.exam_confidence {
        weighted += self_rating_pct(confidence) * W_EXAM_CONFIDENCE;
        weight_total += W_EXAM_CONFIDENCE;
    }
    if let Some(autonomy) = prep.self_ratings.study_autonomy {
        weighted += self_rating_pct(autonomy) * W_AUTONOMY;
        weight_total += W_AUTONOMY;
    }
    if let Some(stress) = prep.self_ratings.stress_level {
        weighted += (100.0 - self_rating_pct(stress)) * W_CALM;
        weight_total += W_CALM;
    }

    let mut readiness = weighted / weight_total;
    if prep
        .mini_test
        .as_ref()
        .map_or(false, |test| test.finished_on_time)
    {
        readiness += ON_TIME_BONUS;
    }

    readiness.clamp(0.0, 100.0)
}

fn risk_index(data: &DiagnosticData, coverage_index: f64) -> f64 {
    let mut weighted = (100.0 - coverage_index) * W_COVERAGE_GAP;
    let mut weight_total = W_COVERAGE_GAP;

    let mut started = 0usize;
    let mut error_tags = 0usize;
    let mut friction_sum = 0.0;
    let mut friction_count = 0usize;
    let mut confidence_sum = 0.0;
    let mut confidence_count = 0usize;

    for skill in data.all_skills() {
        if let Some(ratings) = skill.progress.ratings() {
            started += 1;
            error_tags += ratings.error_types.len();
            if let Some(friction) = ratings.friction {
                friction_sum += f64::from(friction);
                friction_count += 1;
            }
            if let Some(confidence) = ratings.confidence {
                confidence_sum += f64::from(confidence);
                confidence_count += 1;
            }
        }
    }

    if started > 0 {
        let pressure = (error_tags as f64 / started as f64 / ERROR_SATURATION).min(1.0);
        weighted += pressure * 100.0 * W_ERROR_PRESSURE;
        weight_total += W_ERROR_PRESSURE;
    }
    if friction_count > 0 {
        let friction_pct = friction_sum / friction_count as f64 / SKILL_RATING_SCALE * 100.0;
        weighted += friction_pct * W_FRICTION;
        weight_total += W_FRICTION;
    }
    if let Some(stress) = data.exam_prep.self_ratings.stress_level {
        weighted += self_rating_pct(stress) * W_STRESS;
        weight_total += W_STRESS;
    }
    if confidence_count > 0 {
        let confidence_pct = confidence_sum / confidence_count as f64 / SKILL_RATING_SCALE * 100.0;
        weighted += (100.0 - confidence_pct) * W_CONFIDENCE_GAP;
        weight_total += W_CONFIDENCE_GAP;
    }

    (weighted / weight_total).clamp(0.0, 100.0)
}

fn self_rating_pct(rating: u8) -> f64 {
    (f64::from(rating) / SELF_RATING_SCALE * 100.0).clamp(0.0, 100.0)
}
