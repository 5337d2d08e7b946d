//! Versioned diagnostic definitions.
//!
//! A definition bundles everything one (track, level) diagnostic needs: the
//! skill taxonomy per domain, the chapter catalogue, and the scoring policy.
//! Definitions are registered at first use and addressed by canonical key,
//! for example `maths-premiere-p2`; the unversioned keys that predate the
//! staged pipeline still resolve through an alias table.

mod maths;
mod nsi;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use super::domain::{
    ChapterDefinition, Level, PrerequisiteLevel, ScoringPolicy, SkillMeta, TierCutoffs,
    TierThresholds, Track,
};
use super::scoring::ScoringOptions;

/// Pipeline stage every registered definition belongs to.
pub const DIAGNOSTIC_STAGE: &str = "p2";

const WEIGHT_SUM_MIN: f64 = 0.95;
const WEIGHT_SUM_MAX: f64 = 1.05;

/// One skill slot in a definition's taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTemplate {
    pub skill_id: &'static str,
    pub label: &'static str,
    pub prerequisite: bool,
    pub prerequisite_level: Option<PrerequisiteLevel>,
}

impl SkillTemplate {
    const fn new(skill_id: &'static str, label: &'static str) -> Self {
        Self {
            skill_id,
            label,
            prerequisite: false,
            prerequisite_level: None,
        }
    }

    /// Foundational skill whose absence penalizes readiness when its chapter
    /// has not been reached in class.
    const fn core(skill_id: &'static str, label: &'static str) -> Self {
        Self {
            skill_id,
            label,
            prerequisite: true,
            prerequisite_level: Some(PrerequisiteLevel::Core),
        }
    }

    const fn supporting(skill_id: &'static str, label: &'static str) -> Self {
        Self {
            skill_id,
            label,
            prerequisite: true,
            prerequisite_level: Some(PrerequisiteLevel::Supporting),
        }
    }
}

/// Complete scoring contract for one (track, level) diagnostic.
#[derive(Debug, Clone)]
pub struct DiagnosticDefinition {
    pub key: &'static str,
    pub version: &'static str,
    pub label: &'static str,
    pub track: Track,
    pub level: Level,
    pub stage: &'static str,
    /// Domain id to the skill templates the questionnaire covers for it.
    pub skills: BTreeMap<&'static str, Vec<SkillTemplate>>,
    pub chapters: Vec<ChapterDefinition>,
    pub scoring_policy: ScoringPolicy,
}

impl DiagnosticDefinition {
    /// Per-skill chapter membership and prerequisite flags, derived from the
    /// taxonomy and the chapter catalogue. Skills outside any chapter are
    /// omitted.
    pub fn skill_meta(&self) -> Vec<SkillMeta> {
        let mut chapter_by_skill: HashMap<&str, &str> = HashMap::new();
        for chapter in &self.chapters {
            for skill_id in &chapter.skills {
                chapter_by_skill.insert(skill_id.as_str(), chapter.chapter_id.as_str());
            }
        }

        let mut meta = Vec::new();
        for templates in self.skills.values() {
            for template in templates {
                if let Some(chapter_id) = chapter_by_skill.get(template.skill_id) {
                    meta.push(SkillMeta {
                        skill_id: template.skill_id.to_string(),
                        chapter_id: (*chapter_id).to_string(),
                        prerequisite: template.prerequisite,
                        prerequisite_level: template.prerequisite_level,
                    });
                }
            }
        }
        meta
    }

    /// Ready-to-use scoring options carrying this definition's policy,
    /// chapters, and skill metadata. The chapter selection stays `None`
    /// until the caller fills in what the student reported.
    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            policy: Some(self.scoring_policy.clone()),
            chapters_selection: None,
            chapters: Some(self.chapters.clone()),
            skill_meta: Some(self.skill_meta()),
        }
    }

    /// Number of skills across all domains.
    pub fn skill_count(&self) -> usize {
        self.skills.values().map(Vec::len).sum()
    }
}

/// Raised when a key resolves to no registered definition, aliases included.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagnostic definition: {0}")]
pub struct UnknownDefinition(pub String);

/// Integrity violations caught when the registry is first built.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionIntegrityError {
    #[error("definition {field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("stage must be '{expected}', found '{found}'")]
    WrongStage {
        expected: &'static str,
        found: String,
    },
    #[error("skill taxonomy is empty")]
    EmptyTaxonomy,
    #[error("domain '{domain}' has no skill templates")]
    EmptyDomain { domain: String },
    #[error("duplicate skill id '{skill}'")]
    DuplicateSkill { skill: String },
    #[error("domain weights sum to {total:.3}, expected within [{WEIGHT_SUM_MIN}, {WEIGHT_SUM_MAX}]")]
    UnbalancedWeights { total: f64 },
    #[error("weight declared for '{domain}' which is not a taxonomy domain")]
    WeightWithoutDomain { domain: String },
    #[error("taxonomy domain '{domain}' has no weight")]
    DomainWithoutWeight { domain: String },
    #[error("chapter '{chapter}' is missing its {field}")]
    ChapterField {
        chapter: String,
        field: &'static str,
    },
    #[error("chapter '{chapter}' lists no skills")]
    ChapterWithoutSkills { chapter: String },
    #[error("chapter '{chapter}' belongs to unknown domain '{domain}'")]
    ChapterDomain { chapter: String, domain: String },
    #[error("chapter '{chapter}' references unknown skill '{skill}'")]
    ChapterSkill { chapter: String, skill: String },
    #[error("duplicate chapter id '{chapter}'")]
    DuplicateChapter { chapter: String },
}

static DEFINITIONS: OnceLock<Vec<DiagnosticDefinition>> = OnceLock::new();
static ALIASES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn registry() -> &'static [DiagnosticDefinition] {
    DEFINITIONS.get_or_init(|| {
        let definitions = vec![
            maths::premiere(),
            maths::terminale(),
            nsi::premiere(),
            nsi::terminale(),
        ];
        for definition in &definitions {
            if let Err(err) = verify_definition(definition) {
                panic!("registered definition '{}' is invalid: {err}", definition.key);
            }
        }
        definitions
    })
}

fn alias_map() -> &'static HashMap<&'static str, &'static str> {
    ALIASES.get_or_init(|| {
        // Unversioned keys used before definitions were staged.
        HashMap::from([
            ("maths-premiere", "maths-premiere-p2"),
            ("maths-terminale", "maths-terminale-p2"),
            ("nsi-premiere", "nsi-premiere-p2"),
            ("nsi-terminale", "nsi-terminale-p2"),
        ])
    })
}

/// Canonical key for a (track, level) pair at the current stage.
pub fn definition_key(track: Track, level: Level) -> String {
    format!("{}-{}-{}", track.slug(), level.slug(), DIAGNOSTIC_STAGE)
}

/// Canonical keys of every registered definition, in registration order.
pub fn list_definition_keys() -> Vec<&'static str> {
    registry().iter().map(|definition| definition.key).collect()
}

/// Look up a definition by canonical key or legacy alias.
pub fn find_definition(key: &str) -> Option<&'static DiagnosticDefinition> {
    let canonical = alias_map().get(key).copied().unwrap_or(key);
    registry()
        .iter()
        .find(|definition| definition.key == canonical)
}

/// Failing variant of [`find_definition`] for callers that treat a missing
/// definition as an error.
pub fn get_definition(key: &str) -> Result<&'static DiagnosticDefinition, UnknownDefinition> {
    find_definition(key).ok_or_else(|| UnknownDefinition(key.to_string()))
}

/// Structural checks applied to every definition at registration.
pub fn verify_definition(
    definition: &DiagnosticDefinition,
) -> Result<(), DefinitionIntegrityError> {
    if definition.key.trim().is_empty() {
        return Err(DefinitionIntegrityError::EmptyField { field: "key" });
    }
    if definition.version.trim().is_empty() {
        return Err(DefinitionIntegrityError::EmptyField { field: "version" });
    }
    if definition.label.trim().is_empty() {
        return Err(DefinitionIntegrityError::EmptyField { field: "label" });
    }
    if definition.stage != DIAGNOSTIC_STAGE {
        return Err(DefinitionIntegrityError::WrongStage {
            expected: DIAGNOSTIC_STAGE,
            found: definition.stage.to_string(),
        });
    }

    if definition.skills.is_empty() {
        return Err(DefinitionIntegrityError::EmptyTaxonomy);
    }
    let mut skill_ids: HashSet<&str> = HashSet::new();
    for (domain, templates) in &definition.skills {
        if templates.is_empty() {
            return Err(DefinitionIntegrityError::EmptyDomain {
                domain: (*domain).to_string(),
            });
        }
        for template in templates {
            if !skill_ids.insert(template.skill_id) {
                return Err(DefinitionIntegrityError::DuplicateSkill {
                    skill: template.skill_id.to_string(),
                });
            }
        }
    }

    let weights = &definition.scoring_policy.domain_weights;
    let total: f64 = weights.values().sum();
    if !(WEIGHT_SUM_MIN..=WEIGHT_SUM_MAX).contains(&total) {
        return Err(DefinitionIntegrityError::UnbalancedWeights { total });
    }
    for domain in weights.keys() {
        if !definition.skills.contains_key(domain.as_str()) {
            return Err(DefinitionIntegrityError::WeightWithoutDomain {
                domain: domain.clone(),
            });
        }
    }
    for domain in definition.skills.keys() {
        if !weights.contains_key(*domain) {
            return Err(DefinitionIntegrityError::DomainWithoutWeight {
                domain: (*domain).to_string(),
            });
        }
    }

    let mut chapter_ids: HashSet<&str> = HashSet::new();
    for chapter in &definition.chapters {
        if chapter.chapter_id.trim().is_empty() {
            return Err(DefinitionIntegrityError::ChapterField {
                chapter: chapter.label.clone(),
                field: "chapter_id",
            });
        }
        if chapter.label.trim().is_empty() {
            return Err(DefinitionIntegrityError::ChapterField {
                chapter: chapter.chapter_id.clone(),
                field: "label",
            });
        }
        if chapter.domain_id.trim().is_empty() {
            return Err(DefinitionIntegrityError::ChapterField {
                chapter: chapter.chapter_id.clone(),
                field: "domain_id",
            });
        }
        if !chapter_ids.insert(chapter.chapter_id.as_str()) {
            return Err(DefinitionIntegrityError::DuplicateChapter {
                chapter: chapter.chapter_id.clone(),
            });
        }
        if !definition.skills.contains_key(chapter.domain_id.as_str()) {
            return Err(DefinitionIntegrityError::ChapterDomain {
                chapter: chapter.chapter_id.clone(),
                domain: chapter.domain_id.clone(),
            });
        }
        if chapter.skills.is_empty() {
            return Err(DefinitionIntegrityError::ChapterWithoutSkills {
                chapter: chapter.chapter_id.clone(),
            });
        }
        for skill_id in &chapter.skills {
            if !skill_ids.contains(skill_id.as_str()) {
                return Err(DefinitionIntegrityError::ChapterSkill {
                    chapter: chapter.chapter_id.clone(),
                    skill: skill_id.clone(),
                });
            }
        }
    }

    Ok(())
}

fn chapter(
    chapter_id: &str,
    label: &str,
    description: &str,
    domain_id: &str,
    skills: &[&str],
) -> ChapterDefinition {
    ChapterDefinition {
        chapter_id: chapter_id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        domain_id: domain_id.to_string(),
        skills: skills.iter().map(|skill| (*skill).to_string()).collect(),
    }
}

fn policy(weights: &[(&str, f64)], thresholds: TierThresholds) -> ScoringPolicy {
    ScoringPolicy {
        domain_weights: weights
            .iter()
            .map(|(domain, weight)| ((*domain).to_string(), *weight))
            .collect(),
        thresholds,
    }
}

const fn tiers(
    confirmed_readiness: f64,
    confirmed_risk: f64,
    conditional_readiness: f64,
    conditional_risk: f64,
) -> TierThresholds {
    TierThresholds {
        confirmed: TierCutoffs {
            min_readiness: confirmed_readiness,
            max_risk: confirmed_risk,
        },
        conditional: TierCutoffs {
            min_readiness: conditional_readiness,
            max_risk: conditional_risk,
        },
    }
}
