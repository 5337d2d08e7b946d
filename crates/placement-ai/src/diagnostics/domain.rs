use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Subject family a diagnostic applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Maths,
    Nsi,
}

impl Track {
    pub const fn label(self) -> &'static str {
        match self {
            Track::Maths => "Mathématiques",
            Track::Nsi => "NSI",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Track::Maths => "maths",
            Track::Nsi => "nsi",
        }
    }
}

/// Grade level a diagnostic targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Premiere,
    Terminale,
}

impl Level {
    pub const fn label(self) -> &'static str {
        match self {
            Level::Premiere => "Première",
            Level::Terminale => "Terminale",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Level::Premiere => "premiere",
            Level::Terminale => "terminale",
        }
    }
}

/// Self-ratings attached to a skill the student has at least started.
///
/// All ratings live on the questionnaire's 0..=4 scale; `None` means the
/// student skipped that slider. A missing mastery rating keeps the skill out
/// of every score even though the skill was started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedProgress {
    pub mastery: Option<u8>,
    pub confidence: Option<u8>,
    pub friction: Option<u8>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub error_types: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub evidence: String,
}

/// Study status reported for one skill.
///
/// Ratings only exist on the started variants, so a skill marked not studied
/// or unknown can never smuggle a mastery value into the scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SkillProgress {
    Studied(RatedProgress),
    InProgress(RatedProgress),
    NotStudied,
    Unknown,
}

impl SkillProgress {
    pub fn ratings(&self) -> Option<&RatedProgress> {
        match self {
            SkillProgress::Studied(ratings) | SkillProgress::InProgress(ratings) => Some(ratings),
            SkillProgress::NotStudied | SkillProgress::Unknown => None,
        }
    }

    pub const fn status_label(&self) -> &'static str {
        match self {
            SkillProgress::Studied(_) => "studied",
            SkillProgress::InProgress(_) => "in_progress",
            SkillProgress::NotStudied => "not_studied",
            SkillProgress::Unknown => "unknown",
        }
    }
}

/// Finest-grained assessed unit of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub skill_id: String,
    pub label: String,
    #[serde(flatten)]
    pub progress: SkillProgress,
}

impl SkillAssessment {
    pub fn mastery(&self) -> Option<u8> {
        self.progress.ratings().and_then(|ratings| ratings.mastery)
    }

    pub fn confidence(&self) -> Option<u8> {
        self.progress.ratings().and_then(|ratings| ratings.confidence)
    }

    pub fn friction(&self) -> Option<u8> {
        self.progress.ratings().and_then(|ratings| ratings.friction)
    }

    /// A skill counts toward scores once it carries a mastery rating.
    pub fn is_evaluated(&self) -> bool {
        self.mastery().is_some()
    }

    pub fn is_studied(&self) -> bool {
        matches!(self.progress, SkillProgress::Studied(_))
    }

    pub fn is_not_studied(&self) -> bool {
        matches!(self.progress, SkillProgress::NotStudied)
    }
}

/// Identity block of the submitting student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentIdentity {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

/// School context determining which definition scores the submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolContext {
    pub establishment: String,
    pub track: Track,
    pub level: Level,
    pub class_name: Option<String>,
}

/// Self-reported school results, kept as free text because students type
/// anything from "14,5" to "environ 12/20".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfReportedPerformance {
    pub declared_average: Option<String>,
    pub declared_rank: Option<String>,
}

/// Timed mini-test outcome on the French 0-20 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniTestResult {
    pub score: f64,
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub finished_on_time: bool,
}

/// End-of-questionnaire sliders, all on a 0..=10 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfRatings {
    pub exam_confidence: Option<u8>,
    pub study_autonomy: Option<u8>,
    pub stress_level: Option<u8>,
}

/// Exam-preparation evidence beyond the skill grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamPrepEvidence {
    pub mini_test: Option<MiniTestResult>,
    #[serde(default)]
    pub self_ratings: SelfRatings,
}

/// How the student works outside class; carried through for counselors, not
/// consumed by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodologyProfile {
    #[serde(default)]
    pub study_methods: Vec<String>,
    pub ambition: Option<String>,
    pub weekly_study_hours: Option<u8>,
}

/// One complete diagnostic submission as produced by the intake questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticData {
    pub student: StudentIdentity,
    pub school: SchoolContext,
    #[serde(default)]
    pub performance: SelfReportedPerformance,
    /// Domain id to the ordered skill assessments collected for it.
    #[serde(default)]
    pub competencies: BTreeMap<String, Vec<SkillAssessment>>,
    #[serde(default)]
    pub exam_prep: ExamPrepEvidence,
    #[serde(default)]
    pub methodology: MethodologyProfile,
    pub submitted_at: Option<NaiveDateTime>,
}

impl DiagnosticData {
    /// Every skill assessment across all domains, in domain order.
    pub fn all_skills(&self) -> impl Iterator<Item = &SkillAssessment> {
        self.competencies.values().flatten()
    }
}

/// Readiness and risk cutoffs for one placement tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierCutoffs {
    pub min_readiness: f64,
    pub max_risk: f64,
}

/// Tier cutoffs carried on a definition; the scorer passes them through
/// untouched, placement happens downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub confirmed: TierCutoffs,
    pub conditional: TierCutoffs,
}

/// Domain weighting and tier cutoffs attached to a definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Relative weight of each domain in the mastery index. Registered
    /// definitions keep the sum within 1.0 plus or minus 5%.
    pub domain_weights: BTreeMap<String, f64>,
    pub thresholds: TierThresholds,
}

/// Curriculum chapter grouping the skills it introduces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterDefinition {
    pub chapter_id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub domain_id: String,
    pub skills: Vec<String>,
}

/// Chapter progress reported by the student, three disjoint sets of
/// chapter ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaptersSelection {
    /// Chapters already covered in class.
    #[serde(default)]
    pub selected: BTreeSet<String>,
    /// Chapters the class is currently working through.
    #[serde(default)]
    pub in_progress: BTreeSet<String>,
    /// Chapters the class has not reached yet.
    #[serde(default)]
    pub not_yet: BTreeSet<String>,
}

impl ChaptersSelection {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.in_progress.is_empty() && self.not_yet.is_empty()
    }

    /// Chapters the student has at least opened, covered or in progress.
    pub fn seen_count(&self) -> usize {
        self.selected.union(&self.in_progress).count()
    }
}

/// How strongly a skill conditions later chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrerequisiteLevel {
    Core,
    Supporting,
}

/// Links a skill to its introducing chapter and flags foundational skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMeta {
    pub skill_id: String,
    pub chapter_id: String,
    #[serde(default)]
    pub prerequisite: bool,
    pub prerequisite_level: Option<PrerequisiteLevel>,
}

impl SkillMeta {
    pub fn is_core_prerequisite(&self) -> bool {
        self.prerequisite && self.prerequisite_level == Some(PrerequisiteLevel::Core)
    }
}
