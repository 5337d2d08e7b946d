//! Diagnostic scoring for exam-prep student placement.
//!
//! A student submits one diagnostic questionnaire per track and level; the
//! modules below turn that submission into the composite indices used to
//! decide group placement and remediation priority. The computation itself is
//! deterministic and side-effect free so that a stored submission can be
//! re-scored whenever a definition is re-tuned.

pub mod definitions;
pub mod domain;
pub mod scoring;

pub use definitions::{
    definition_key, find_definition, get_definition, list_definition_keys, verify_definition,
    DiagnosticDefinition, SkillTemplate, UnknownDefinition,
};
pub use domain::{
    ChapterDefinition, ChaptersSelection, DiagnosticData, ExamPrepEvidence, Level,
    MethodologyProfile, MiniTestResult, PrerequisiteLevel, RatedProgress, SchoolContext,
    ScoringPolicy, SelfRatings, SelfReportedPerformance, SkillAssessment, SkillMeta,
    SkillProgress, StudentIdentity, TierCutoffs, TierThresholds, Track,
};
pub use scoring::{
    compute_scoring_v2, CoverageAlert, DataQuality, DomainScore, Inconsistency,
    ProgrammeCoverage, QualityBand, ScoringOptions, ScoringResult,
};
