//! Clinical assessment intake and the tricuspid repair evaluation engine.
//!
//! `domain` owns the closed enumerations and the immutable assessment
//! record, `intake` converts untrusted option strings into that record, and
//! `evaluation` holds the pure scoring and recommendation rule tables. The
//! router wires the pipeline to HTTP without adding any state of its own.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{
    field_catalog, ClinicalAssessment, FieldAnswer, FieldDescriptor, FieldPolarity, Mechanism,
    ScoredField, Severity, YesNoUnknown, MECHANISM_FIELD,
};
pub use evaluation::{
    evaluate, recommend, score_assessment, DisplaySeverity, EvaluationOutcome,
    RecommendationClass, ScoreBreakdown, ScoreComponent,
};
pub use intake::{assessment_from_submission, AssessmentSubmission, IntakeError};
pub use router::{assessment_router, EvaluationResponse};
