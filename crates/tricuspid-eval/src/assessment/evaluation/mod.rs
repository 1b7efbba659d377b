mod policy;
mod rules;

pub use policy::{recommend, DisplaySeverity, RecommendationClass};

use super::domain::{ClinicalAssessment, ScoredField};
use serde::{Deserialize, Serialize};

/// Signed contribution of a single scored field, for transparent output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub field: ScoredField,
    pub score: i8,
    pub notes: String,
}

/// Per-field scores plus the favor/against tallies. Simple counts, no
/// weighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub favor_count: u8,
    pub against_count: u8,
}

/// Compute the additive score table for an assessment.
pub fn score_assessment(assessment: &ClinicalAssessment) -> ScoreBreakdown {
    let (components, favor_count, against_count) = rules::score_assessment(assessment);

    ScoreBreakdown {
        components,
        favor_count,
        against_count,
    }
}

/// Full evaluation output: the guideline class plus the score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub recommendation: RecommendationClass,
    pub favor_count: u8,
    pub against_count: u8,
    pub components: Vec<ScoreComponent>,
}

/// Evaluate an assessment in one call. Pure over the input record: no state,
/// no failure modes, identical output for identical input.
pub fn evaluate(assessment: &ClinicalAssessment) -> EvaluationOutcome {
    let breakdown = score_assessment(assessment);

    EvaluationOutcome {
        recommendation: recommend(assessment),
        favor_count: breakdown.favor_count,
        against_count: breakdown.against_count,
        components: breakdown.components,
    }
}
