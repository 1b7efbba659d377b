use super::super::domain::{ClinicalAssessment, Mechanism, Severity, YesNoUnknown};
use serde::{Deserialize, Serialize};

/// Guideline recommendation tier for concomitant tricuspid repair, ordered
/// strongest-evidence to requires-further-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationClass {
    Class1Recommended,
    Class2aShouldBeConsidered,
    Class2bMayBeConsidered,
    Class1cCarefulEvaluationRequired,
}

impl RecommendationClass {
    /// User-facing summary message for the class.
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Class1Recommended => "Class 1: Concomitant TR Repair Recommended",
            Self::Class2aShouldBeConsidered => {
                "Class 2a: Concomitant TR Repair should be considered"
            }
            Self::Class2bMayBeConsidered => "Class 2b: Concomitant TR Repair may be considered",
            Self::Class1cCarefulEvaluationRequired => {
                "Class 1c: Careful Evaluation / MDT Recommended prior to consideration of intervention"
            }
        }
    }

    /// Visual tier a presentation layer maps to styling.
    pub const fn display_severity(self) -> DisplaySeverity {
        match self {
            Self::Class1Recommended => DisplaySeverity::Success,
            Self::Class2aShouldBeConsidered => DisplaySeverity::Info,
            Self::Class2bMayBeConsidered => DisplaySeverity::Warning,
            Self::Class1cCarefulEvaluationRequired => DisplaySeverity::Error,
        }
    }
}

/// Visual severity channel for rendering a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySeverity {
    Success,
    Info,
    Warning,
    Error,
}

/// Strict-priority decision table; the first matching row wins and every
/// input combination maps to exactly one class.
pub fn recommend(assessment: &ClinicalAssessment) -> RecommendationClass {
    match assessment.tricuspid_regurgitation_severity {
        Severity::Severe => RecommendationClass::Class1Recommended,
        Severity::Moderate => RecommendationClass::Class2aShouldBeConsidered,
        Severity::Mild
            if assessment.tricuspid_regurgitation_mechanism == Mechanism::SecondaryFunctional
                && assessment.tricuspid_annulus_dilated == YesNoUnknown::Yes =>
        {
            RecommendationClass::Class2bMayBeConsidered
        }
        _ => RecommendationClass::Class1cCarefulEvaluationRequired,
    }
}
