use serde::{Deserialize, Serialize};

use super::domain::{
    ClinicalAssessment, Mechanism, ScoredField, Severity, YesNoUnknown, MECHANISM_FIELD,
};

/// Raw, untrusted submission: every field carries the literal option string
/// the presentation layer collected, keyed by the wire identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentSubmission {
    pub tricuspid_regurgitation_severity: Option<String>,
    pub tricuspid_annulus_dilated: Option<String>,
    pub chronic_atrial_fibrillation: Option<String>,
    pub significant_right_atrial_dilatation: Option<String>,
    pub right_ventricular_dilatation_or_dysfunction: Option<String>,
    pub non_severe_tricuspid_leaflet_tethering: Option<String>,
    pub pulmonary_hypertension_present: Option<String>,
    pub reversible_renal_liver_dysfunction: Option<String>,
    pub conduction_disease: Option<String>,
    pub no_other_relevant_comorbidities: Option<String>,
    pub tricuspid_regurgitation_mechanism: Option<String>,
}

/// Rejections raised at the intake boundary. The engine assumes well-typed
/// input and never fails; everything invalid stops here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },
    #[error("'{value}' is not a valid option for field '{field}' (choose one of: {allowed:?})")]
    InvalidValue {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

/// Validate a submission into the immutable assessment record.
pub fn assessment_from_submission(
    submission: AssessmentSubmission,
) -> Result<ClinicalAssessment, IntakeError> {
    Ok(ClinicalAssessment {
        tricuspid_regurgitation_severity: severity_field(
            ScoredField::TricuspidRegurgitationSeverity.identifier(),
            submission.tricuspid_regurgitation_severity,
        )?,
        tricuspid_annulus_dilated: categorical_field(
            ScoredField::TricuspidAnnulusDilated.identifier(),
            submission.tricuspid_annulus_dilated,
        )?,
        chronic_atrial_fibrillation: categorical_field(
            ScoredField::ChronicAtrialFibrillation.identifier(),
            submission.chronic_atrial_fibrillation,
        )?,
        significant_right_atrial_dilatation: categorical_field(
            ScoredField::SignificantRightAtrialDilatation.identifier(),
            submission.significant_right_atrial_dilatation,
        )?,
        right_ventricular_dilatation_or_dysfunction: categorical_field(
            ScoredField::RightVentricularDilatationOrDysfunction.identifier(),
            submission.right_ventricular_dilatation_or_dysfunction,
        )?,
        non_severe_tricuspid_leaflet_tethering: categorical_field(
            ScoredField::NonSevereTricuspidLeafletTethering.identifier(),
            submission.non_severe_tricuspid_leaflet_tethering,
        )?,
        pulmonary_hypertension_present: categorical_field(
            ScoredField::PulmonaryHypertensionPresent.identifier(),
            submission.pulmonary_hypertension_present,
        )?,
        reversible_renal_liver_dysfunction: categorical_field(
            ScoredField::ReversibleRenalLiverDysfunction.identifier(),
            submission.reversible_renal_liver_dysfunction,
        )?,
        conduction_disease: categorical_field(
            ScoredField::ConductionDisease.identifier(),
            submission.conduction_disease,
        )?,
        no_other_relevant_comorbidities: categorical_field(
            ScoredField::NoOtherRelevantComorbidities.identifier(),
            submission.no_other_relevant_comorbidities,
        )?,
        tricuspid_regurgitation_mechanism: mechanism_field(
            MECHANISM_FIELD,
            submission.tricuspid_regurgitation_mechanism,
        )?,
    })
}

fn categorical_field(
    field: &'static str,
    raw: Option<String>,
) -> Result<YesNoUnknown, IntakeError> {
    let raw = raw.ok_or(IntakeError::MissingField { field })?;
    YesNoUnknown::from_label(&raw).ok_or_else(|| IntakeError::InvalidValue {
        field,
        value: raw,
        allowed: &YesNoUnknown::LABELS,
    })
}

fn severity_field(field: &'static str, raw: Option<String>) -> Result<Severity, IntakeError> {
    let raw = raw.ok_or(IntakeError::MissingField { field })?;
    Severity::from_label(&raw).ok_or_else(|| IntakeError::InvalidValue {
        field,
        value: raw,
        allowed: &Severity::LABELS,
    })
}

fn mechanism_field(field: &'static str, raw: Option<String>) -> Result<Mechanism, IntakeError> {
    let raw = raw.ok_or(IntakeError::MissingField { field })?;
    Mechanism::from_label(&raw).ok_or_else(|| IntakeError::InvalidValue {
        field,
        value: raw,
        allowed: &Mechanism::LABELS,
    })
}
