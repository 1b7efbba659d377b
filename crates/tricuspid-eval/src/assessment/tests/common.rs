use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{ClinicalAssessment, Mechanism, Severity, YesNoUnknown};
use crate::assessment::intake::AssessmentSubmission;

/// Neutral baseline: no regurgitation, everything else unknown.
pub(super) fn neutral_assessment() -> ClinicalAssessment {
    ClinicalAssessment {
        tricuspid_regurgitation_severity: Severity::None,
        tricuspid_annulus_dilated: YesNoUnknown::Unknown,
        chronic_atrial_fibrillation: YesNoUnknown::Unknown,
        significant_right_atrial_dilatation: YesNoUnknown::Unknown,
        right_ventricular_dilatation_or_dysfunction: YesNoUnknown::Unknown,
        non_severe_tricuspid_leaflet_tethering: YesNoUnknown::Unknown,
        pulmonary_hypertension_present: YesNoUnknown::Unknown,
        reversible_renal_liver_dysfunction: YesNoUnknown::Unknown,
        conduction_disease: YesNoUnknown::Unknown,
        no_other_relevant_comorbidities: YesNoUnknown::Unknown,
        tricuspid_regurgitation_mechanism: Mechanism::Primary,
    }
}

pub(super) fn assessment_with(
    severity: Severity,
    mechanism: Mechanism,
    annulus: YesNoUnknown,
) -> ClinicalAssessment {
    ClinicalAssessment {
        tricuspid_regurgitation_severity: severity,
        tricuspid_regurgitation_mechanism: mechanism,
        tricuspid_annulus_dilated: annulus,
        ..neutral_assessment()
    }
}

/// Severe regurgitation with the full comorbidity burden answered, the two
/// negative-polarity fields answered No.
pub(super) fn full_burden_assessment() -> ClinicalAssessment {
    ClinicalAssessment {
        tricuspid_regurgitation_severity: Severity::Severe,
        tricuspid_annulus_dilated: YesNoUnknown::Yes,
        chronic_atrial_fibrillation: YesNoUnknown::Yes,
        significant_right_atrial_dilatation: YesNoUnknown::Yes,
        right_ventricular_dilatation_or_dysfunction: YesNoUnknown::Yes,
        non_severe_tricuspid_leaflet_tethering: YesNoUnknown::Yes,
        pulmonary_hypertension_present: YesNoUnknown::Yes,
        reversible_renal_liver_dysfunction: YesNoUnknown::Yes,
        conduction_disease: YesNoUnknown::No,
        no_other_relevant_comorbidities: YesNoUnknown::No,
        tricuspid_regurgitation_mechanism: Mechanism::SecondaryFunctional,
    }
}

/// Fully populated submission with valid option strings throughout.
pub(super) fn complete_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        tricuspid_regurgitation_severity: Some("Severe".to_string()),
        tricuspid_annulus_dilated: Some("Yes".to_string()),
        chronic_atrial_fibrillation: Some("No".to_string()),
        significant_right_atrial_dilatation: Some("Unknown".to_string()),
        right_ventricular_dilatation_or_dysfunction: Some("Yes".to_string()),
        non_severe_tricuspid_leaflet_tethering: Some("Unknown".to_string()),
        pulmonary_hypertension_present: Some("Yes".to_string()),
        reversible_renal_liver_dysfunction: Some("No".to_string()),
        conduction_disease: Some("No".to_string()),
        no_other_relevant_comorbidities: Some("Unknown".to_string()),
        tricuspid_regurgitation_mechanism: Some("Secondary (functional)".to_string()),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
