use serde::{Deserialize, Serialize};

/// Three-state categorical answer used by most clinical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNoUnknown {
    Yes,
    No,
    Unknown,
}

impl YesNoUnknown {
    pub const LABELS: [&'static str; 3] = ["Yes", "No", "Unknown"];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unknown => "Unknown",
        }
    }

    /// Case-sensitive match against the display labels.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            "Unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// Graded severity of the tricuspid regurgitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const LABELS: [&'static str; 4] = ["None", "Mild", "Moderate", "Severe"];

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "None" => Some(Self::None),
            "Mild" => Some(Self::Mild),
            "Moderate" => Some(Self::Moderate),
            "Severe" => Some(Self::Severe),
            _ => None,
        }
    }
}

/// Whether the leaflets themselves are diseased (primary) or the
/// regurgitation results from annular/ventricular distortion (secondary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mechanism {
    Primary,
    #[serde(rename = "Secondary (functional)")]
    SecondaryFunctional,
}

impl Mechanism {
    pub const LABELS: [&'static str; 2] = ["Primary", "Secondary (functional)"];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::SecondaryFunctional => "Secondary (functional)",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "Primary" => Some(Self::Primary),
            "Secondary (functional)" => Some(Self::SecondaryFunctional),
            _ => None,
        }
    }
}

/// Immutable snapshot of one patient's categorical inputs.
///
/// Constructed per evaluation by the intake boundary and discarded once the
/// outcome is rendered; the record carries no identity and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalAssessment {
    pub tricuspid_regurgitation_severity: Severity,
    pub tricuspid_annulus_dilated: YesNoUnknown,
    pub chronic_atrial_fibrillation: YesNoUnknown,
    pub significant_right_atrial_dilatation: YesNoUnknown,
    pub right_ventricular_dilatation_or_dysfunction: YesNoUnknown,
    pub non_severe_tricuspid_leaflet_tethering: YesNoUnknown,
    pub pulmonary_hypertension_present: YesNoUnknown,
    pub reversible_renal_liver_dysfunction: YesNoUnknown,
    pub conduction_disease: YesNoUnknown,
    pub no_other_relevant_comorbidities: YesNoUnknown,
    pub tricuspid_regurgitation_mechanism: Mechanism,
}

/// The ten fields that participate in the additive score.
///
/// The mechanism field is deliberately absent: it feeds the recommendation
/// decision table only, so an unscorable field is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoredField {
    TricuspidRegurgitationSeverity,
    TricuspidAnnulusDilated,
    ChronicAtrialFibrillation,
    SignificantRightAtrialDilatation,
    RightVentricularDilatationOrDysfunction,
    NonSevereTricuspidLeafletTethering,
    PulmonaryHypertensionPresent,
    ReversibleRenalLiverDysfunction,
    ConductionDisease,
    NoOtherRelevantComorbidities,
}

/// How a field's answer counts toward the favor/against tallies.
///
/// The negative-polarity fields can only ever subtract; that asymmetry is
/// intentional rule structure, not an oversight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolarity {
    SeverityScored,
    Positive,
    Negative,
}

impl ScoredField {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::TricuspidRegurgitationSeverity,
            Self::TricuspidAnnulusDilated,
            Self::ChronicAtrialFibrillation,
            Self::SignificantRightAtrialDilatation,
            Self::RightVentricularDilatationOrDysfunction,
            Self::NonSevereTricuspidLeafletTethering,
            Self::PulmonaryHypertensionPresent,
            Self::ReversibleRenalLiverDysfunction,
            Self::ConductionDisease,
            Self::NoOtherRelevantComorbidities,
        ]
    }

    /// Wire identifier, matching the serde representation.
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::TricuspidRegurgitationSeverity => "tricuspidRegurgitationSeverity",
            Self::TricuspidAnnulusDilated => "tricuspidAnnulusDilated",
            Self::ChronicAtrialFibrillation => "chronicAtrialFibrillation",
            Self::SignificantRightAtrialDilatation => "significantRightAtrialDilatation",
            Self::RightVentricularDilatationOrDysfunction => {
                "rightVentricularDilatationOrDysfunction"
            }
            Self::NonSevereTricuspidLeafletTethering => "nonSevereTricuspidLeafletTethering",
            Self::PulmonaryHypertensionPresent => "pulmonaryHypertensionPresent",
            Self::ReversibleRenalLiverDysfunction => "reversibleRenalLiverDysfunction",
            Self::ConductionDisease => "conductionDisease",
            Self::NoOtherRelevantComorbidities => "noOtherRelevantComorbidities",
        }
    }

    /// Question text a presentation layer can render next to the control.
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::TricuspidRegurgitationSeverity => "What is the TR severity?",
            Self::TricuspidAnnulusDilated => "Tricuspid annulus dilated?",
            Self::ChronicAtrialFibrillation => "Chronic atrial fibrillation?",
            Self::SignificantRightAtrialDilatation => "Significant right atrial dilatation?",
            Self::RightVentricularDilatationOrDysfunction => "RV dilatation or dysfunction?",
            Self::NonSevereTricuspidLeafletTethering => "Non-severe leaflet tethering?",
            Self::PulmonaryHypertensionPresent => "Pulmonary hypertension present?",
            Self::ReversibleRenalLiverDysfunction => "Reversible renal/liver dysfunction?",
            Self::ConductionDisease => "Is there conduction disease?",
            Self::NoOtherRelevantComorbidities => "No other relevant comorbidities?",
        }
    }

    pub const fn polarity(self) -> FieldPolarity {
        match self {
            Self::TricuspidRegurgitationSeverity => FieldPolarity::SeverityScored,
            Self::ConductionDisease | Self::NoOtherRelevantComorbidities => FieldPolarity::Negative,
            _ => FieldPolarity::Positive,
        }
    }

    pub fn allowed_labels(self) -> &'static [&'static str] {
        match self {
            Self::TricuspidRegurgitationSeverity => &Severity::LABELS,
            _ => &YesNoUnknown::LABELS,
        }
    }
}

/// Typed view of one scored answer, used by the scoring rules.
///
/// The variant carries the field's scoring direction, so a categorical
/// value can never reach the rules paired with the wrong polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAnswer {
    Graded(Severity),
    Supportive(YesNoUnknown),
    Opposing(YesNoUnknown),
}

impl ClinicalAssessment {
    pub fn answer(&self, field: ScoredField) -> FieldAnswer {
        match field {
            ScoredField::TricuspidRegurgitationSeverity => {
                FieldAnswer::Graded(self.tricuspid_regurgitation_severity)
            }
            ScoredField::TricuspidAnnulusDilated => {
                FieldAnswer::Supportive(self.tricuspid_annulus_dilated)
            }
            ScoredField::ChronicAtrialFibrillation => {
                FieldAnswer::Supportive(self.chronic_atrial_fibrillation)
            }
            ScoredField::SignificantRightAtrialDilatation => {
                FieldAnswer::Supportive(self.significant_right_atrial_dilatation)
            }
            ScoredField::RightVentricularDilatationOrDysfunction => {
                FieldAnswer::Supportive(self.right_ventricular_dilatation_or_dysfunction)
            }
            ScoredField::NonSevereTricuspidLeafletTethering => {
                FieldAnswer::Supportive(self.non_severe_tricuspid_leaflet_tethering)
            }
            ScoredField::PulmonaryHypertensionPresent => {
                FieldAnswer::Supportive(self.pulmonary_hypertension_present)
            }
            ScoredField::ReversibleRenalLiverDysfunction => {
                FieldAnswer::Supportive(self.reversible_renal_liver_dysfunction)
            }
            ScoredField::ConductionDisease => FieldAnswer::Opposing(self.conduction_disease),
            ScoredField::NoOtherRelevantComorbidities => {
                FieldAnswer::Opposing(self.no_other_relevant_comorbidities)
            }
        }
    }
}

/// Wire identifier for the mechanism field, which sits outside [`ScoredField`].
pub const MECHANISM_FIELD: &str = "tricuspidRegurgitationMechanism";

/// Everything a presentation layer needs to render one selection control.
///
/// The option set per field equals the enumeration's members exactly; label
/// styling beyond the literal strings is the presentation layer's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub field: &'static str,
    pub prompt: &'static str,
    pub allowed: &'static [&'static str],
}

/// Field catalog in declaration order: the ten scored fields, then the
/// mechanism field.
pub fn field_catalog() -> Vec<FieldDescriptor> {
    let mut catalog: Vec<FieldDescriptor> = ScoredField::ordered()
        .iter()
        .map(|field| FieldDescriptor {
            field: field.identifier(),
            prompt: field.prompt(),
            allowed: field.allowed_labels(),
        })
        .collect();

    catalog.push(FieldDescriptor {
        field: MECHANISM_FIELD,
        prompt: "What is the TR mechanism?",
        allowed: &Mechanism::LABELS,
    });

    catalog
}
