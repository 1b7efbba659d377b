use clap::Args;
use tricuspid_eval::assessment::{
    evaluate, ClinicalAssessment, DisplaySeverity, EvaluationOutcome, Mechanism, Severity,
    YesNoUnknown,
};
use tricuspid_eval::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// TR severity (None, Mild, Moderate, Severe)
    #[arg(long, value_parser = crate::infra::parse_severity, default_value = "None")]
    pub(crate) tr_severity: Severity,
    /// TR mechanism (Primary, "Secondary (functional)")
    #[arg(long, value_parser = crate::infra::parse_mechanism, default_value = "Primary")]
    pub(crate) tr_mechanism: Mechanism,
    /// Tricuspid annulus dilated? (Yes, No, Unknown)
    #[arg(long, value_parser = crate::infra::parse_yes_no_unknown, default_value = "Unknown")]
    pub(crate) annulus_dilated: YesNoUnknown,
    /// Chronic atrial fibrillation?
    #[arg(long, value_parser = crate::infra::parse_yes_no_unknown, default_value = "Unknown")]
    pub(crate) atrial_fibrillation: YesNoUnknown,
    /// Significant right atrial dilatation?
    #[arg(long, value_parser = crate::infra::parse_yes_no_unknown, default_value = "Unknown")]
    pub(crate) right_atrial_dilatation: YesNoUnknown,
    /// RV dilatation or dysfunction?
    #[arg(long, value_parser = crate::infra::parse_yes_no_unknown, default_value = "Unknown")]
    pub(crate) rv_dysfunction: YesNoUnknown,
    /// Non-severe leaflet tethering?
    #[arg(long, value_parser = crate::infra::parse_yes_no_unknown, default_value = "Unknown")]
    pub(crate) leaflet_tethering: YesNoUnknown,
    /// Pulmonary hypertension present?
    #[arg(long, value_parser = crate::infra::parse_yes_no_unknown, default_value = "Unknown")]
    pub(crate) pulmonary_hypertension: YesNoUnknown,
    /// Reversible renal/liver dysfunction?
    #[arg(long, value_parser = crate::infra::parse_yes_no_unknown, default_value = "Unknown")]
    pub(crate) organ_dysfunction: YesNoUnknown,
    /// Is there conduction disease?
    #[arg(long, value_parser = crate::infra::parse_yes_no_unknown, default_value = "Unknown")]
    pub(crate) conduction_disease: YesNoUnknown,
    /// No other relevant comorbidities?
    #[arg(long, value_parser = crate::infra::parse_yes_no_unknown, default_value = "Unknown")]
    pub(crate) no_other_comorbidities: YesNoUnknown,
}

impl EvaluateArgs {
    fn into_assessment(self) -> ClinicalAssessment {
        ClinicalAssessment {
            tricuspid_regurgitation_severity: self.tr_severity,
            tricuspid_annulus_dilated: self.annulus_dilated,
            chronic_atrial_fibrillation: self.atrial_fibrillation,
            significant_right_atrial_dilatation: self.right_atrial_dilatation,
            right_ventricular_dilatation_or_dysfunction: self.rv_dysfunction,
            non_severe_tricuspid_leaflet_tethering: self.leaflet_tethering,
            pulmonary_hypertension_present: self.pulmonary_hypertension,
            reversible_renal_liver_dysfunction: self.organ_dysfunction,
            conduction_disease: self.conduction_disease,
            no_other_relevant_comorbidities: self.no_other_comorbidities,
            tricuspid_regurgitation_mechanism: self.tr_mechanism,
        }
    }
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let assessment = args.into_assessment();
    let outcome = evaluate(&assessment);
    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Concomitant tricuspid repair evaluator demo");

    for (title, assessment) in demo_scenarios() {
        println!("\n== {title} ==");
        render_outcome(&evaluate(&assessment));
    }

    Ok(())
}

fn render_outcome(outcome: &EvaluationOutcome) {
    println!(
        "{} [{}]",
        outcome.recommendation.summary(),
        match outcome.recommendation.display_severity() {
            DisplaySeverity::Success => "success",
            DisplaySeverity::Info => "info",
            DisplaySeverity::Warning => "warning",
            DisplaySeverity::Error => "error",
        }
    );
    println!(
        "Factors favoring intervention: {} | factors against: {}",
        outcome.favor_count, outcome.against_count
    );
    for component in &outcome.components {
        let sign = match component.score {
            1 => "+1",
            -1 => "-1",
            _ => " 0",
        };
        println!("  [{sign}] {} {}", component.field.prompt(), component.notes);
    }
}

fn demo_scenarios() -> Vec<(&'static str, ClinicalAssessment)> {
    let baseline = ClinicalAssessment {
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
    };

    vec![
        (
            "Severe functional TR with full right-heart burden",
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
            },
        ),
        (
            "Moderate TR found during left-sided surgery workup",
            ClinicalAssessment {
                tricuspid_regurgitation_severity: Severity::Moderate,
                ..baseline
            },
        ),
        (
            "Mild functional TR with a dilated annulus",
            ClinicalAssessment {
                tricuspid_regurgitation_severity: Severity::Mild,
                tricuspid_annulus_dilated: YesNoUnknown::Yes,
                tricuspid_regurgitation_mechanism: Mechanism::SecondaryFunctional,
                ..baseline
            },
        ),
        (
            "Mild primary TR with a dilated annulus",
            ClinicalAssessment {
                tricuspid_regurgitation_severity: Severity::Mild,
                tricuspid_annulus_dilated: YesNoUnknown::Yes,
                ..baseline
            },
        ),
        ("No regurgitation, everything unknown", baseline),
    ]
}
