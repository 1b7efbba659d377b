use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tricuspid_eval::assessment::{Mechanism, Severity, YesNoUnknown};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_yes_no_unknown(raw: &str) -> Result<YesNoUnknown, String> {
    YesNoUnknown::from_label(raw.trim()).ok_or_else(|| {
        format!(
            "'{raw}' is not a valid answer (choose one of: {})",
            YesNoUnknown::LABELS.join(", ")
        )
    })
}

pub(crate) fn parse_severity(raw: &str) -> Result<Severity, String> {
    Severity::from_label(raw.trim()).ok_or_else(|| {
        format!(
            "'{raw}' is not a valid severity (choose one of: {})",
            Severity::LABELS.join(", ")
        )
    })
}

pub(crate) fn parse_mechanism(raw: &str) -> Result<Mechanism, String> {
    Mechanism::from_label(raw.trim()).ok_or_else(|| {
        format!(
            "'{raw}' is not a valid mechanism (choose one of: {})",
            Mechanism::LABELS.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_labels() {
        assert_eq!(parse_yes_no_unknown(" Yes "), Ok(YesNoUnknown::Yes));
        assert_eq!(parse_severity("Moderate"), Ok(Severity::Moderate));
        assert_eq!(
            parse_mechanism("Secondary (functional)"),
            Ok(Mechanism::SecondaryFunctional)
        );
    }

    #[test]
    fn rejects_unknown_labels_with_the_option_set() {
        let err = parse_severity("severe").expect_err("labels are case-sensitive");
        assert!(err.contains("Severe"));
        assert!(err.contains("Mild"));
    }
}
