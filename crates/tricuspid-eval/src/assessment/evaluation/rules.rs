use super::super::domain::{
    ClinicalAssessment, FieldAnswer, ScoredField, Severity, YesNoUnknown,
};
use super::ScoreComponent;

pub(crate) fn score_assessment(
    assessment: &ClinicalAssessment,
) -> (Vec<ScoreComponent>, u8, u8) {
    let fields = ScoredField::ordered();
    let mut components = Vec::with_capacity(fields.len());
    let mut favor_count: u8 = 0;
    let mut against_count: u8 = 0;

    for field in fields {
        let (score, notes) = field_score(assessment.answer(field));
        match score {
            1 => favor_count += 1,
            -1 => against_count += 1,
            _ => {}
        }
        components.push(ScoreComponent {
            field,
            score,
            notes,
        });
    }

    (components, favor_count, against_count)
}

fn field_score(answer: FieldAnswer) -> (i8, String) {
    match answer {
        FieldAnswer::Graded(severity) => match severity {
            Severity::Moderate | Severity::Severe => (
                1,
                format!("{} regurgitation favors intervention", severity.label()),
            ),
            Severity::Mild => (
                -1,
                "mild regurgitation weighs against intervention".to_string(),
            ),
            Severity::None => (0, "no regurgitation to score".to_string()),
        },
        FieldAnswer::Supportive(value) => match value {
            YesNoUnknown::Yes => (1, "present, favors intervention".to_string()),
            YesNoUnknown::No => (-1, "absent, weighs against intervention".to_string()),
            YesNoUnknown::Unknown => (0, "unknown, not counted".to_string()),
        },
        FieldAnswer::Opposing(value) => match value {
            YesNoUnknown::Yes => (-1, "present, weighs against intervention".to_string()),
            YesNoUnknown::No => (0, "absent, not counted".to_string()),
            YesNoUnknown::Unknown => (0, "unknown, not counted".to_string()),
        },
    }
}
