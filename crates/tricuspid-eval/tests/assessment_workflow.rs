//! End-to-end specifications for the assessment pipeline: raw submission
//! through intake validation into the scoring and recommendation engine,
//! exercised via the public facade and the HTTP router only.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use tricuspid_eval::assessment::{
    assessment_from_submission, assessment_router, evaluate, AssessmentSubmission,
    RecommendationClass,
};

fn submission(values: &[(&str, &str)]) -> AssessmentSubmission {
    let map: Value = values
        .iter()
        .map(|(field, value)| ((*field).to_string(), json!(value)))
        .collect::<serde_json::Map<String, Value>>()
        .into();
    serde_json::from_value(map).expect("submission deserializes")
}

fn unknown_baseline(severity: &str, mechanism: &str, annulus: &str) -> AssessmentSubmission {
    submission(&[
        ("tricuspidRegurgitationSeverity", severity),
        ("tricuspidAnnulusDilated", annulus),
        ("chronicAtrialFibrillation", "Unknown"),
        ("significantRightAtrialDilatation", "Unknown"),
        ("rightVentricularDilatationOrDysfunction", "Unknown"),
        ("nonSevereTricuspidLeafletTethering", "Unknown"),
        ("pulmonaryHypertensionPresent", "Unknown"),
        ("reversibleRenalLiverDysfunction", "Unknown"),
        ("conductionDisease", "Unknown"),
        ("noOtherRelevantComorbidities", "Unknown"),
        ("tricuspidRegurgitationMechanism", mechanism),
    ])
}

#[test]
fn severe_case_with_full_burden_is_recommended_with_eight_in_favor() {
    let submission = submission(&[
        ("tricuspidRegurgitationSeverity", "Severe"),
        ("tricuspidAnnulusDilated", "Yes"),
        ("chronicAtrialFibrillation", "Yes"),
        ("significantRightAtrialDilatation", "Yes"),
        ("rightVentricularDilatationOrDysfunction", "Yes"),
        ("nonSevereTricuspidLeafletTethering", "Yes"),
        ("pulmonaryHypertensionPresent", "Yes"),
        ("reversibleRenalLiverDysfunction", "Yes"),
        ("conductionDisease", "No"),
        ("noOtherRelevantComorbidities", "No"),
        ("tricuspidRegurgitationMechanism", "Secondary (functional)"),
    ]);

    let assessment = assessment_from_submission(submission).expect("submission is valid");
    let outcome = evaluate(&assessment);

    assert_eq!(outcome.recommendation, RecommendationClass::Class1Recommended);
    assert_eq!(outcome.favor_count, 8);
    assert_eq!(outcome.against_count, 0);
}

#[test]
fn mild_functional_case_with_dilated_annulus_may_be_considered() {
    let submission = unknown_baseline("Mild", "Secondary (functional)", "Yes");

    let assessment = assessment_from_submission(submission).expect("submission is valid");
    let outcome = evaluate(&assessment);

    assert_eq!(
        outcome.recommendation,
        RecommendationClass::Class2bMayBeConsidered
    );
    assert_eq!(outcome.favor_count, 1);
    assert_eq!(outcome.against_count, 1);
}

#[test]
fn mild_primary_case_falls_back_to_careful_evaluation() {
    let submission = unknown_baseline("Mild", "Primary", "Yes");

    let assessment = assessment_from_submission(submission).expect("submission is valid");
    let outcome = evaluate(&assessment);

    assert_eq!(
        outcome.recommendation,
        RecommendationClass::Class1cCarefulEvaluationRequired
    );
}

#[test]
fn fully_unknown_case_scores_nothing_and_requires_careful_evaluation() {
    let submission = unknown_baseline("None", "Primary", "Unknown");

    let assessment = assessment_from_submission(submission).expect("submission is valid");
    let outcome = evaluate(&assessment);

    assert_eq!(
        outcome.recommendation,
        RecommendationClass::Class1cCarefulEvaluationRequired
    );
    assert_eq!(outcome.favor_count, 0);
    assert_eq!(outcome.against_count, 0);
}

#[tokio::test]
async fn http_round_trip_renders_the_moderate_tier() {
    let payload =
        serde_json::to_value(unknown_baseline("Moderate", "Primary", "No")).expect("serializes");

    let response = assessment_router()
        .oneshot(
            Request::post("/api/v1/assessments/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).expect("encode")))
                .expect("build request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let body: Value = serde_json::from_slice(&body).expect("json payload");

    assert_eq!(body["recommendation"], json!("class2a_should_be_considered"));
    assert_eq!(body["display_severity"], json!("info"));
    assert_eq!(body["favor_count"], json!(1));
    assert_eq!(body["against_count"], json!(1));
}
