use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use super::domain::{field_catalog, FieldDescriptor};
use super::evaluation::{evaluate, DisplaySeverity, RecommendationClass, ScoreComponent};
use super::intake::{assessment_from_submission, AssessmentSubmission};
use crate::error::AppError;

/// Router exposing assessment evaluation and the field catalog.
pub fn assessment_router() -> Router {
    Router::new()
        .route(
            "/api/v1/assessments/evaluate",
            post(evaluate_handler),
        )
        .route("/api/v1/assessments/fields", get(fields_handler))
}

/// Shape returned for a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResponse {
    pub recommendation: RecommendationClass,
    pub message: &'static str,
    pub display_severity: DisplaySeverity,
    pub favor_count: u8,
    pub against_count: u8,
    pub scores: Vec<ScoreComponent>,
}

pub(crate) async fn evaluate_handler(
    Json(submission): Json<AssessmentSubmission>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let assessment = assessment_from_submission(submission)?;
    let outcome = evaluate(&assessment);

    Ok(Json(EvaluationResponse {
        recommendation: outcome.recommendation,
        message: outcome.recommendation.summary(),
        display_severity: outcome.recommendation.display_severity(),
        favor_count: outcome.favor_count,
        against_count: outcome.against_count,
        scores: outcome.components,
    }))
}

pub(crate) async fn fields_handler() -> Json<Vec<FieldDescriptor>> {
    Json(field_catalog())
}
