use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{RecommendationRequest, RecommendationResponse},
    services::recommendations,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommend movies similar to the requested title
///
/// Body rejections (wrong content type, malformed JSON, wrong field types)
/// are reported as 400 with the usual `{"error": ...}` body.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        title = request.title.as_deref().unwrap_or_default(),
        language = request.language(),
        "Processing recommendation request"
    );

    let response = recommendations::get_recommendations(&state.details, &request)
        .await
        .inspect_err(|e| {
            tracing::info!(request_id = %request_id, error = %e, "Recommendation request rejected");
        })?;

    tracing::info!(
        request_id = %request_id,
        count = response.recommendations.len(),
        "Recommendations returned"
    );

    Ok(Json(response))
}
