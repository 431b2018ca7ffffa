use crate::ai::AiError;
use crate::api::response::{ApiResponse, ErrorResponse};
use crate::features::FeatureState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::queries::{AiSearchError, AiSearchQuery};

pub fn search_routes() -> Router<FeatureState> {
    Router::new().route("/ai", post(ai_search))
}

#[tracing::instrument(skip(state, query), fields(ssr = ?query.ssr))]
async fn ai_search(
    State(state): State<FeatureState>,
    Json(query): Json<AiSearchQuery>,
) -> Result<Response, SearchApiError> {
    let response = super::queries::ai_search::handle(state.db, state.ai, query).await?;

    tracing::debug!(matches = response.matches.len(), "AI search served");

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[derive(Debug)]
struct SearchApiError(AiSearchError);

impl From<AiSearchError> for SearchApiError {
    fn from(err: AiSearchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for SearchApiError {
    fn into_response(self) -> Response {
        match self.0 {
            AiSearchError::QueryRequired => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.0.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            AiSearchError::Database(ref e) => {
                tracing::error!("Database error during AI search: {:?}", e);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
            AiSearchError::Upstream(AiError::Timeout) => {
                let error = ErrorResponse::new("UPSTREAM_TIMEOUT", self.0.to_string());
                (StatusCode::GATEWAY_TIMEOUT, Json(error)).into_response()
            },
            AiSearchError::Upstream(ref e) => {
                tracing::error!("AI upstream error during search: {}", e);
                let error = ErrorResponse::new("UPSTREAM_ERROR", self.0.to_string());
                (StatusCode::BAD_GATEWAY, Json(error)).into_response()
            },
        }
    }
}
