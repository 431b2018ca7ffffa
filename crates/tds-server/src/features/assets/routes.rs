use crate::api::response::{ApiResponse, ErrorResponse};
use crate::error::AppError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;

use super::commands::{CreateAssetCommand, CreateAssetError, ImportAssetsCommand, ImportAssetsError};
use super::import::ImportError;
use super::queries::{GetAssetError, GetAssetQuery, ListAssetsError, ListAssetsQuery};

pub fn assets_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_asset))
        .route("/", get(list_assets))
        .route("/import", post(import_assets))
        .route("/:id", get(get_asset))
}

/// Bulk CSV import.
///
/// Responds 200 with the bare summary even when rows failed; row failures
/// are in-band in `errors`. Only batch-level problems use the transport
/// status, with a flat `{ "error": message }` body.
#[tracing::instrument(skip(pool, command), fields(ssr = %command.ssr_reference))]
async fn import_assets(
    State(pool): State<PgPool>,
    Json(command): Json<ImportAssetsCommand>,
) -> Result<Response, AppError> {
    let summary = super::commands::import::handle(pool, command)
        .await
        .map_err(|err| match err {
            ImportAssetsError::SsrReferenceRequired => AppError::BadRequest(err.to_string()),
            ImportAssetsError::Import(ImportError::Parse(_)) => {
                AppError::Validation(err.to_string())
            },
            ImportAssetsError::Import(ImportError::SinkUnavailable(_)) => {
                AppError::Internal(err.to_string())
            },
        })?;

    Ok((StatusCode::OK, Json(summary)).into_response())
}

#[tracing::instrument(skip(pool, command), fields(ssr = %command.ssr_reference, asset_code = %command.asset_code))]
async fn create_asset(
    State(pool): State<PgPool>,
    Json(command): Json<CreateAssetCommand>,
) -> Result<Response, AssetApiError> {
    let response = super::commands::create::handle(pool, command).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, query), fields(ssr = ?query.ssr, page = ?query.page))]
async fn list_assets(
    State(pool): State<PgPool>,
    Query(query): Query<ListAssetsQuery>,
) -> Result<Response, AssetApiError> {
    let response = super::queries::list::handle(pool, query).await?;

    tracing::debug!(
        count = response.items.len(),
        total = response.pagination.total,
        "Assets listed via API"
    );

    let meta = json!({
        "pagination": response.pagination
    });

    Ok(
        (StatusCode::OK, Json(ApiResponse::success_with_meta(response.items, meta)))
            .into_response(),
    )
}

#[tracing::instrument(skip(pool), fields(id = %id))]
async fn get_asset(
    State(pool): State<PgPool>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Response, AssetApiError> {
    let asset = super::queries::get::handle(pool, GetAssetQuery { id }).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(asset))).into_response())
}

#[derive(Debug)]
enum AssetApiError {
    CreateError(CreateAssetError),
    ListError(ListAssetsError),
    GetError(GetAssetError),
}

impl From<CreateAssetError> for AssetApiError {
    fn from(err: CreateAssetError) -> Self {
        Self::CreateError(err)
    }
}

impl From<ListAssetsError> for AssetApiError {
    fn from(err: ListAssetsError) -> Self {
        Self::ListError(err)
    }
}

impl From<GetAssetError> for AssetApiError {
    fn from(err: GetAssetError) -> Self {
        Self::GetError(err)
    }
}

impl std::fmt::Display for AssetApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetApiError::CreateError(e) => write!(f, "{}", e),
            AssetApiError::ListError(e) => write!(f, "{}", e),
            AssetApiError::GetError(e) => write!(f, "{}", e),
        }
    }
}

impl IntoResponse for AssetApiError {
    fn into_response(self) -> Response {
        match self {
            AssetApiError::CreateError(CreateAssetError::SsrReferenceRequired)
            | AssetApiError::CreateError(CreateAssetError::NsnRequired)
            | AssetApiError::CreateError(CreateAssetError::AssetCodeRequired)
            | AssetApiError::CreateError(CreateAssetError::DesignationRequired)
            | AssetApiError::CreateError(CreateAssetError::FieldTooLong(_))
            | AssetApiError::CreateError(CreateAssetError::InvalidStatus(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            AssetApiError::CreateError(CreateAssetError::DuplicateAssetCode(_)) => {
                let error = ErrorResponse::new("CONFLICT", self.to_string());
                (StatusCode::CONFLICT, Json(error)).into_response()
            },
            AssetApiError::CreateError(CreateAssetError::Database(_))
            | AssetApiError::CreateError(CreateAssetError::InvalidRecord(_)) => {
                tracing::error!("Database error during asset creation: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },

            AssetApiError::ListError(ListAssetsError::InvalidPage)
            | AssetApiError::ListError(ListAssetsError::InvalidPerPage)
            | AssetApiError::ListError(ListAssetsError::InvalidStatus(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            AssetApiError::ListError(ListAssetsError::Database(_))
            | AssetApiError::ListError(ListAssetsError::InvalidRecord(_)) => {
                tracing::error!("Database error during asset listing: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },

            AssetApiError::GetError(GetAssetError::NotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
            AssetApiError::GetError(GetAssetError::Database(_))
            | AssetApiError::GetError(GetAssetError::InvalidRecord(_)) => {
                tracing::error!("Database error during asset retrieval: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}
