//! Wire types for the server API

use serde::Deserialize;
use uuid::Uuid;

/// Standard success envelope used by the CRUD and search endpoints
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

/// Standard error envelope
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

/// Flat error body used by the import endpoint
#[derive(Debug, Deserialize)]
pub struct FlatErrorBody {
    pub error: String,
}

/// AI search response payload
#[derive(Debug, Deserialize)]
pub struct SearchAnswer {
    pub answer: String,
    pub matches: Vec<SearchMatch>,
}

/// One candidate asset the answer was drawn from
#[derive(Debug, Deserialize)]
pub struct SearchMatch {
    pub id: Uuid,
    pub asset_code: String,
    pub nsn: String,
    pub designation: String,
    pub asset_type: String,
    pub status: String,
}
