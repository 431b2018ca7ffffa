//! AI-assisted asset search
//!
//! Loads a bounded candidate set from the database, hands it with the
//! caller's question to the hosted model, and returns both the answer and
//! the candidates the answer was drawn from.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::ai::{AiClient, AiError};
use crate::db::assets::search_candidates;

/// Upper bound on candidates handed to the model
const CANDIDATE_LIMIT: i64 = 20;

/// Query for AI-assisted search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSearchQuery {
    /// Natural-language question
    pub query: String,
    /// Optional restriction to one SSR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssr: Option<String>,
}

/// One candidate asset included in the model's context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMatch {
    pub id: Uuid,
    pub asset_code: String,
    pub nsn: String,
    pub designation: String,
    pub asset_type: String,
    pub status: String,
}

/// Response from AI-assisted search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSearchResponse {
    pub answer: String,
    pub matches: Vec<AssetMatch>,
}

/// Errors that can occur during AI-assisted search
#[derive(Debug, thiserror::Error)]
pub enum AiSearchError {
    #[error("Search query is required and cannot be empty")]
    QueryRequired,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("AI upstream failed: {0}")]
    Upstream(#[from] AiError),
}

impl AiSearchQuery {
    /// Validates the query parameters
    pub fn validate(&self) -> Result<(), AiSearchError> {
        if self.query.trim().is_empty() {
            return Err(AiSearchError::QueryRequired);
        }
        Ok(())
    }
}

/// Handles the AI search query
#[tracing::instrument(skip(pool, ai, query), fields(ssr = ?query.ssr))]
pub async fn handle(
    pool: PgPool,
    ai: AiClient,
    query: AiSearchQuery,
) -> Result<AiSearchResponse, AiSearchError> {
    query.validate()?;
    let term = query.query.trim();

    let rows = search_candidates(&pool, query.ssr.as_deref(), term, CANDIDATE_LIMIT).await?;

    let matches: Vec<AssetMatch> = rows
        .into_iter()
        .map(|row| AssetMatch {
            id: row.id,
            asset_code: row.asset_code,
            nsn: row.nsn,
            designation: row.designation,
            asset_type: row.asset_type,
            status: row.status,
        })
        .collect();

    let prompt = build_prompt(term, &matches);
    let answer = ai.complete(&prompt).await?;

    tracing::debug!(candidates = matches.len(), "AI search completed");

    Ok(AiSearchResponse { answer, matches })
}

/// Assemble the upstream prompt: the question plus one line per candidate.
fn build_prompt(term: &str, matches: &[AssetMatch]) -> String {
    let mut prompt = String::new();
    prompt.push_str("You are answering questions about transportation data sheet assets.\n");
    prompt.push_str("Known assets:\n");

    if matches.is_empty() {
        prompt.push_str("(none matched the question)\n");
    }

    for m in matches {
        prompt.push_str(&format!(
            "- {} | NSN {} | {} | type {} | status {}\n",
            m.asset_code, m.nsn, m.designation, m.asset_type, m.status
        ));
    }

    prompt.push_str("\nQuestion: ");
    prompt.push_str(term);
    prompt
}
