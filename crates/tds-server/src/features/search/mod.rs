//! Search feature module
//!
//! AI-assisted lookup over the asset registry. The endpoint is a thin
//! composition: bounded database candidates plus one upstream model call.

pub mod queries;
pub mod routes;

pub use queries::{AiSearchError, AiSearchQuery, AiSearchResponse, AssetMatch};
pub use routes::search_routes;
