//! Search read operations

pub mod ai_search;

pub use ai_search::{AiSearchError, AiSearchQuery, AiSearchResponse, AssetMatch};
