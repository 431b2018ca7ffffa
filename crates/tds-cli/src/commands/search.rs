//! Search command implementation
//!
//! Sends a natural-language question to the AI search endpoint.

use colored::Colorize;
use tracing::debug;

use crate::api::ApiClient;
use crate::error::{CliError, Result};

/// Run the search command
pub async fn run(query: Vec<String>, ssr: Option<String>, server_url: String) -> Result<()> {
    let query_str = query.join(" ");

    if query_str.trim().is_empty() {
        return Err(CliError::config("Search query cannot be empty"));
    }

    debug!(query = %query_str, ssr = ?ssr, "Running AI search");

    let client = ApiClient::new(server_url)?;
    let result = client.ai_search(query_str.trim(), ssr.as_deref()).await?;

    println!("{}", result.answer.bold());

    if !result.matches.is_empty() {
        println!();
        println!("{}", "Matched assets:".dimmed());
        for m in &result.matches {
            println!(
                "  {} | NSN {} | {} ({})",
                m.asset_code.cyan(),
                m.nsn,
                m.designation,
                m.status
            );
        }
    }

    Ok(())
}
