//! Import command implementation
//!
//! Reads a local CSV file and submits it as one bulk-import request.

use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::api::ApiClient;
use crate::error::{CliError, Result};

/// Run the import command
pub async fn run(file: PathBuf, ssr: String, server_url: String) -> Result<()> {
    if ssr.trim().is_empty() {
        return Err(CliError::config("SSR reference cannot be empty"));
    }

    let csv = std::fs::read_to_string(&file)?;

    debug!(file = %file.display(), ssr = %ssr, bytes = csv.len(), "Submitting import");

    let client = ApiClient::new(server_url)?;
    let summary = client.import_assets(ssr.trim(), &csv).await?;

    println!(
        "{} {} asset(s) created",
        "ok".green().bold(),
        summary.assets_created
    );

    if !summary.errors.is_empty() {
        println!(
            "{} {} row(s) failed:",
            "warning".yellow().bold(),
            summary.errors.len()
        );
        for error in &summary.errors {
            println!("  {}", error.red());
        }
    }

    Ok(())
}
