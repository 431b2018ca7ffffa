//! TDS CLI - Main entry point

use clap::Parser;
use std::process;
use tds_cli::{Cli, Commands};
use tds_common::logging::{init_logging, LogConfig, LogLevel};
use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Verbose mode raises console logging to debug; otherwise only warnings
    // and errors reach the terminal.
    let log_config = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .log_file_prefix("tds-cli".to_string())
        .build();

    // Environment variables take precedence per setting
    let log_config = log_config.with_env_overrides().unwrap_or_default();

    // The CLI still works if logging fails to initialize
    let _ = init_logging(&log_config);

    if let Err(e) = execute_command(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: Cli) -> tds_cli::Result<()> {
    match cli.command {
        Commands::Import { file, ssr } => {
            tds_cli::commands::import::run(file, ssr, cli.server_url).await
        },
        Commands::List {
            ssr,
            status,
            page,
            per_page,
        } => tds_cli::commands::list::run(ssr, status, page, per_page, cli.server_url).await,
        Commands::Search { query, ssr } => {
            tds_cli::commands::search::run(query, ssr, cli.server_url).await
        },
    }
}
