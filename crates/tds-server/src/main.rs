//! TDS Registry Server - Main entry point

use anyhow::Result;
use tds_common::logging::{init_logging, LogConfig};
use tracing::info;

use tds_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with configuration from environment
    let log_config = LogConfig::builder()
        .log_file_prefix("tds-server".to_string())
        .filter_directives("tds_server=debug,tower_http=debug,sqlx=info".to_string())
        .build();

    // Environment variables take precedence per setting
    let log_config = log_config.with_env_overrides()?;

    init_logging(&log_config)?;

    info!("Starting TDS Registry Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    api::serve(config).await
}
