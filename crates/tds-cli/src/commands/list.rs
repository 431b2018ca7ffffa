//! List command implementation

use comfy_table::{presets::UTF8_FULL, Table};
use tracing::debug;

use tds_common::types::Asset;

use crate::api::ApiClient;
use crate::error::{CliError, Result};

/// Run the list command
pub async fn run(
    ssr: Option<String>,
    status: Option<String>,
    page: i64,
    per_page: i64,
    server_url: String,
) -> Result<()> {
    if page < 1 {
        return Err(CliError::config("Page must be greater than 0"));
    }
    if !(1..=100).contains(&per_page) {
        return Err(CliError::config("Per page must be between 1 and 100"));
    }

    debug!(ssr = ?ssr, status = ?status, page, per_page, "Listing assets");

    let client = ApiClient::new(server_url)?;
    let assets = client
        .list_assets(ssr.as_deref(), status.as_deref(), page, per_page)
        .await?;

    if assets.is_empty() {
        println!("No assets found.");
        return Ok(());
    }

    println!("{}", render_table(&assets));

    Ok(())
}

fn render_table(assets: &[Asset]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Code", "NSN", "Designation", "Type", "Status", "SSR"]);

    for asset in assets {
        table.add_row(vec![
            asset.asset_code.clone(),
            asset.nsn.clone(),
            asset.designation.clone(),
            asset.asset_type.clone(),
            asset.status.to_string(),
            asset.ssr_reference.clone(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tds_common::types::AssetStatus;
    use uuid::Uuid;

    #[test]
    fn table_renders_asset_fields() {
        let assets = vec![Asset {
            id: Uuid::new_v4(),
            ssr_reference: "ssr-42".to_string(),
            nsn: "1005-01-123-4567".to_string(),
            asset_code: "AC1".to_string(),
            designation: "Widget".to_string(),
            asset_type: "Valve".to_string(),
            short_name: None,
            status: AssetStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }];

        let rendered = render_table(&assets).to_string();
        assert!(rendered.contains("AC1"));
        assert!(rendered.contains("active"));
        assert!(rendered.contains("ssr-42"));
    }
}
