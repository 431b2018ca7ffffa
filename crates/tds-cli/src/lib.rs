//! TDS CLI Library
//!
//! Thin command-line client over the TDS Registry server API: CSV bulk
//! import from a local file, asset listing, and AI-assisted search.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod api;
pub mod commands;
pub mod error;

pub use error::{CliError, Result};

use api::client::DEFAULT_SERVER_URL;

/// TDS Registry command-line client
#[derive(Debug, Parser)]
#[command(name = "tds", version, about = "Manage TDS Registry assets from the command line")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TDS server URL
    #[arg(long, global = true, env = "TDS_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bulk-import assets from a CSV file
    Import {
        /// Path to the CSV file (header row first)
        file: PathBuf,

        /// SSR reference the assets belong to
        #[arg(long)]
        ssr: String,
    },

    /// List registered assets
    List {
        /// Restrict to one SSR
        #[arg(long)]
        ssr: Option<String>,

        /// Restrict to one status (active, inactive, retired)
        #[arg(long)]
        status: Option<String>,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: i64,

        /// Results per page
        #[arg(long, default_value_t = 20)]
        per_page: i64,
    },

    /// Ask the AI search endpoint a question
    Search {
        /// Question terms (joined with spaces)
        query: Vec<String>,

        /// Restrict to one SSR
        #[arg(long)]
        ssr: Option<String>,
    },
}
