//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::source::DEFAULT_ENDPOINT;

/// Browse a product catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
pub struct Cli {
    /// Catalog endpoint returning a JSON array of products
    #[arg(default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Append diagnostic logs to this file (the terminal is taken by the UI)
    #[arg(long, value_name = "PATH", env = "STOREFRONT_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
