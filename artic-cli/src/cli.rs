//! Command line definition and client configuration.

use std::time::Duration;

use artic_lib::ArticClient;
use artic_lib::DEFAULT_BASE_URL;
use artic_lib::api::PageNumber;
use artic_lib::error::ApiError;
use clap::Parser;
use clap::Subcommand;
use simplelog::LevelFilter;

/// Browse and select artworks from the Art Institute of Chicago catalog.
#[derive(Debug, Parser)]
#[command(name = "artic", version, about)]
pub struct Cli {
    /// Catalog endpoint.
    #[arg(long, env = "ARTIC_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "ARTIC_TIMEOUT", value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Log level written to the log file.
    #[arg(long, env = "ARTIC_LOG", default_value = "info", global = true)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one page of artworks.
    Page {
        /// Page number, starting at 1.
        #[arg(value_parser = parse_page)]
        number: PageNumber,
    },

    /// Select COUNT rows starting at a page and print their ids.
    Select {
        /// Number of rows.
        count: String,

        /// Page the selection starts on.
        #[arg(long, default_value = "1", value_parser = parse_page)]
        page: PageNumber,

        /// Deselect instead of select.
        #[arg(long)]
        deselect: bool,
    },

    /// Browse pages interactively (default).
    Browse {
        /// Page to open first.
        #[arg(long, default_value = "1", value_parser = parse_page)]
        page: PageNumber,
    },
}

impl Cli {
    /// Builds the catalog client from the parsed options.
    pub fn client(&self) -> Result<ArticClient, ApiError> {
        let mut builder = ArticClient::builder().base_url(&self.api_url);
        if let Some(secs) = self.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}

/// Parses a 1-based page number.
pub fn parse_page(s: &str) -> Result<PageNumber, String> {
    s.trim()
        .parse::<u32>()
        .ok()
        .and_then(PageNumber::new)
        .ok_or_else(|| format!("'{}' is not a page number (pages start at 1)", s))
}
