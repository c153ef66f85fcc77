//! Command-line interface definitions for the newshub client.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The API key and base URL can be provided via flags or environment
//! variables.

use clap::{Parser, Subcommand};

/// Command-line arguments for the newshub client binary.
///
/// # Examples
///
/// ```sh
/// # Latest Philippine headlines
/// newshub_client latest
///
/// # Worldwide business headlines
/// newshub_client category business --country us
///
/// # Search, printing the raw JSON payload
/// newshub_client --json search "typhoon signal"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// API key for the news service
    #[arg(long, env = "NEWSDATA_API_KEY")]
    pub api_key: Option<String>,

    /// Base endpoint of the news service
    #[arg(long, env = "NEWSDATA_BASE_URL", default_value = "https://newsdata.io/api/1")]
    pub base_url: String,

    /// Print the raw JSON payload instead of formatted headlines
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The operation to run, one per public client call.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the latest headlines
    Latest {
        /// Country code; anything other than "ph" means worldwide
        #[arg(short = 'c', long, default_value = "ph")]
        country: String,

        /// Category tag; "top" means the service default feed
        #[arg(long)]
        category: Option<String>,
    },
    /// Search articles by free text
    Search {
        /// The search term
        query: String,

        /// Country code; anything other than "ph" means worldwide
        #[arg(short = 'c', long, default_value = "ph")]
        country: String,
    },
    /// Fetch headlines for a category
    Category {
        /// The category tag, e.g. "business" or "sports"
        category: String,

        /// Country code; anything other than "ph" means worldwide
        #[arg(short = 'c', long, default_value = "ph")]
        country: String,
    },
}
