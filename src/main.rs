//! # newshub_client CLI
//!
//! A small command-line front end for the news client library. Each
//! subcommand maps to one public client operation:
//!
//! - `latest`: the latest-headlines feed
//! - `search`: free-text article search
//! - `category`: a category feed
//!
//! ## Usage
//!
//! ```sh
//! NEWSDATA_API_KEY=... newshub_client latest --category business
//! ```
//!
//! An empty result list means either the service returned no articles or
//! the upstream was unavailable; the client does not distinguish the two.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use newshub_client::cli::{Cli, Command};
use newshub_client::{NewsClient, NewsClientConfig, NewsPage, PLACEHOLDER_API_KEY};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args.base_url, json = args.json, "Parsed CLI arguments");

    let api_key = args
        .api_key
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string());
    let config = NewsClientConfig::new(args.base_url.clone(), api_key);
    let client = NewsClient::new(&config)?;

    let page = match &args.command {
        Command::Latest { country, category } => {
            info!(%country, category = category.as_deref().unwrap_or("top"), "Fetching latest headlines");
            client.latest_news(country, category.as_deref()).await
        }
        Command::Search { query, country } => {
            info!(%query, %country, "Searching articles");
            client.search_news(query, country).await
        }
        Command::Category { category, country } => {
            info!(%category, %country, "Fetching category headlines");
            client.news_by_category(category, country).await
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_headlines(&page);
    }

    Ok(())
}

/// Print one line per article: headline, publisher, and link when present.
fn print_headlines(page: &NewsPage) {
    if page.results.is_empty() {
        println!("No articles.");
        return;
    }
    for article in &page.results {
        let title = article.title.as_deref().unwrap_or("(untitled)");
        let source = article.source_name_or_empty();
        match article.link.as_deref() {
            Some(link) => println!("{title} [{source}]\n  {link}"),
            None => println!("{title} [{source}]"),
        }
    }
    if let Some(total) = page.total_results {
        println!("\n{} of {} matching articles.", page.results.len(), total);
    }
}
