//! content-doctor - Content API diagnostic tool
//!
//! Fetches the content document and reports, section by section, what
//! the site would actually use: present sections and their shape,
//! unknown keys the site ignores, and sections falling back to compiled
//! defaults. With `--json` it prints the fully merged site content
//! instead.
//!
//! Always exits 0. A broken or unreachable API is a finding to report,
//! not a failure of the tool.

use anyhow::Result;
use boothkit_common::{defaults, ContentDocument, ContentView, Section, SiteContent};
use boothkit_site::client::ContentClient;
use boothkit_site::config::ApiBaseResolver;
use clap::Parser;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "content-doctor")]
#[command(about = "Diagnose the content API feeding the photo booth site")]
#[command(version)]
struct Args {
    /// Content API base URL
    #[arg(long, env = "BOOTHKIT_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Print the merged site content as JSON instead of the report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting content-doctor v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let resolver = match &args.api_url {
        Some(url) => ApiBaseResolver::with_override(url.clone()),
        None => ApiBaseResolver::new(),
    };
    let base_url = resolver.resolve();
    info!("Content API base: {}", base_url);

    let client = ContentClient::with_timeout(&base_url, Duration::from_secs(args.timeout_secs));

    match client.try_fetch_document().await {
        Ok(document) => {
            info!("✓ Content document fetched ({} sections)", document.len());
            if args.json {
                print_merged_json(&document)?;
            } else {
                print_report(&client.content_url(), &document);
            }
        }
        Err(e) => {
            println!("Content fetch failed: {}", e);
            println!("The site would render compiled defaults for every section.");
            if args.json {
                print_merged_json(&ContentDocument::default())?;
            }
        }
    }

    Ok(())
}

fn print_merged_json(document: &ContentDocument) -> Result<()> {
    let site = SiteContent::resolve(document, defaults());
    println!("{}", serde_json::to_string_pretty(&site)?);
    Ok(())
}

fn print_report(url: &str, document: &ContentDocument) {
    println!("Content endpoint: {}", url);
    println!();

    let mut present = 0;
    for section in Section::ALL {
        match document.section_value(section) {
            Some(value) => {
                present += 1;
                println!("  {:<16} {}", section.as_key(), describe_shape(value));
            }
            None => {
                println!("  {:<16} absent (defaults apply)", section.as_key());
            }
        }
    }

    let unknown = document.unknown_keys();
    println!();
    if !unknown.is_empty() {
        println!("Unknown keys (ignored): {}", unknown.join(", "));
    }
    println!(
        "Summary: {} of {} sections present, {} defaulting, {} unknown keys",
        present,
        Section::ALL.len(),
        Section::ALL.len() - present,
        unknown.len()
    );
}

fn describe_shape(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("list ({} items)", items.len()),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("items") {
                let header = if map.contains_key("header") {
                    "with header"
                } else {
                    "no header"
                };
                format!("headed list ({} items, {})", items.len(), header)
            } else {
                format!("record ({} fields)", map.len())
            }
        }
        other => format!("malformed ({})", value_kind(other)),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
