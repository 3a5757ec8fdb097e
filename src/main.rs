//! CLI for inspecting the StreamPark site links.
//!
//! # Usage
//!
//! ```bash
//! # Print all links
//! cargo run -- list
//!
//! # Print all links as JSON
//! cargo run -- list --format json
//!
//! # Resolve a single link by short or constant name
//! cargo run -- get docs
//! cargo run -- get TWITTER_URL
//!
//! # Check that every link is an absolute HTTP(S) URL
//! cargo run -- check
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` (optional): log filter, default `warn`
//! - `LOG_FORMAT` (optional): `text` or `json`, default `text`

use streampark_site_links::config;
use streampark_site_links::links::{self, SiteLink};
use streampark_site_links::validation::{LinkCheck, check_registry};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;

/// Prints and checks the Apache StreamPark site links.
#[derive(Parser)]
#[command(name = "site-links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all links
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the URL of one link
    Get {
        /// Short name (e.g. "docs") or constant name (e.g. "DOC_URL")
        name: String,
    },

    /// Check that every link is an absolute HTTP(S) URL
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid logging configuration")?;
    config::init_tracing(&config).context("Failed to initialize logging")?;

    match cli.command {
        Commands::List { format } => list_links(format)?,
        Commands::Get { name } => get_link(&name)?,
        Commands::Check => check_links()?,
    }

    Ok(())
}

fn list_links(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = links::entries().collect();
            let json = serde_json::to_string_pretty(&entries)
                .context("Failed to serialize links")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            let width = SiteLink::ALL
                .iter()
                .map(|l| l.constant_name().len())
                .max()
                .unwrap_or(0);

            for entry in links::entries() {
                let constant = format!("{:<width$}", entry.constant);
                println!("{}  {}", constant.bold(), entry.url.cyan());
            }
        }
    }

    Ok(())
}

fn get_link(name: &str) -> Result<()> {
    let url = links::lookup(name)?;
    tracing::debug!(name, url, "Resolved link");
    println!("{url}");
    Ok(())
}

fn check_links() -> Result<()> {
    let checks = check_registry();
    let failed = checks.iter().filter(|c| !c.is_ok()).count();

    for check in &checks {
        println!("{}", check_line(check));
    }

    if failed > 0 {
        anyhow::bail!("{} of {} links failed the check", failed, checks.len());
    }

    println!("{}", format!("All {} links are valid", checks.len()).green());
    Ok(())
}

/// Formats one check result. Shows the registry value verbatim, not the parsed `Url`.
fn check_line(check: &LinkCheck) -> String {
    match &check.result {
        Ok(_) => format!(
            "{} {} {}",
            "✓".green(),
            check.link.constant_name(),
            check.link.url().dimmed()
        ),
        Err(e) => format!("{} {}", "✗".red(), e),
    }
}
