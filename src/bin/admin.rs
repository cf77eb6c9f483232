//! CLI administration tool for shorturl.
//!
//! Inspects and registers URL mappings directly against the database,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List mappings created in January
//! cargo run --bin admin -- mappings list --from 2024-01-01 --to 2024-01-31
//!
//! # Show a single mapping
//! cargo run --bin admin -- mappings show 42
//!
//! # Register a URL (same validation and allocation as the API)
//! cargo run --bin admin -- mappings add https://www.example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `DNS_TIMEOUT_MS` (optional): bound on the host lookup for `mappings add`

use shorturl::application::services::{UrlService, ValidationService};
use shorturl::domain::entities::UrlMapping;
use shorturl::domain::repositories::{MappingFilter, UrlRepository};
use shorturl::infrastructure::dns::TokioHostResolver;
use shorturl::infrastructure::persistence::PgUrlRepository;
use shorturl::utils::date_param::{Bound, parse_date_param};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and register URL mappings
    Mappings {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping subcommands.
#[derive(Subcommand)]
enum MappingAction {
    /// List mappings in identifier order
    List {
        /// Earliest creation date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        from: Option<String>,

        /// Latest creation date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of rows
        #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(i64).range(1..=1000))]
        limit: i64,
    },

    /// Show a single mapping
    Show {
        /// Short identifier
        short_id: i64,
    },

    /// Register a URL
    Add {
        /// URL to register (exact string, no normalization)
        url: String,

        /// Check the URL shape only, without resolving the host
        #[arg(long)]
        skip_dns: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Mappings { action } => handle_mapping_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches mapping commands.
async fn handle_mapping_action(action: MappingAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));

    match action {
        MappingAction::List { from, to, limit } => list_mappings(repo, from, to, limit).await?,
        MappingAction::Show { short_id } => show_mapping(repo, short_id).await?,
        MappingAction::Add { url, skip_dns } => add_mapping(repo, url, skip_dns).await?,
    }

    Ok(())
}

/// Lists mappings as a table.
///
/// # Output Format
///
/// ```text
/// 📋 URL Mappings
///
///   ID     Created           URL
///   ──────────────────────────────────────────────────────────────
///   1      2024-01-15 10:30  http://www.example.com
///   2      2024-01-16 14:20  http://www.freecodecamp.org
/// ```
async fn list_mappings(
    repo: Arc<PgUrlRepository>,
    from: Option<String>,
    to: Option<String>,
    limit: i64,
) -> Result<()> {
    println!("{}", "📋 URL Mappings".bright_blue().bold());
    println!();

    let from = parse_date_arg(from.as_deref(), "--from", Bound::Start)?;
    let to = parse_date_arg(to.as_deref(), "--to", Bound::End)?;

    let mappings = repo
        .list(&MappingFilter::new(limit).with_date_range(from, to))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<17} {}",
        "ID".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<6} {:<17} {}",
            mapping.short_id.to_string().bright_green(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            mapping.original_url.cyan()
        );
    }

    println!();
    println!(
        "  Shown: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shows one mapping by identifier.
async fn show_mapping(repo: Arc<PgUrlRepository>, short_id: i64) -> Result<()> {
    let mapping = repo
        .find_by_short_id(short_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match mapping {
        Some(mapping) => print_mapping(&mapping),
        None => println!(
            "{}",
            format!("❌ No short URL found for {}", short_id).red()
        ),
    }

    Ok(())
}

/// Registers a URL through the same validation and allocation path as the API.
///
/// Resubmitting a registered URL prints its existing mapping.
async fn add_mapping(repo: Arc<PgUrlRepository>, url: String, skip_dns: bool) -> Result<()> {
    let dns_timeout = std::env::var("DNS_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);

    let validation = ValidationService::new(
        Arc::new(TokioHostResolver::new()),
        Duration::from_millis(dns_timeout),
    );

    let validated = if skip_dns {
        validation.validate_syntax(&url)
    } else {
        validation.validate(&url).await
    };

    let validated = match validated {
        Ok(v) => v,
        Err(e) => {
            println!("{}", format!("❌ invalid url: {}", e).red());
            return Ok(());
        }
    };

    let service = UrlService::new(repo);
    let mapping = service
        .submit(&validated)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to register URL: {}", e))?;

    println!("{}", "✅ Registered".green().bold());
    print_mapping(&mapping);

    Ok(())
}

fn print_mapping(mapping: &UrlMapping) {
    println!();
    println!("  Short URL: {}", mapping.short_id.to_string().bright_yellow().bold());
    println!("  Original:  {}", mapping.original_url.cyan());
    println!(
        "  Created:   {}",
        mapping.created_at.to_rfc3339().bright_black()
    );
    println!();
}

fn parse_date_arg(
    value: Option<&str>,
    flag: &str,
    bound: Bound,
) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
    value
        .map(|raw| {
            parse_date_param(raw, bound)
                .with_context(|| format!("{} expects YYYY-MM-DD or RFC 3339, got '{}'", flag, raw))
        })
        .transpose()
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let repo = PgUrlRepository::new(Arc::new(pool.clone()));
            let mappings = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;
            let counter = repo
                .counter_value()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read counter: {}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Mappings:   {}",
                mappings.to_string().bright_green().bold()
            );
            println!(
                "  Last id:    {}",
                counter.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
