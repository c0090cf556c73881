//! Catalog Forge CLI - open, seed-if-empty, report

use std::path::PathBuf;

use anyhow::Context;
use catalog_forge::report::Reporter;
use catalog_forge::seed::{self, SeedOutcome};
use catalog_forge::storage::CatalogStore;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "catalog-forge")]
#[command(version)]
#[command(about = "Provision a SQLite product catalog, seed it once, and report on it")]
#[command(long_about = r#"
Catalog Forge runs one batch cycle against a SQLite catalog database:
  1. Open (creating if absent) the database and apply the schema
  2. Seed the fixed catalog, unless the store already holds data
  3. Print a formatted report: categories, per-category listings with
     totals, overall statistics, and a joined product/category listing

The report goes to stdout; diagnostics go to stderr.
"#)]
struct Cli {
    /// Path to the catalog database file
    #[arg(short, long, default_value = "catalog_forge.db")]
    database: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report body
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!(database = %cli.database.display(), "opening catalog store");
    let mut store = CatalogStore::open(&cli.database)
        .with_context(|| format!("failed to open catalog store at {}", cli.database.display()))?;

    // If seeding fails, the report phase never runs against a half-seeded store
    match seed::seed_if_empty(&mut store).context("seeding failed")? {
        SeedOutcome::Seeded {
            categories,
            products,
        } => {
            tracing::info!(categories, products, "seeded catalog");
        }
        SeedOutcome::AlreadyPopulated { categories } => {
            tracing::debug!(categories, "seed skipped");
        }
    }

    let reporter = Reporter::new(&store);
    reporter
        .print_report()
        .context("report generation failed")?;

    store.close().context("failed to close catalog store")?;
    tracing::info!("catalog run complete");

    Ok(())
}
