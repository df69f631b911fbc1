//! Summary statistics plus a category taxonomy check.
//!
//! Exits non-zero with `--strict` when the configured category chips leave
//! some projects reachable only through "All".

use anyhow::{Result, bail};
use clap::Parser;
use portfolio_catalog::cli_support::{DataArgs, init_logging, print_json};
use portfolio_catalog::{CatalogStats, Category, CategoryFilter, TaxonomySource};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "catalog-stats", version, about = "Catalog totals and taxonomy gaps")]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    /// Fail when the configured chips miss a data category
    #[arg(long)]
    strict: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsOutput<'a> {
    stats: CatalogStats,
    taxonomy_source: TaxonomySource,
    chips: &'a [CategoryFilter],
    uncovered_categories: &'a [Category],
    empty_chips: Vec<&'a CategoryFilter>,
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = cli.data.load_store()?;
    let records = store.projects().records();
    let taxonomy = store.taxonomy();

    let output = StatsOutput {
        stats: store.projects().stats(),
        taxonomy_source: taxonomy.source,
        chips: &taxonomy.chips,
        uncovered_categories: taxonomy.gaps(),
        empty_chips: taxonomy.empty_chips(records),
    };
    print_json(&output, cli.data.pretty)?;

    if cli.strict && !taxonomy.gaps().is_empty() {
        let labels: Vec<&str> = taxonomy.gaps().iter().map(Category::as_str).collect();
        bail!(
            "categories without a filter chip: {}",
            labels.join(", ")
        );
    }
    Ok(())
}
