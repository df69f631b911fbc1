//! Run one catalog query and print the view model as JSON.
//!
//! Output carries the ordered results, the category facet counts under the
//! current search, and a short summary ("showing N of M").

use anyhow::Result;
use clap::Parser;
use portfolio_catalog::cli_support::{DataArgs, init_logging, print_json};
use portfolio_catalog::{
    CategoryFilter, FacetCounts, ProjectRecord, QuerySpec, SortOrder,
};
use serde::Serialize;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "catalog-query", version, about = "Filter, search and sort the project catalog")]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    /// Category to show, or "All"
    #[arg(long, default_value = "All")]
    category: String,

    /// Case-insensitive text matched against titles, descriptions and technologies
    #[arg(long, default_value = "")]
    search: String,

    /// date-desc, date-asc, name-asc or content [default: date-desc, content with --featured]
    #[arg(long)]
    sort: Option<SortOrder>,

    /// Only the featured projects shown on the home page
    #[arg(long)]
    featured: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryOutput<'a> {
    query: &'a QuerySpec,
    results: Vec<&'a ProjectRecord>,
    facets: FacetCounts,
    summary: Summary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    showing: usize,
    total: usize,
    active_filters: bool,
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
    let index = store.projects();

    let base = if cli.featured {
        QuerySpec::featured()
    } else {
        QuerySpec::new()
    };
    let mut query = base
        .with_category(CategoryFilter::from_label(&cli.category))
        .with_search(cli.search.clone());
    if let Some(sort) = cli.sort {
        query = query.with_sort(sort);
    }

    let results = index.query(&query);
    debug!(matched = results.len(), total = index.len(), "catalog query");

    let output = QueryOutput {
        query: &query,
        summary: Summary {
            showing: results.len(),
            total: index.len(),
            active_filters: query.has_active_filters(),
        },
        facets: index.facets(&query),
        results,
    };
    print_json(&output, cli.data.pretty)
}
