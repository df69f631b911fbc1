use anyhow::{Result, bail};
use clap::Parser;
use portfolio_catalog::ProjectId;
use portfolio_catalog::cli_support::{DataArgs, init_logging, print_json};

/// Print a single project record by id.
#[derive(Parser, Debug)]
#[command(name = "project-show", version)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    /// Project id as used in /projects/<id>
    id: ProjectId,
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
    match store.projects().project(cli.id) {
        Some(project) => print_json(project, cli.data.pretty),
        None => bail!("project not found: {}", cli.id),
    }
}
