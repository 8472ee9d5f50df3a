use anyhow::Result;
use category_splitter::config::Config;
use category_splitter::data::categories::{load_categories, load_pairs};
use category_splitter::{split_categories, storage};
use clap::Parser;
use itertools::Itertools;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "category-splitter",
    about = "Split benchmark categories into balanced clusters that keep related categories together"
)]
struct Cli {
    /// Path to the categories JSON file
    #[clap(long, default_value = "categories.json")]
    categories: PathBuf,

    /// Path to the category pairs JSON file
    #[clap(long, default_value = "pairs.json")]
    pairs: PathBuf,

    /// Number of clusters to produce
    #[clap(long, short = 'n', default_value = "5", allow_negative_numbers = true)]
    clusters: i64,

    /// Output directory for results (nothing is written when omitted)
    #[clap(long)]
    output_dir: Option<PathBuf>,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    log::info!("Starting category split");
    log::info!("Categories: {}", args.categories.display());
    log::info!("Pairs: {}", args.pairs.display());

    let config = Config::from_requested(args.clusters, args.output_dir)?;

    // 1. Load data
    let categories = load_categories(&args.categories)?;
    let pairs = load_pairs(&args.pairs)?;

    // 2. Build the relation graph and split it
    let outcome = split_categories(&categories, &pairs, &config)?;

    // 3. Print clusters
    for cluster in &outcome.clusters {
        println!("Cluster {}: [{}]", cluster.id + 1, cluster.members.iter().join(", "));
    }
    println!(
        "Number of crossing edges between clusters: {}",
        outcome.report.initial_crossing_edges
    );
    println!("Number of edges removed: {}", outcome.report.removed_edge_count);

    // 4. Save results if requested
    if let Some(output_dir) = &config.output_dir {
        storage::save_results(&outcome, output_dir)?;
        log::info!("Results saved to {}", output_dir.display());
    }

    log::info!("Split complete");

    Ok(())
}
