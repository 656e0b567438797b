use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::Context;
use std::path::PathBuf;

use commands::{compose, list, stats};
use review_store::ReviewStore;
use review_view::{FilterKey, SortKey};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reviews")]
#[command(about = "Product review listing for the storefront")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Load reviews from a JSON dataset instead of the builtin fixtures
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show aggregate rating statistics for a product
    #[command(
        long_about = "Show aggregate rating statistics for a product: average rating, per-star percentage breakdown, verified purchases, media counts, and the would-recommend rate."
    )]
    Stats {
        /// Product id (a product handle also works here)
        product: String,

        /// Product handle, when it differs from the id
        #[arg(long)]
        handle: Option<String>,
    },

    /// List a product's reviews, filtered and sorted
    #[command(
        long_about = "List a product's reviews. Reviews are filtered first, then stable-sorted, so ties keep their collection order. Content over 300 characters is truncated unless the review is expanded with --expand."
    )]
    List {
        /// Product id (a product handle also works here)
        product: String,

        /// Product handle, when it differs from the id
        #[arg(long)]
        handle: Option<String>,

        /// Sort order: newest, oldest, highest, lowest, helpful
        #[arg(long, default_value = "helpful")]
        sort: SortKey,

        /// Filter: all, 1-5, verified, with-photos, with-videos
        #[arg(long, default_value = "all")]
        filter: FilterKey,

        /// Review id to show untruncated
        #[arg(long, value_name = "REVIEW_ID")]
        expand: Option<String>,
    },

    /// Draft a new review interactively
    #[command(
        long_about = "Open the review composer for a product and draft a review interactively. The draft is printed but not written back to the dataset; submission is handled by the storefront backend."
    )]
    Compose {
        /// Product id
        product: String,

        /// Display name of the product shown in the composer
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    // The dataset is loaded once and read for the rest of the process.
    let store = match &cli.data {
        Some(path) => ReviewStore::from_json_file(path)
            .wrap_err_with(|| format!("Failed to load review dataset {}", path.display()))?,
        None => ReviewStore::builtin().clone(),
    };

    match cli.command {
        Commands::Stats { product, handle } => {
            stats::run_stats(&product, handle.as_deref(), &store, &output)
        }
        Commands::List {
            product,
            handle,
            sort,
            filter,
            expand,
        } => list::run_list(&product, handle.as_deref(), sort, filter, expand, &store, &output),
        Commands::Compose { product, name } => compose::run_compose(&product, name, &output),
    }
}
