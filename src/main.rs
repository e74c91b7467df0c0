//! Museum-Indexer main entry point
//!
//! This is the command-line interface for the Museum-Indexer article pipeline.

use clap::Parser;
use museum_indexer::config::{load_config_with_hash, Config};
use museum_indexer::crawler::crawl;
use museum_indexer::extractor::extract;
use museum_indexer::output::{
    load_statistics, print_catalog_statistics, print_crawl_statistics,
    print_extraction_statistics,
};
use museum_indexer::storage::{open_storage, Storage};
use museum_indexer::url::CrawlScope;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Exit status used when the run is interrupted with Ctrl-C
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Museum-Indexer: an offline article index builder
///
/// Museum-Indexer crawls a museum's article archive breadth-first, records
/// the same-site link graph, and extracts structured article records with
/// tags and keywords for a client-side search UI.
#[derive(Parser, Debug)]
#[command(name = "museum-indexer")]
#[command(version = "1.0.0")]
#[command(about = "An offline article index builder", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Crawl and persist the link graph without extracting articles
    #[arg(long, conflicts_with_all = ["extract_only", "dry_run", "stats"])]
    crawl_only: bool,

    /// Extract articles from a previously persisted link graph
    #[arg(long, conflicts_with_all = ["crawl_only", "dry_run", "stats"])]
    extract_only: bool,

    /// Validate config and show what would be done without fetching anything
    #[arg(long, conflicts_with_all = ["stats"])]
    dry_run: bool,

    /// Show statistics of the persisted artifacts and exit
    #[arg(long)]
    stats: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Handle different modes
    if cli.dry_run {
        return handle_dry_run(&config);
    }
    if cli.stats {
        return handle_stats(&config);
    }

    let pipeline = async {
        if cli.crawl_only {
            handle_crawl(&config).await
        } else if cli.extract_only {
            handle_extract(&config).await
        } else {
            handle_pipeline(&config).await
        }
    };

    tokio::select! {
        result = pipeline => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted; partial results were not saved");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("museum_indexer=info,warn"),
            1 => EnvFilter::new("museum_indexer=debug,info"),
            2 => EnvFilter::new("museum_indexer=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be done
fn handle_dry_run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let scope = CrawlScope::new(&config.crawler.root_url)?;

    println!("=== Museum-Indexer Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Root URL: {}", scope.root());
    println!("  Scope host: {}", scope.host());
    println!("  Scope prefix: {}", scope.prefix());
    println!("  Timeout: {}s", config.crawler.timeout_secs);

    println!("\nExtractor Configuration:");
    println!("  Max articles: {}", config.extractor.max_articles);
    println!("  Delay: {}ms", config.extractor.delay_ms);
    println!("  Timeout: {}s", config.extractor.timeout_secs);
    println!("  Canonical origin: {}", config.extractor.canonical_origin);
    println!(
        "  Article section: /{}/ (excluding /{})",
        config.extractor.article_section, config.extractor.excluded_section
    );

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.identifier);

    println!("\nOutput:");
    println!("  Crawl graph: {}", config.output.graph_path);
    println!("  Visited paths: {}", config.output.visited_path);
    println!("  Article catalog: {}", config.output.catalog_path);

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling at {}", scope.root());

    Ok(())
}

/// Handles the --stats mode: shows statistics of the persisted artifacts
fn handle_stats(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let storage = open_storage(&config.output);
    let stats = load_statistics(&storage)?;

    match &stats.crawl {
        Some(crawl_stats) => print_crawl_statistics(crawl_stats),
        None => println!("No crawl graph at {}", config.output.graph_path),
    }
    println!();

    match &stats.catalog {
        Some(catalog_stats) => print_catalog_statistics(catalog_stats),
        None => println!("No article catalog at {}", config.output.catalog_path),
    }

    Ok(())
}

/// Runs the crawl stage and persists its artifacts
async fn handle_crawl(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting crawl of {}", config.crawler.root_url);

    let output = match crawl(config).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let mut storage = open_storage(&config.output);
    storage.save_crawl(&output)?;

    tracing::info!(
        "Crawl completed: {} pages, {} in-scope links, {} fetch errors",
        output.stats.pages_visited,
        output.stats.total_links,
        output.stats.errors()
    );

    Ok(())
}

/// Runs the extraction stage from the persisted crawl graph
async fn handle_extract(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut storage = open_storage(&config.output);

    let graph = match storage.load_graph() {
        Ok(graph) => graph,
        Err(e) => {
            tracing::error!("Crawler output not loaded: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Loaded crawl graph with {} pages", graph.len());

    let output = extract(&graph, &config.extractor, &config.user_agent).await?;
    if output.stats.candidates_found == 0 {
        tracing::warn!("No article URLs found in the crawl graph");
    }
    storage.save_catalog(&output.catalog)?;

    print_extraction_statistics(&output.stats);

    Ok(())
}

/// Runs both stages back to back
async fn handle_pipeline(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    handle_crawl(config).await?;
    handle_extract(config).await
}
