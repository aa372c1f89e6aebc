//! resfetch - extract bundled resources into a temp directory
//!
//! Command line front end for the `resfetch` library: extract resources from the
//! built-in bundle or a resource directory, list what a bundle contains, and clean up
//! project temp directories.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::{Cli, Commands};
use resfetch::FetchConfig;

/// Install the stderr log subscriber; `RUST_LOG` overrides the default filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "resfetch=debug" } else { "resfetch=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.temp_root {
        Some(root) => FetchConfig::with_temp_root(root),
        None => FetchConfig::system().clone(),
    };

    let result = match cli.command {
        Commands::Extract(args) => commands::extract::run(&config, args).await,
        Commands::List(args) => commands::list::run(args),
        Commands::Clean(args) => commands::clean::run(&config, args),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
