//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - extract: Extract command arguments
//! - list: List command arguments
//! - clean: Clean command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod clean;
pub mod extract;
pub mod list;

pub use clean::CleanArgs;
pub use extract::ExtractArgs;
pub use list::ListArgs;

/// resfetch - extract bundled resources into a temp directory
#[derive(Parser, Debug)]
#[command(
    name = "resfetch",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Extract bundled resources into a scoped temp directory",
    long_about = "resfetch copies resources shipped with an application into a per-project \
                  directory under the system temp root, so tools that need a real file path \
                  can use them.",
    after_help = "Examples:\n   \
                  resfetch list                                   # List built-in resources\n   \
                  resfetch extract hello.cmd --project demo       # Extract into <tmp>/demo\n   \
                  resfetch extract run.sh --group acme --project app --bundle-dir ./res\n   \
                  resfetch clean --group acme --project app       # Remove <tmp>/acme/app\n"
)]
pub struct Cli {
    /// Directory to use instead of the system temp directory
    #[arg(long, global = true, value_name = "DIR")]
    pub temp_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract resources into a project temp directory
    Extract(ExtractArgs),

    /// List resources available in the bundle
    List(ListArgs),

    /// Remove a project temp directory and everything in it
    Clean(CleanArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}

/// Which temp directory a command works on
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Project directory name
    #[arg(long, short = 'p')]
    pub project: String,

    /// Shared group directory the project lives in
    #[arg(long, short = 'g', default_value = "")]
    pub group: String,
}
