use clap::Parser;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List built-in resources:\n    resfetch list\n\n\
                  List resources in a directory:\n    resfetch list --bundle-dir ./res")]
pub struct ListArgs {
    /// Read resources from this directory instead of the built-in bundle
    #[arg(long, value_name = "DIR")]
    pub bundle_dir: Option<PathBuf>,
}
