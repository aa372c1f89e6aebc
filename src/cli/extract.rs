use clap::Parser;
use std::path::PathBuf;

use super::TargetArgs;

/// Arguments for the extract command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Extract a built-in resource:\n    resfetch extract hello.cmd --project demo\n\n\
                  Extract from a resource directory:\n    resfetch extract tools/run.sh -p demo --bundle-dir ./res\n\n\
                  Print JSON instead of name/path lines:\n    resfetch extract hello.cmd -p demo --json")]
pub struct ExtractArgs {
    /// Logical names of the resources to extract
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Read resources from this directory instead of the built-in bundle
    #[arg(long, value_name = "DIR")]
    pub bundle_dir: Option<PathBuf>,

    /// Print the extracted resources as JSON
    #[arg(long)]
    pub json: bool,
}
