//! List command implementation

use resfetch::{Result, error};

use super::open_bundle;
use crate::cli::ListArgs;

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let bundle = open_bundle(args.bundle_dir);
    let names = bundle
        .names()
        .map_err(|e| error::io_failed("Unable to list bundle resources", e))?;

    if names.is_empty() {
        println!("No resources in bundle.");
        return Ok(());
    }

    for name in &names {
        println!("{name}");
    }
    Ok(())
}
