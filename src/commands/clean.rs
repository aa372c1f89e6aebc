//! Clean command implementation

use resfetch::{FetchConfig, Result, TempDirectory};

use super::open_bundle;
use crate::cli::CleanArgs;

/// Run clean command
pub fn run(config: &FetchConfig, args: CleanArgs) -> Result<()> {
    let group = &args.target.group;
    let project = &args.target.project;

    // with_config creates missing directories
    let path = TempDirectory::project_path(config, group, project)?;
    if !path.is_dir() {
        println!("Nothing to clean at {}", path.display());
        return Ok(());
    }

    TempDirectory::with_config(config, group, project, open_bundle(None))?.close()?;

    println!("Removed {}", path.display());
    Ok(())
}
