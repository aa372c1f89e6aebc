//! Extract command implementation
//!
//! All requested resources are scheduled on the blocking pool at once and then
//! awaited in the order they were named, so output order matches the arguments.

use std::io::{self, Write};
use std::sync::Arc;

use serde::Serialize;

use resfetch::{FetchConfig, ResourceHandle, Result, TempDirectory, error};

use super::open_bundle;
use crate::cli::ExtractArgs;

/// One line of `--json` output
#[derive(Debug, Serialize)]
struct ExtractedResource<'a> {
    name: &'a str,
    path: String,
    deleted: bool,
}

impl<'a> From<&'a ResourceHandle> for ExtractedResource<'a> {
    fn from(resource: &'a ResourceHandle) -> Self {
        Self {
            name: resource.name(),
            path: resource.path().display().to_string(),
            deleted: resource.is_deleted(),
        }
    }
}

/// Run extract command
pub async fn run(config: &FetchConfig, args: ExtractArgs) -> Result<()> {
    let dir = TempDirectory::with_config(
        config,
        &args.target.group,
        &args.target.project,
        open_bundle(args.bundle_dir),
    )?;

    let pending: Vec<_> = args
        .names
        .iter()
        .map(|name| dir.extract_async(name))
        .collect();
    let mut extracted: Vec<Arc<ResourceHandle>> = Vec::with_capacity(pending.len());
    for extraction in pending {
        extracted.push(extraction.await?);
    }

    if args.json {
        print_json(&extracted)
    } else {
        for resource in &extracted {
            println!("{}\t{}", resource.name(), resource.path().display());
        }
        Ok(())
    }
}

fn print_json(extracted: &[Arc<ResourceHandle>]) -> Result<()> {
    let entries: Vec<ExtractedResource<'_>> = extracted
        .iter()
        .map(|resource| ExtractedResource::from(resource.as_ref()))
        .collect();

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &entries)
        .map_err(|e| error::io_failed("Unable to write JSON output", io::Error::from(e)))?;
    writeln!(stdout).map_err(|e| error::io_failed("Unable to write JSON output", e))
}
