//! Common test utilities for resfetch integration tests

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use resfetch::{Bundle, DirectoryBundle, FetchConfig};
use tempfile::TempDir;

/// Contents of the `hello.cmd` fixture resource
#[allow(dead_code)]
pub const HELLO_CMD: &[u8] = b"@echo off\r\necho Hello from the fixture bundle\r\n";

/// A fake temp root plus a resource directory acting as the bundle
pub struct TestRoot {
    /// Temporary directory holding everything below
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Directory used as the temp root for `TempDirectory`
    pub temp_root: PathBuf,
    /// Directory holding the bundled resources
    pub bundle_dir: PathBuf,
}

impl TestRoot {
    /// Create a new test root with the default fixture resources
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let temp_root = temp.path().join("tmp");
        let bundle_dir = temp.path().join("bundle");
        std::fs::create_dir_all(&temp_root).expect("Failed to create temp root");
        std::fs::create_dir_all(&bundle_dir).expect("Failed to create bundle directory");

        let root = Self {
            temp,
            temp_root,
            bundle_dir,
        };
        root.add_resource("hello.cmd", HELLO_CMD);
        root.add_resource("bin/tool.sh", b"#!/bin/sh\necho tool\n");
        root
    }

    /// Add a resource file to the bundle directory
    pub fn add_resource(&self, name: &str, content: &[u8]) {
        let path = self.bundle_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write resource");
    }

    /// Config rooted at this test's temp root
    #[allow(dead_code)]
    pub fn config(&self) -> FetchConfig {
        FetchConfig::with_temp_root(&self.temp_root)
    }

    /// Counting bundle over the fixture resources
    #[allow(dead_code)]
    pub fn counting_bundle(&self) -> Arc<CountingBundle> {
        Arc::new(CountingBundle {
            inner: DirectoryBundle::new(&self.bundle_dir),
            opens: AtomicUsize::new(0),
        })
    }
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

/// Bundle wrapper recording how many lookups were made
pub struct CountingBundle {
    inner: DirectoryBundle,
    opens: AtomicUsize,
}

impl CountingBundle {
    #[allow(dead_code)]
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

impl Bundle for CountingBundle {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + Send + '_>>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        self.inner.open(name)
    }

    fn names(&self) -> io::Result<Vec<String>> {
        self.inner.names()
    }
}
