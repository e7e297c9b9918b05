// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for setting up template and variable fixtures

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// On-disk template + variables fixture for loader and render tests
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write a template file and return its path
    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("failed to write template fixture");
        path
    }

    /// Write a YAML variables file and return its path
    pub fn write_vars(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("failed to write variables fixture");
        path
    }

    /// Path for an output file inside the fixture dir (not created)
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const INTERFACE_TEMPLATE: &str =
    "set interface {{ ifd }} unit {{ unit }} family inet address {{ ip }}";

pub const INTERFACE_VARS_YAML: &str = "ifd: ge-0/0/0\nunit: 101\nip: 10.0.1.1/24\n";
