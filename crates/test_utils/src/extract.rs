//! Temp-dir Extract Writer
//!
//! Writes record collections out as headered camelCase CSV files, so tests
//! can exercise the path-taking query operations end to end. The directory
//! lives for as long as the `ExtractDir` value does.

use std::path::PathBuf;

use serde::Serialize;
use tempfile::TempDir;

use domain_records::{Agent, Claim, Customer, Policy};

/// A temporary directory of CSV extracts
pub struct ExtractDir {
    dir: TempDir,
}

impl Default for ExtractDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractDir {
    /// Creates a fresh extract directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create extract dir"),
        }
    }

    /// A path inside the directory that no extract was written to
    pub fn missing_path(&self) -> PathBuf {
        self.dir.path().join("missing.csv")
    }

    /// Writes a raw CSV body, for malformed-extract tests
    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write extract");
        path
    }

    /// Writes the customer collection as `customers.csv`
    pub fn write_customers(&self, customers: &[Customer]) -> PathBuf {
        self.write_records("customers.csv", customers)
    }

    /// Writes the agent collection as `agents.csv`
    pub fn write_agents(&self, agents: &[Agent]) -> PathBuf {
        self.write_records("agents.csv", agents)
    }

    /// Writes the policy collection as `policies.csv`
    pub fn write_policies(&self, policies: &[Policy]) -> PathBuf {
        self.write_records("policies.csv", policies)
    }

    /// Writes the claim collection as `claims.csv`
    pub fn write_claims(&self, claims: &[Claim]) -> PathBuf {
        self.write_records("claims.csv", claims)
    }

    fn write_records<T: Serialize>(&self, name: &str, records: &[T]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut writer = csv::Writer::from_path(&path).expect("failed to open extract for writing");
        for record in records {
            writer.serialize(record).expect("failed to serialize record");
        }
        writer.flush().expect("failed to flush extract");
        path
    }
}
