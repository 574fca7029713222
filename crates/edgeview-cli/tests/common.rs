//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use edgeview_testing::TestStore;
use std::path::Path;

/// `edgeview` with a clean environment: no store override, no RUST_LOG.
pub fn command() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("edgeview");
    cmd.env_remove("EDGECORE_DB_PATH").env_remove("RUST_LOG");
    cmd
}

/// `edgeview get <args> --input <store>`
pub fn get(store: &Path, args: &[&str]) -> Command {
    let mut cmd = command();
    cmd.arg("get").args(args).arg("--input").arg(store);
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run edgeview");
    assert!(
        output.status.success(),
        "edgeview failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

pub fn store_with(records: &[edgeview_types::ResourceRecord]) -> TestStore {
    TestStore::with_records(records).expect("Failed to seed store")
}
