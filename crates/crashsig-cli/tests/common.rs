//! Common test utilities shared across integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SIGNATURE: &str =
    r#"{"symptoms":[{"type":"output","value":"/ERROR: AddressSanitizer/"}]}"#;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".crashsig");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("crashsig");
        cmd.env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    /// Run with `--format json` and parse stdout. Panics on failure.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(["--format", "json"])
            .args(args)
            .output()
            .expect("Failed to run crashsig");

        assert!(
            output.status.success(),
            "crashsig {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Failed to parse JSON output")
    }

    pub fn create_signature(&self, description: &str) -> i64 {
        let result = self.json(&[
            "signature",
            "new",
            "--signature",
            SIGNATURE,
            "--short-description",
            description,
        ]);
        result["content"]["id"]
            .as_i64()
            .expect("Expected signature id")
    }

    pub fn add_crash(&self, bucket: Option<i64>, quality: Option<i64>) -> i64 {
        let bucket = bucket.map(|b| b.to_string());
        let quality = quality.map(|q| q.to_string());

        let mut args = vec![
            "crash",
            "add",
            "--product",
            "firefox",
            "--platform",
            "x86-64",
            "--os",
            "linux",
        ];
        if let Some(bucket) = &bucket {
            args.extend(["--bucket", bucket.as_str()]);
        }
        if let Some(quality) = &quality {
            args.extend(["--quality", quality.as_str()]);
        }

        let result = self.json(&args);
        result["content"]["id"].as_i64().expect("Expected crash id")
    }

    pub fn add_provider(&self, hostname: &str, url_template: &str) {
        self.json(&[
            "provider",
            "add",
            "--hostname",
            hostname,
            "--url-template",
            url_template,
        ]);
    }
}
