//! Shared testing utilities for stockroom CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use stockroom::Component;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI sessions.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used as the session's working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `stockroom` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("stockroom").expect("Failed to locate stockroom binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("STOCKROOM_STORE")
            .env_remove("STOCKROOM_LOG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run one session feeding `lines` on stdin.
    pub fn session(&self, lines: &[&str]) -> assert_cmd::assert::Assert {
        let mut input = lines.join("\n");
        input.push('\n');
        self.cli().write_stdin(input).assert()
    }

    /// Path to the default inventory file.
    pub fn store_path(&self) -> PathBuf {
        self.work_dir.join("stock.json")
    }

    /// Write `components` as the inventory file.
    pub fn write_inventory(&self, components: &[Component]) {
        let data = serde_json::to_string_pretty(components).expect("serialize inventory");
        fs::write(self.store_path(), data).expect("write inventory");
    }

    /// Raw inventory file content.
    pub fn read_inventory_raw(&self) -> String {
        fs::read_to_string(self.store_path()).expect("read inventory")
    }

    /// Decoded inventory file.
    pub fn read_inventory(&self) -> Vec<Component> {
        serde_json::from_str(&self.read_inventory_raw()).expect("decode inventory")
    }

    /// Write `stockroom.toml` in the working directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("stockroom.toml"), content).expect("write config");
    }

    /// Root of the temp tree, outside the working directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}
