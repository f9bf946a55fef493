//! Shared helpers for integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated home for the CLI: config and data directories live in a
/// temporary directory so tests never touch the user's files.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_home(&self) -> PathBuf {
        self.path().join("config")
    }

    /// Where `stagelight` looks for its config inside the sandbox.
    pub fn config_file(&self) -> PathBuf {
        self.config_home().join("stagelight").join("config.toml")
    }

    /// Write `content` to a file in the sandbox and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// A `stagelight` command running inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("stagelight").expect("Binary not built");
        cmd.env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.path().join("data"))
            .env("NO_COLOR", "1")
            .env_remove("STAGELIGHT_LOG");
        cmd
    }
}
