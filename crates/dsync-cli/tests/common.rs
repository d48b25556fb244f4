//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
    home_dir: PathBuf,
    config_home: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let home_dir = temp_dir.path().join("home");
        let config_home = temp_dir.path().join("xdg-config");

        fs::create_dir_all(&home_dir).expect("Failed to create home dir");
        fs::create_dir_all(&config_home).expect("Failed to create config home");

        Self {
            temp_dir,
            home_dir,
            config_home,
        }
    }

    /// A dsync command with HOME and XDG_CONFIG_HOME pointing into the
    /// fixture, so discovery never touches the real user environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dsync").expect("dsync binary");
        cmd.env("HOME", &self.home_dir);
        cmd.env("XDG_CONFIG_HOME", &self.config_home);
        cmd
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Where discovery finds the config for this fixture.
    pub fn config_path(&self) -> PathBuf {
        self.config_home.join("dsync").join("config.toml")
    }

    pub fn write_config(&self, contents: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().expect("config parent"))
            .expect("Failed to create config dir");
        fs::write(&path, contents).expect("Failed to write config");
    }

    /// A local root under the fixture plus a config pairing it with an ssh
    /// endpoint; returns the root. Used by the pull/push planning tests.
    pub fn write_photos_config(&self, link_extra: &str) -> PathBuf {
        let local_root = self.path().join("photos");
        fs::create_dir_all(local_root.join("2026").join("portraits"))
            .expect("Failed to create local root");
        // Canonicalize so CWD inference sees the same spelling the child
        // process observes (tempdirs may live behind symlinks).
        let local_root = local_root.canonicalize().expect("canonicalize local root");

        self.write_config(&format!(
            r#"
[global]
excludes = [".DS_Store"]

[endpoints.laptop]
type = "local"
path = "{}"

[endpoints.server]
type = "ssh"
host = "photo-box"
path = "/srv/photos"

[links.photos]
local = "laptop"
remote = "server"
paths = ["2026/portraits", "2026/events"]
excludes = ["*.tmp"]
{link_extra}
"#,
            local_root.display()
        ));
        local_root
    }
}
