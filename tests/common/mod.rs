//! Shared helpers for winhub integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const SMALL_CATALOG: &str = r#"{
  "categories": [
    {
      "category": "browsers",
      "title": "Web Browsers",
      "description": "Browse the web",
      "icon": "🌐",
      "apps": [
        {
          "id": "chrome",
          "name": "Google Chrome",
          "icon": "🟡",
          "winget": "Google.Chrome",
          "choco": "googlechrome",
          "directUrl": "https://dl.google.com/chrome/install/googlechromestandaloneenterprise64.msi",
          "silentArgs": "/qn /norestart"
        }
      ]
    },
    {
      "category": "media",
      "title": "Media Players",
      "description": "Play music and video",
      "icon": "🎵",
      "apps": [
        { "id": "vlc", "name": "VLC", "icon": "🎬", "winget": "VideoLAN.VLC", "choco": null, "directUrl": null, "silentArgs": "" },
        { "id": "cpu-z", "name": "CPU-Z", "icon": "🧮", "winget": null, "choco": null, "directUrl": "https://example.com/cpu-z.exe", "silentArgs": "/VERYSILENT" }
      ]
    }
  ]
}"#;

/// Temp workspace holding a small catalog.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::write(root.path().join("catalog.json"), SMALL_CATALOG).expect("Failed to write catalog");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.path().join("catalog.json")
    }

    /// `winhub` running inside the temp dir with the small catalog.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("winhub").expect("Failed to locate winhub binary");
        cmd.current_dir(self.path())
            .env("WINHUB_CATALOG", self.catalog_path())
            .env_remove("WINHUB_LOG");
        cmd
    }
}
