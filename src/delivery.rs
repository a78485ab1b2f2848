use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const DEFAULT_SCRIPT_NAME: &str = "install-apps.bat";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Written exactly as generated.
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn apply(&self, script: &str) -> String {
        match self {
            LineEnding::Lf => script.to_string(),
            LineEnding::Crlf => script.replace("\r\n", "\n").replace('\n', "\r\n"),
        }
    }
}

/// Writes the script to `path`, creating missing parent directories.
pub fn deliver(script: &str, path: impl AsRef<Path>, line_ending: LineEnding) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let contents = line_ending.apply(script);
    fs::write(path, contents.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "installer script written");

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lf_writes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SCRIPT_NAME);

        deliver("@echo off\necho.\n", &path, LineEnding::Lf).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "@echo off\necho.\n");
    }

    #[test]
    fn crlf_converts_without_doubling() {
        assert_eq!(LineEnding::Crlf.apply("a\nb\r\nc\n"), "a\r\nb\r\nc\r\n");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("nested").join("setup.bat");

        let written = deliver("pause\n", &path, LineEnding::Crlf).unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read(&path).unwrap(), b"pause\r\n");
    }
}
