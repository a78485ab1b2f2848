use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Catalog;

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let file =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let catalog =
        Catalog::from_json(&file).with_context(|| format!("invalid catalog in {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        categories = catalog.sections().len(),
        apps = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_names_the_path() {
        let err = load_catalog("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"categories":[{"category":"media","title":"Media","apps":[{"id":"vlc","name":"VLC","winget":"VideoLAN.VLC"}]}]}"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("vlc").unwrap().name, "VLC");
    }

    #[test]
    fn duplicate_ids_surface_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"categories":[{"category":"media","title":"Media","apps":[{"id":"vlc","name":"VLC"},{"id":"vlc","name":"VLC 2"}]}]}"#,
        )
        .unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate app id 'vlc'"));
    }
}
