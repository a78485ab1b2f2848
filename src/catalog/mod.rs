#[cfg(test)]
pub(crate) mod fixtures;
pub mod loader;
pub mod model;

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::error::CatalogError;
pub use loader::load_catalog;
pub use model::{AppRecord, Category, CategoryInfo, Section};

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Section>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        validate(&sections)?;
        Ok(Self { sections })
    }

    pub fn from_json(input: &str) -> anyhow::Result<Self> {
        let file: CatalogFile = serde_json::from_str(input)?;
        Ok(Self::new(file.categories)?)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|section| section.category == category)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.sections.iter().map(|section| section.category).collect()
    }

    /// Every app, category by category, in authoring order.
    pub fn apps(&self) -> impl Iterator<Item = &AppRecord> {
        self.sections.iter().flat_map(|section| section.apps.iter())
    }

    pub fn find(&self, id: &str) -> Option<&AppRecord> {
        self.apps().find(|app| app.id == id)
    }

    pub fn category_of(&self, id: &str) -> Option<Category> {
        self.sections
            .iter()
            .find(|section| section.apps.iter().any(|app| app.id == id))
            .map(|section| section.category)
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|section| section.apps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves ids to records in catalog order, regardless of the order the ids were given in.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<AppRecord>, CatalogError> {
        if let Some(missing) = ids
            .iter()
            .map(|id| id.as_ref())
            .find(|id: &&str| self.find(id).is_none())
        {
            return Err(CatalogError::UnknownApp(missing.to_string()));
        }

        let wanted: HashSet<&str> = ids.iter().map(|id| id.as_ref()).collect();

        Ok(self
            .apps()
            .filter(|app| wanted.contains(app.id.as_str()))
            .cloned()
            .collect())
    }
}

/// Ids must be unique across the whole catalog and each category may appear once.
/// Apps with no install path are allowed through with a warning.
fn validate(sections: &[Section]) -> Result<(), CatalogError> {
    let mut seen_categories = HashSet::new();
    let mut owners: HashMap<&str, Category> = HashMap::new();

    for section in sections {
        if !seen_categories.insert(section.category) {
            return Err(CatalogError::DuplicateCategory(section.category.to_string()));
        }
        for app in &section.apps {
            if let Some(first) = owners.insert(app.id.as_str(), section.category) {
                return Err(CatalogError::DuplicateAppId {
                    id: app.id.clone(),
                    first: first.to_string(),
                    second: section.category.to_string(),
                });
            }
            if !app.has_install_path() {
                tracing::warn!(app = %app.id, "app offers no winget, choco or direct url");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::fixtures::{app, section};
    use super::*;

    #[test]
    fn rejects_duplicate_ids_across_categories() {
        let err = Catalog::new(vec![
            section(Category::Browsers, vec![app("firefox", "Firefox")]),
            section(Category::Media, vec![app("firefox", "Firefox again")]),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateAppId { ref id, .. } if id == "firefox"));
    }

    #[test]
    fn rejects_repeated_category() {
        let err = Catalog::new(vec![
            section(Category::Media, vec![app("vlc", "VLC")]),
            section(Category::Media, vec![app("mpv", "mpv")]),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateCategory(_)));
    }

    #[test]
    fn resolve_keeps_catalog_order() {
        let catalog = Catalog::new(vec![
            section(Category::Browsers, vec![app("chrome", "Chrome"), app("firefox", "Firefox")]),
            section(Category::Media, vec![app("vlc", "VLC")]),
        ])
        .unwrap();

        let apps = catalog.resolve(&["vlc", "firefox", "chrome"]).unwrap();
        let ids: Vec<_> = apps.iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, ["chrome", "firefox", "vlc"]);
    }

    #[test]
    fn resolve_reports_unknown_id() {
        let catalog =
            Catalog::new(vec![section(Category::Media, vec![app("vlc", "VLC")])]).unwrap();

        let err = catalog.resolve(&["vlc", "winamp"]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownApp(ref id) if id == "winamp"));
    }

    #[test]
    fn resolve_reports_the_first_unknown_id_given() {
        let catalog =
            Catalog::new(vec![section(Category::Media, vec![app("vlc", "VLC")])]).unwrap();

        for _ in 0..16 {
            let err = catalog.resolve(&["zune", "vlc", "winamp", "itunes"]).unwrap_err();
            assert!(matches!(err, CatalogError::UnknownApp(ref id) if id == "zune"));
        }
    }

    #[test]
    fn blank_install_fields_deserialize_as_absent() {
        let catalog = Catalog::from_json(
            r#"{
                "categories": [
                    {
                        "category": "media",
                        "title": "Media",
                        "description": "Players",
                        "icon": "🎵",
                        "apps": [
                            {
                                "id": "vlc",
                                "name": "VLC",
                                "winget": "",
                                "choco": "videolan",
                                "directUrl": ""
                            },
                            {
                                "id": "empty",
                                "name": "Nothing to install",
                                "winget": "",
                                "choco": null
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let vlc = catalog.find("vlc").unwrap();
        assert_eq!(vlc.winget, None);
        assert_eq!(vlc.direct_url, None);
        assert_eq!(vlc.install_badges(), ["choco"]);
        assert!(vlc.has_install_path());
        assert!(!catalog.find("empty").unwrap().has_install_path());
    }

    #[test]
    fn parses_camel_case_json() {
        let catalog = Catalog::from_json(
            r#"{
                "categories": [
                    {
                        "category": "videoEditing",
                        "title": "Video Editing",
                        "description": "Cut and render",
                        "icon": "🎬",
                        "apps": [
                            {
                                "id": "shotcut",
                                "name": "Shotcut",
                                "icon": "🎞",
                                "winget": "Meltytech.Shotcut",
                                "choco": null,
                                "directUrl": "https://example.com/shotcut.exe",
                                "silentArgs": "/S"
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let shotcut = catalog.find("shotcut").unwrap();
        assert_eq!(shotcut.winget.as_deref(), Some("Meltytech.Shotcut"));
        assert_eq!(shotcut.choco, None);
        assert_eq!(shotcut.silent_args, "/S");
        assert_eq!(shotcut.install_badges(), ["winget", "direct"]);
        assert_eq!(catalog.category_of("shotcut"), Some(Category::VideoEditing));
        assert_eq!(catalog.section(Category::VideoEditing).unwrap().info.title, "Video Editing");
    }
}
