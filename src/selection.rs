use crate::catalog::{AppRecord, Catalog, Section};

/// Ids the user has picked, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn select_all(&mut self, catalog: &Catalog) {
        self.ids = catalog.apps().map(|app| app.id.clone()).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

pub fn matches_query(app: &AppRecord, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    app.name.to_lowercase().contains(&query.to_lowercase())
}

/// Sections narrowed to apps matching `query`; sections left with no apps are dropped.
pub fn filter_sections(catalog: &Catalog, query: &str) -> Vec<Section> {
    catalog
        .sections()
        .iter()
        .filter_map(|section| {
            let apps: Vec<AppRecord> = section
                .apps
                .iter()
                .filter(|app| matches_query(app, query))
                .cloned()
                .collect();
            if apps.is_empty() {
                None
            } else {
                Some(Section {
                    apps,
                    ..section.clone()
                })
            }
        })
        .collect()
}
