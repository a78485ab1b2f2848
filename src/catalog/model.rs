use std::fmt;

use serde::{Deserialize, Deserializer};

/// One installable application. Immutable once loaded; `id` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub winget: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub choco: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub direct_url: Option<String>,
    #[serde(default)]
    pub silent_args: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl AppRecord {
    pub fn winget_package(&self) -> Option<&str> {
        present(&self.winget)
    }

    pub fn choco_package(&self) -> Option<&str> {
        present(&self.choco)
    }

    pub fn download_url(&self) -> Option<&str> {
        present(&self.direct_url)
    }

    pub fn has_install_path(&self) -> bool {
        !self.install_badges().is_empty()
    }

    /// Short labels for the install paths this record offers, in fallback order.
    pub fn install_badges(&self) -> Vec<&'static str> {
        [
            ("winget", self.winget_package()),
            ("choco", self.choco_package()),
            ("direct", self.download_url()),
        ]
        .into_iter()
        .filter_map(|(badge, value)| value.map(|_| badge))
        .collect()
    }
}

/// An empty string counts as no value at all.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.is_empty()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Browsers,
    Messaging,
    Media,
    VideoEditing,
    Runtime,
    Development,
    Ides,
    Databases,
    Compression,
    Security,
    Documents,
    Imaging,
    Utilities,
    Terminals,
    Gaming,
    CloudStorage,
    Virtualization,
    Backup,
}

impl Category {
    pub fn key(&self) -> &'static str {
        match self {
            Category::Browsers => "browsers",
            Category::Messaging => "messaging",
            Category::Media => "media",
            Category::VideoEditing => "videoEditing",
            Category::Runtime => "runtime",
            Category::Development => "development",
            Category::Ides => "ides",
            Category::Databases => "databases",
            Category::Compression => "compression",
            Category::Security => "security",
            Category::Documents => "documents",
            Category::Imaging => "imaging",
            Category::Utilities => "utilities",
            Category::Terminals => "terminals",
            Category::Gaming => "gaming",
            Category::CloudStorage => "cloudStorage",
            Category::Virtualization => "virtualization",
            Category::Backup => "backup",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryInfo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// A category with its display metadata and the apps listed under it, in authoring order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub category: Category,
    #[serde(flatten)]
    pub info: CategoryInfo,
    #[serde(default)]
    pub apps: Vec<AppRecord>,
}
