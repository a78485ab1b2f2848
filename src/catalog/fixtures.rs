use super::{AppRecord, Catalog, Category, CategoryInfo, Section};

pub fn app(id: &str, name: &str) -> AppRecord {
    AppRecord {
        id: id.to_string(),
        name: name.to_string(),
        icon: String::new(),
        winget: None,
        choco: None,
        direct_url: None,
        silent_args: String::new(),
        note: None,
    }
}

pub fn section(category: Category, apps: Vec<AppRecord>) -> Section {
    Section {
        category,
        info: CategoryInfo {
            title: category.to_string(),
            description: String::new(),
            icon: String::new(),
        },
        apps,
    }
}

/// Small two-category catalog: browsers (chrome, firefox) and media (vlc, mpv).
pub fn sample_catalog() -> Catalog {
    let mut chrome = app("chrome", "Google Chrome");
    chrome.winget = Some("Google.Chrome".to_string());
    chrome.choco = Some("googlechrome".to_string());
    chrome.direct_url = Some("https://dl.google.com/chrome/install/googlechromestandaloneenterprise64.msi".to_string());
    chrome.silent_args = "/qn /norestart".to_string();

    let mut firefox = app("firefox", "Mozilla Firefox");
    firefox.winget = Some("Mozilla.Firefox".to_string());
    firefox.choco = Some("firefox".to_string());

    let mut vlc = app("vlc", "VLC");
    vlc.winget = Some("VideoLAN.VLC".to_string());

    let mut mpv = app("mpv", "mpv");
    mpv.direct_url = Some("https://example.com/mpv-setup.exe".to_string());
    mpv.silent_args = "/S".to_string();

    Catalog::new(vec![
        section(Category::Browsers, vec![chrome, firefox]),
        section(Category::Media, vec![vlc, mpv]),
    ])
    .expect("sample catalog is valid")
}
