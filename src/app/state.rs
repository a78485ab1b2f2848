use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::catalog::{AppRecord, Catalog, Category};
use crate::script::InstallMethod;
use crate::selection::{matches_query, Selection};

pub const TABS: [&str; 3] = ["All", "Selected", "Categories"];

const LOG_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    All,
    Selected,
    Categories,
}

impl Tab {
    pub fn index(&self) -> usize {
        match self {
            Tab::All => 0,
            Tab::Selected => 1,
            Tab::Categories => 2,
        }
    }

    fn from_index(index: usize) -> Self {
        match index % TABS.len() {
            0 => Tab::All,
            1 => Tab::Selected,
            _ => Tab::Categories,
        }
    }
}

#[derive(Clone)]
pub struct LogEntry {
    pub message: String,
    pub level: LogLevel,
    pub created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
}

pub struct App {
    pub catalog: Catalog,
    pub tab: Tab,
    pub categories: Vec<Category>,
    pub selected_category: usize,
    /// Ids of the visible apps, in catalog order.
    pub visible_ids: Vec<String>,
    pub list_state: ListState,
    pub selection: Selection,
    pub search_mode: bool,
    pub search_input: String,
    pub method: InstallMethod,
    pub output: PathBuf,
    pub status: String,
    pub logs: Vec<LogEntry>,
}

impl App {
    pub fn new(catalog: Catalog, method: InstallMethod, output: PathBuf) -> Self {
        let categories = catalog.categories();

        let mut app = Self {
            catalog,
            tab: Tab::All,
            categories,
            selected_category: 0,
            visible_ids: Vec::new(),
            list_state: ListState::default(),
            selection: Selection::new(),
            search_mode: false,
            search_input: String::new(),
            method,
            output,
            status: "Ready. Space select, A all, C clear, M method, G generate, / search."
                .to_string(),
            logs: Vec::new(),
        };
        app.refresh_filter();
        app
    }

    pub fn log(&mut self, message: String, level: LogLevel) {
        self.prune_logs();
        self.logs.push(LogEntry {
            message,
            level,
            created_at: Instant::now(),
        });
        if self.logs.len() > 3 {
            self.logs.remove(0);
        }
    }

    pub fn prune_logs(&mut self) {
        let now = Instant::now();
        self.logs.retain(|l| now.duration_since(l.created_at) < LOG_TTL);
    }

    pub fn refresh_filter(&mut self) {
        self.visible_ids = self
            .catalog
            .sections()
            .iter()
            .filter(|section| self.matches_tab(section.category))
            .flat_map(|section| section.apps.iter())
            .filter(|app| self.tab != Tab::Selected || self.selection.contains(&app.id))
            .filter(|app| matches_query(app, &self.search_input))
            .map(|app| app.id.clone())
            .collect();

        let new_idx = match self.list_state.selected() {
            Some(idx) if idx < self.visible_ids.len() => Some(idx),
            _ if self.visible_ids.is_empty() => None,
            _ => Some(0),
        };
        self.list_state.select(new_idx);
    }

    fn matches_tab(&self, category: Category) -> bool {
        match self.tab {
            Tab::All | Tab::Selected => true,
            Tab::Categories => self
                .categories
                .get(self.selected_category)
                .map(|selected| *selected == category)
                .unwrap_or(true),
        }
    }

    pub fn visible_apps(&self) -> impl Iterator<Item = &AppRecord> {
        self.visible_ids.iter().filter_map(|id| self.catalog.find(id))
    }

    pub fn current_app(&self) -> Option<&AppRecord> {
        let idx = self.list_state.selected()?;
        let id = self.visible_ids.get(idx)?;
        self.catalog.find(id)
    }

    pub fn current_category(&self) -> Option<Category> {
        self.categories.get(self.selected_category).copied()
    }

    pub fn move_down(&mut self) {
        if self.visible_ids.is_empty() {
            self.list_state.select(None);
            return;
        }

        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.visible_ids.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn move_up(&mut self) {
        if self.visible_ids.is_empty() {
            self.list_state.select(None);
            return;
        }

        let prev = match self.list_state.selected() {
            Some(0) | None => self.visible_ids.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.list_state.select(Some(prev));
    }

    pub fn toggle_selected_current(&mut self) {
        let Some((id, name)) = self
            .current_app()
            .map(|app| (app.id.clone(), app.name.clone()))
        else {
            return;
        };

        if self.selection.toggle(&id) {
            self.set_status(format!("Selected {name}."));
        } else {
            self.set_status(format!("Deselected {name}."));
        }
        if self.tab == Tab::Selected {
            self.refresh_filter();
        }
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.catalog);
        self.set_status(format!("Selected all {} apps.", self.selection.len()));
        self.refresh_filter();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.set_status("Selection cleared.");
        self.refresh_filter();
    }

    pub fn cycle_method(&mut self) {
        self.method = self.method.next();
        self.log(
            format!("Install method: {}", self.method.label()),
            LogLevel::Info,
        );
    }

    pub fn cycle_tab_right(&mut self) {
        self.tab = Tab::from_index(self.tab.index() + 1);
        self.refresh_filter();
    }

    pub fn cycle_tab_left(&mut self) {
        self.tab = Tab::from_index(self.tab.index() + TABS.len() - 1);
        self.refresh_filter();
    }

    pub fn category_right(&mut self) {
        if self.tab != Tab::Categories || self.categories.is_empty() {
            return;
        }
        self.selected_category = (self.selected_category + 1) % self.categories.len();
        self.refresh_filter();
    }

    pub fn category_left(&mut self) {
        if self.tab != Tab::Categories || self.categories.is_empty() {
            return;
        }
        self.selected_category = if self.selected_category == 0 {
            self.categories.len() - 1
        } else {
            self.selected_category - 1
        };
        self.refresh_filter();
    }

    pub fn set_status<S: Into<String>>(&mut self, message: S) {
        self.status = message.into();
    }
}
