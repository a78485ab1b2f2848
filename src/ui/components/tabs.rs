use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

use crate::app::state::{App, TABS};
use crate::ui::theme::*;

pub fn render_main_tabs(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let tab_titles = TABS
        .iter()
        .map(|title| Line::from(*title))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(tab_titles)
        .select(app.tab.index())
        .block(
            Block::default()
                .title(" WinHub · Ultimate App Installer ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(C_PANEL)),
        )
        .style(Style::default().fg(C_MUTED))
        .highlight_style(
            Style::default()
                .fg(C_PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" | ");
    frame.render_widget(tabs, area);
}

pub fn render_category_tabs(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let category_titles = app
        .categories
        .iter()
        .map(|category| {
            let title = app
                .catalog
                .section(*category)
                .map(|section| format!("{} {}", section.info.icon, section.info.title))
                .unwrap_or_else(|| category.to_string());
            Line::from(title)
        })
        .collect::<Vec<_>>();
    let cat_tabs = Tabs::new(category_titles)
        .select(app.selected_category)
        .block(
            Block::default()
                .title(" Category Filter ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(C_PANEL)),
        )
        .style(Style::default().fg(C_MUTED))
        .highlight_style(Style::default().fg(C_SUCCESS).add_modifier(Modifier::BOLD))
        .divider(" | ");
    frame.render_widget(cat_tabs, area);
}
