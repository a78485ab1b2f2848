use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::App;
use crate::ui::layout::centered_rect;
use crate::ui::theme::*;
use crate::utils::truncate_with_ellipsis;

pub fn render_app_list(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let catalog_block = Block::default()
        .title(" Catalog ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(C_PANEL))
        .style(Style::default().bg(C_BG));
    let catalog_inner = catalog_block.inner(area);
    frame.render_widget(catalog_block, area);

    if app.visible_ids.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No apps found",
                Style::default().fg(C_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try a different search term",
                Style::default().fg(C_MUTED),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, centered_rect(80, 30, catalog_inner));
        return;
    }

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(catalog_inner);

    let header_line =
        Paragraph::new("Sel  Name                     Category        Install paths")
            .style(Style::default().fg(C_MUTED).add_modifier(Modifier::BOLD));
    frame.render_widget(header_line, left_chunks[0]);

    let items: Vec<ListItem> = app
        .visible_apps()
        .map(|record| {
            let selected = app.selection.contains(&record.id);
            let checkbox = if selected { "[x]" } else { "[ ]" };
            let category = app
                .catalog
                .category_of(&record.id)
                .map(|category| category.to_string())
                .unwrap_or_default();
            let display_name = truncate_with_ellipsis(&record.name, 24);
            let display_category = truncate_with_ellipsis(&category, 14);
            let badges = record.install_badges();

            let mut spans = vec![
                Span::styled(format!("{:<4}", checkbox), Style::default().fg(C_PRIMARY)),
                Span::styled(format!("{:<25}", display_name), Style::default().fg(C_TEXT)),
                Span::styled(
                    format!("{:<16}", display_category),
                    Style::default().fg(C_MUTED),
                ),
            ];
            if badges.is_empty() {
                spans.push(Span::styled("none", Style::default().fg(C_WARNING)));
            }
            for badge in badges {
                let color = match badge {
                    "winget" => C_SUCCESS,
                    "choco" => C_PRIMARY,
                    _ => C_ACCENT,
                };
                spans.push(Span::styled(format!("{badge} "), Style::default().fg(color)));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let app_list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(32, 57, 84))
                .fg(C_TEXT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ")
        .repeat_highlight_symbol(true);

    frame.render_stateful_widget(app_list, left_chunks[1], &mut app.list_state);
}
