use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::{App, Tab};
use crate::ui::components::{
    app_list::render_app_list,
    detail_panel::render_detail_panel,
    footer::render_footer,
    tabs::{render_category_tabs, render_main_tabs},
};
use crate::ui::theme::*;

pub fn ui(frame: &mut Frame<'_>, app: &mut App) {
    frame.render_widget(
        Block::default().style(Style::default().bg(C_BG)),
        frame.area(),
    );

    let show_categories = app.tab == Tab::Categories;
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if show_categories { 3 } else { 0 }),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(frame.area());

    render_main_tabs(frame, vertical[0], app);

    if show_categories {
        render_category_tabs(frame, vertical[1], app);
    }

    let search_title = if app.search_mode {
        " Search mode (/): typing... Enter apply, Esc close "
    } else {
        " Search (/ to start, Esc clear) "
    };

    let search_text = if app.search_input.is_empty() {
        "Search for any application...".to_string()
    } else {
        app.search_input.clone()
    };
    let search = Paragraph::new(search_text)
        .block(
            Block::default()
                .title(search_title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if app.search_mode {
                    C_PRIMARY
                } else {
                    C_PANEL
                })),
        )
        .style(if app.search_mode {
            Style::default().fg(C_TEXT)
        } else {
            Style::default().fg(C_MUTED)
        });

    frame.render_widget(search, vertical[2]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(vertical[3]);

    render_app_list(frame, body[0], app);
    render_detail_panel(frame, body[1], app);

    render_footer(frame, vertical[4], app);

    if app.search_mode {
        let cursor_x = vertical[2].x + 1 + app.search_input.chars().count() as u16;
        let cursor_y = vertical[2].y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
