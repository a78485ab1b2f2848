use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::{App, LogLevel};
use crate::ui::theme::*;

fn key_hint<'a>(label: &'a str, key: &'a str, color: Color) -> [Span<'a>; 2] {
    [
        Span::styled(label, Style::default().fg(C_MUTED)),
        Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ]
}

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    app.prune_logs();

    let selected_total = app.selection.len();
    let visible_total = app.visible_ids.len();
    let generate_color = if selected_total == 0 { C_MUTED } else { C_SUCCESS };

    let mut first_line: Vec<Span> = Vec::new();
    for hint in [
        key_hint("Move ", "↑/↓ j/k", C_TEXT),
        key_hint("  Tabs ", "Tab/Shift+Tab", C_TEXT),
        key_hint("  Category ", "←/→", C_TEXT),
        key_hint("  Search ", "/", C_PRIMARY),
        key_hint("  Select ", "Space", C_TEXT),
        key_hint("  All ", "A", C_TEXT),
        key_hint("  Clear ", "C", C_TEXT),
        key_hint("  Quit ", "Q", C_TEXT),
    ] {
        first_line.extend(hint);
    }

    let mut second_line: Vec<Span> = Vec::new();
    second_line.extend(key_hint("Actions ", "M Method", C_PRIMARY));
    second_line.extend(key_hint("  ", "G Generate Installer", generate_color));
    second_line.push(Span::styled("   |   ", Style::default().fg(C_PANEL)));
    second_line.push(Span::styled(
        format!(
            "visible:{} selected:{} method:{}",
            visible_total,
            selected_total,
            app.method.as_str()
        ),
        Style::default().fg(C_MUTED),
    ));
    second_line.push(Span::styled("  ", Style::default()));
    second_line.push(Span::styled(app.status.clone(), Style::default().fg(C_TEXT)));

    for l in &app.logs {
        let color = match l.level {
            LogLevel::Success => C_SUCCESS,
            LogLevel::Error => C_WARNING,
            LogLevel::Info => C_PRIMARY,
        };
        second_line.push(Span::styled("  ", Style::default()));
        second_line.push(Span::styled(l.message.clone(), Style::default().fg(color)));
    }

    let footer_lines = vec![Line::from(first_line), Line::from(second_line)];
    let footer = Paragraph::new(footer_lines).block(
        Block::default()
            .title(" Command Bar ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(C_PANEL)),
    );
    frame.render_widget(footer, area);
}
