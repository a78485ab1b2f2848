use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::App;
use crate::ui::theme::*;

fn field<'a>(label: &'a str, value: Option<&str>, color: Color) -> Line<'a> {
    let (text, color) = match value {
        Some(value) if !value.trim().is_empty() => (value.to_string(), color),
        _ => ("N/A".to_string(), C_MUTED),
    };
    Line::from(vec![
        Span::styled(label, Style::default().fg(C_MUTED)),
        Span::styled(text, Style::default().fg(color)),
    ])
}

pub fn render_detail_panel(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let details_block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(C_PANEL))
        .style(Style::default().bg(C_BG));
    let details_inner = details_block.inner(area);
    frame.render_widget(details_block, area);

    let details_lines = if let Some(record) = app.current_app() {
        let selected = app.selection.contains(&record.id);
        let category = app.catalog.category_of(&record.id).and_then(|category| {
            app.catalog
                .section(category)
                .map(|section| section.info.title.clone())
        });

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Name: ", Style::default().fg(C_MUTED)),
                Span::styled(
                    record.name.clone(),
                    Style::default().fg(C_TEXT).add_modifier(Modifier::BOLD),
                ),
            ]),
            field("ID: ", Some(record.id.as_str()), C_TEXT),
            field("Category: ", category.as_deref(), C_TEXT),
            Line::from(vec![
                Span::styled("Selected: ", Style::default().fg(C_MUTED)),
                Span::styled(
                    if selected { "yes" } else { "no" },
                    Style::default().fg(if selected { C_SUCCESS } else { C_WARNING }),
                ),
            ]),
            Line::from(""),
            field("Winget: ", record.winget_package(), C_SUCCESS),
            field("Chocolatey: ", record.choco_package(), C_PRIMARY),
            field("Direct: ", record.download_url(), C_ACCENT),
            field("Silent args: ", Some(record.silent_args.as_str()), C_TEXT),
        ];
        if let Some(note) = &record.note {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                note.clone(),
                Style::default().fg(C_MUTED).add_modifier(Modifier::ITALIC),
            )));
        }
        lines
    } else {
        vec![Line::from(Span::styled(
            "No apps match the current tab/filter/search.",
            Style::default().fg(C_MUTED),
        ))]
    };

    let details_widget = Paragraph::new(details_lines).wrap(Wrap { trim: true });
    frame.render_widget(details_widget, details_inner);

    let output_line = Line::from(vec![
        Span::styled("Output: ", Style::default().fg(C_MUTED)),
        Span::styled(
            app.output.display().to_string(),
            Style::default().fg(C_TEXT).add_modifier(Modifier::ITALIC),
        ),
    ]);
    let output_widget = Paragraph::new(output_line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(C_PANEL)),
    );
    let output_area = Rect::new(
        details_inner.x,
        details_inner.y + details_inner.height.saturating_sub(2),
        details_inner.width,
        details_inner.height.min(2),
    );
    frame.render_widget(output_widget, output_area);
}
