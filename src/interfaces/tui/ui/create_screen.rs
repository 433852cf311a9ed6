use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::ui::widgets::InputField;
use crate::utils::truncate_url;
use crate::views::{CreateView, EntryField};

/// Vertical space of one form row (bordered input boxes)
const ROW_HEIGHT: u16 = 3;

pub fn draw_create_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_form(frame, &app.create, columns[0]);
    draw_side_panel(frame, &app.create, columns[1]);
}

fn draw_form(frame: &mut Frame, create: &CreateView, area: Rect) {
    let title = format!(
        "New links ({} row{})",
        create.entries.len(),
        if create.entries.len() == 1 { "" } else { "s" }
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Window the rows around the cursor so long forms stay usable
    let error_height = if create.error.is_some() { 1 } else { 0 };
    let visible_rows = ((inner.height.saturating_sub(error_height)) / ROW_HEIGHT).max(1) as usize;
    let first = create
        .cursor
        .saturating_sub(visible_rows.saturating_sub(1))
        .min(create.entries.len().saturating_sub(visible_rows.min(create.entries.len())));

    let mut y = inner.y;
    for (index, entry) in create.entries.iter().enumerate().skip(first).take(visible_rows) {
        let row_area = Rect::new(inner.x, y, inner.width, ROW_HEIGHT);
        y += ROW_HEIGHT;

        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(row_area);

        let focused = index == create.cursor;
        let default_domain = create.default_domain().unwrap_or("server default");

        InputField::new(&format!("URL #{}", index + 1), &entry.url)
            .active(focused && create.field == EntryField::Url)
            .required()
            .placeholder("https://example.com/very/long/url")
            .render(frame, fields[0]);
        InputField::new("Domain", &entry.domain)
            .active(focused && create.field == EntryField::Domain)
            .placeholder(default_domain)
            .render(frame, fields[1]);
        InputField::new("Code", &entry.custom_code)
            .active(focused && create.field == EntryField::CustomCode)
            .placeholder("optional")
            .render(frame, fields[2]);
    }

    if let Some(error) = &create.error
        && inner.height > 0
    {
        let line = Paragraph::new(error.clone()).style(Style::default().fg(Color::Red));
        let error_area = Rect::new(
            inner.x,
            inner.y + inner.height.saturating_sub(1),
            inner.width,
            1,
        );
        frame.render_widget(line, error_area);
    }
}

/// Results of the last submission, or the recent-links panel
fn draw_side_panel(frame: &mut Frame, create: &CreateView, area: Rect) {
    match &create.results {
        Some(results) => draw_results(frame, create, area, results),
        None => draw_recent(frame, create, area),
    }
}

fn draw_results(
    frame: &mut Frame,
    create: &CreateView,
    area: Rect,
    results: &crate::client::ShortenResponse,
) {
    let mut lines = Vec::new();
    for item in &results.items {
        match (&item.short_url, &item.error) {
            (Some(short_url), _) => {
                lines.push(Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(Color::Green).bold()),
                    Span::styled(short_url.clone(), Style::default().fg(Color::Cyan).bold()),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", truncate_url(&item.long_url, 40)),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            (None, Some(error)) => {
                lines.push(Line::from(vec![
                    Span::styled("✗ ", Style::default().fg(Color::Red).bold()),
                    Span::styled(
                        truncate_url(&item.long_url, 40),
                        Style::default().fg(Color::Blue),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", error.message),
                    Style::default().fg(Color::Red),
                )));
            }
            (None, None) => {
                lines.push(Line::from(Span::styled(
                    format!("? {}", truncate_url(&item.long_url, 40)),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
    }

    let title = format!(
        "Created {} of {}",
        results.summary.successful, results.summary.total
    );
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(panel, area);
}

fn draw_recent(frame: &mut Frame, create: &CreateView, area: Rect) {
    let lines: Vec<Line> = if let Some(error) = &create.recent_error {
        vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))]
    } else if create.recent.is_empty() {
        vec![Line::from(Span::styled(
            "No links yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        create
            .recent
            .iter()
            .map(|link| {
                Line::from(vec![
                    Span::styled(
                        link.code.clone(),
                        Style::default().fg(Color::Cyan).bold(),
                    ),
                    Span::styled(" → ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        truncate_url(&link.long_url, 32),
                        Style::default().fg(Color::Blue),
                    ),
                ])
            })
            .collect()
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Recent links")
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(panel, area);
}
