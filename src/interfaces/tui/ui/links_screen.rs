use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::interfaces::tui::app::{App, FilterField};
use crate::interfaces::tui::ui::widgets::InputField;
use crate::utils::{format_relative, truncate_url};

const URL_TRUNCATE_LENGTH: usize = 50;

pub fn draw_links_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let area = if app.filter_editing {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);
        draw_filter_bar(frame, app, chunks[0]);
        chunks[1]
    } else {
        area
    };

    if app.links.rows.is_empty() {
        draw_empty_state(frame, app, area);
        return;
    }

    let header = Row::new(vec![
        header_cell("Code"),
        header_cell("Domain"),
        header_cell("URL"),
        header_cell("Clicks"),
        header_cell("Created"),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .links
        .rows
        .iter()
        .map(|link| {
            Row::new(vec![
                Span::styled(
                    link.code.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(link.domain.clone(), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    truncate_url(&link.long_url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(
                    link.total_clicks.to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format_relative(&link.created_at),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(15),
            Constraint::Length(18),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(table_title(app))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    let mut state = TableState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}

fn header_cell(name: &str) -> Span<'static> {
    Span::styled(
        name.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn table_title(app: &App) -> String {
    let mut parts = vec![format!("Short Links ({})", app.links.total_items())];

    let total_pages = app.links.total_pages();
    if total_pages > 1 {
        parts.push(format!("Page {}/{}", app.links.page, total_pages));
    }
    if let Some(domain) = &app.links.domain {
        parts.push(format!("Domain: {}", domain));
    }
    if app.links.from.is_some() || app.links.to.is_some() {
        parts.push("Date filter active".to_string());
    }
    if let Some(error) = &app.links.error {
        parts.push(format!("⚠ {}", error));
    }

    parts.join(" | ")
}

fn draw_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    InputField::new("From", &app.filter_from_input)
        .active(app.filter_field == FilterField::From)
        .placeholder("YYYY-MM-DD")
        .render(frame, chunks[0]);
    InputField::new("To", &app.filter_to_input)
        .active(app.filter_field == FilterField::To)
        .placeholder("YYYY-MM-DD")
        .render(frame, chunks[1]);
}

fn draw_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let message = if let Some(error) = &app.links.error {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "[r]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
            ]),
        ]
    } else if app.links.loading {
        vec![Line::from(""), Line::from("Loading…")]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "No links found",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "[c]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " to create your first link",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ]
    };

    let empty = Paragraph::new(message)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(table_title(app))
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(empty, area);
}
