use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph, Row, Table},
};

use crate::interfaces::tui::app::{App, FilterField};
use crate::interfaces::tui::ui::widgets::InputField;
use crate::stats::DateBucket;
use crate::utils::{format_datetime, truncate_url};
use crate::views::StatsView;

pub fn draw_stats_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(stats) = &app.stats else {
        return;
    };

    let area = if app.custom_editing {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);
        draw_custom_period_bar(frame, app, chunks[0]);
        chunks[1]
    } else {
        area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Metadata
            Constraint::Min(8),    // Chart
            Constraint::Min(8),    // Clicks table
        ])
        .split(area);

    draw_metadata(frame, stats, chunks[0]);
    draw_chart(frame, stats, chunks[1]);
    draw_clicks_table(frame, stats, chunks[2]);
}

fn draw_metadata(frame: &mut Frame, stats: &StatsView, area: Rect) {
    let lines = match &stats.meta {
        Some(meta) => vec![
            Line::from(vec![
                Span::styled("Short URL:  ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    meta.short_url(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Long URL:   ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    truncate_url(&meta.long_url, 80),
                    Style::default().fg(Color::Blue),
                ),
            ]),
            Line::from(vec![
                Span::styled("Clicks:     ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    meta.total_clicks.to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Created:    ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format_datetime(&meta.created_at),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
        ],
        None if stats.table_loading => vec![Line::from("Loading…")],
        None => vec![Line::from(Span::styled(
            "No metadata",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!("Link {} | {}", stats.code, stats.period.label()))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(panel, area);
}

fn draw_chart(frame: &mut Frame, stats: &StatsView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Clicks per day")
        .title_style(Style::default().fg(Color::Cyan));

    // A failed chart fetch only darkens this panel; the table stays live
    if let Some(error) = &stats.chart_error {
        let message = Paragraph::new(error.clone())
            .style(Style::default().fg(Color::Red))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    let buckets = &stats.chart;
    if buckets.is_empty() || buckets.iter().all(|b| b.clicks == 0) {
        let text = if stats.chart_loading {
            "Loading…"
        } else {
            "No clicks to chart in this range"
        };
        let message = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    let points: Vec<(f64, f64)> = buckets
        .iter()
        .enumerate()
        .map(|(i, b)| (i as f64, b.clicks as f64))
        .collect();
    let max_y = buckets.iter().map(|b| b.clicks).max().unwrap_or(1).max(1) as f64;
    let max_x = (buckets.len() - 1).max(1) as f64;

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_x])
                .labels(x_labels(buckets))
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, max_y])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", max_y as u64)),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

fn x_labels(buckets: &[DateBucket]) -> Vec<Span<'static>> {
    let fmt = |b: &DateBucket| b.date.format("%b %e").to_string();
    let mut labels = vec![Span::raw(fmt(&buckets[0]))];
    if buckets.len() > 2 {
        labels.push(Span::raw(fmt(&buckets[buckets.len() / 2])));
    }
    if buckets.len() > 1 {
        labels.push(Span::raw(fmt(&buckets[buckets.len() - 1])));
    }
    labels
}

fn draw_clicks_table(frame: &mut Frame, stats: &StatsView, area: Rect) {
    let title = {
        let mut parts = vec!["Clicks".to_string()];
        if let Some(p) = stats.pagination {
            parts.push(format!(
                "{} of {} | Page {}/{}",
                stats.clicks.len(),
                p.total_items,
                p.page,
                p.total_pages.max(1)
            ));
        }
        parts.join(" | ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(Color::Cyan));

    if let Some(error) = &stats.table_error {
        let message = Paragraph::new(error.clone())
            .style(Style::default().fg(Color::Red))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    if stats.clicks.is_empty() {
        let text = if stats.table_loading {
            "Loading…"
        } else {
            "No clicks in the selected period"
        };
        let message = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    let header = Row::new(vec![
        Span::styled("Time", Style::default().fg(Color::Yellow).bold()),
        Span::styled("IP", Style::default().fg(Color::Yellow).bold()),
        Span::styled("Referer", Style::default().fg(Color::Yellow).bold()),
        Span::styled("User Agent", Style::default().fg(Color::Yellow).bold()),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = stats
        .clicks
        .iter()
        .map(|click| {
            Row::new(vec![
                Span::styled(
                    format_datetime(&click.clicked_at),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    click.ip.clone().unwrap_or_else(|| "—".to_string()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    truncate_url(click.referer.as_deref().unwrap_or("—"), 30),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(
                    truncate_url(click.user_agent.as_deref().unwrap_or("—"), 40),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(28),
            Constraint::Length(16),
            Constraint::Length(32),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);

    frame.render_widget(table, area);
}

fn draw_custom_period_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    InputField::new("From", &app.custom_from_input)
        .active(app.custom_field == FilterField::From)
        .placeholder("YYYY-MM-DD")
        .render(frame, chunks[0]);
    InputField::new("To", &app.custom_to_input)
        .active(app.custom_field == FilterField::To)
        .placeholder("YYYY-MM-DD")
        .render(frame, chunks[1]);
}
