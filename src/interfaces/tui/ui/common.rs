use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Draw title bar with version and the API endpoint
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled("Shortdash", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.client.base_url().to_string(),
            Style::default().fg(Color::Blue),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Links: {} ", app.links.total_items()),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let loading = match app.current_screen {
        CurrentScreen::Links => app.links.loading,
        CurrentScreen::Stats => app
            .stats
            .as_ref()
            .map(|s| s.table_loading || s.chart_loading)
            .unwrap_or(false),
        CurrentScreen::Create => app.create.submitting,
        _ => false,
    };

    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else if loading {
        (
            "Loading…".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Links if app.filter_editing => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Apply", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Links => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Enter", "Stats", Color::Cyan),
            ("c", "Create", Color::Green),
            ("n/p", "Page", Color::Cyan),
            ("f", "Dates", Color::Yellow),
            ("d", "Domain", Color::Yellow),
            ("z", "Page Size", Color::Yellow),
            ("x", "Reset", Color::Magenta),
            ("y", "Copy", Color::Cyan),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Stats if app.custom_editing => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Apply", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Stats => vec![
            ("t/w/m/a", "Period", Color::Yellow),
            ("u", "Custom", Color::Yellow),
            ("n/p", "Page", Color::Cyan),
            ("r", "Refresh", Color::Green),
            ("y", "Copy", Color::Cyan),
            ("Esc", "Back", Color::Red),
        ],
        CurrentScreen::Create => vec![
            ("Tab", "Next Field", Color::Cyan),
            ("Ctrl+n", "Add Row", Color::Green),
            ("Ctrl+d", "Remove Row", Color::Red),
            ("Ctrl+l", "Domain", Color::Yellow),
            ("Enter", "Submit", Color::Green),
            ("Esc", "Back", Color::Red),
        ],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
