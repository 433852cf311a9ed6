use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let sections: &[(&str, &[(&str, &str)])] = &[
        (
            "Links",
            &[
                ("Up/Down, j/k", "Move selection"),
                ("Enter, s", "Open statistics for the selected link"),
                ("c", "Open the batch creation form"),
                ("n/p, Right/Left", "Next / previous page"),
                ("f", "Edit the date filter (Tab to switch, Enter to apply)"),
                ("d", "Cycle the domain filter"),
                ("z", "Cycle the page size (10/25/50)"),
                ("x", "Reset all filters"),
                ("r", "Reload the table"),
                ("y", "Copy the selected short URL"),
            ],
        ),
        (
            "Statistics",
            &[
                ("t/w/m/a", "Quick period: today / week / month / all"),
                ("u", "Custom period (at least one bound required)"),
                ("n/p", "Click-table page (the chart is not refetched)"),
                ("r", "Reload table and chart"),
                ("Esc, b", "Back to the links table"),
            ],
        ),
        (
            "Create",
            &[
                ("Tab", "Next field (wraps to the next row)"),
                ("Ctrl+n / Ctrl+d", "Add / remove a row"),
                ("Ctrl+l", "Cycle the row's domain"),
                ("Enter", "Submit the batch"),
            ],
        ),
    ];

    let mut lines = vec![Line::from("")];
    for (title, entries) in sections {
        lines.push(Line::from(Span::styled(
            format!(" {}", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (keys, description) in *entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   {:<18}", keys),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Help")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(help, area);
}
