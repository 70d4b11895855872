use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, Focus};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version and backend
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled("URL Shortener", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!("Total: {} ", app.controller.urls().len()),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw footer with keyboard shortcuts for the focused area
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut shortcuts = match app.focus {
        Focus::Url | Focus::Alias => vec![
            ("Tab", "Next", Color::Cyan),
            ("Enter", "Shorten", Color::Green),
            ("Ctrl-U", "Clear", Color::Yellow),
        ],
        Focus::Submit => vec![
            ("Tab", "Next", Color::Cyan),
            ("Enter", "Shorten", Color::Green),
        ],
        Focus::Table => vec![
            ("Up/Down", "Select", Color::Cyan),
            ("Left/Right", "Page", Color::Cyan),
            ("+/-", "Rows", Color::Cyan),
            ("c", "Copy", Color::Green),
            ("o", "Open", Color::Blue),
            ("d", "Delete", Color::Red),
            ("q", "Quit", Color::Magenta),
        ],
    };
    if app.controller.error_notification().is_some() {
        shortcuts.push(("Esc", "Dismiss", Color::Red));
    }

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
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

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
