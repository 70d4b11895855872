use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::controller::constants::EMPTY_LIST;
use crate::interfaces::tui::app::{App, Focus};
use crate::interfaces::tui::constants::{
    FULL_URL_HEADER, LIST_TITLE, SHORT_URL_HEADER, URL_TRUNCATE_LENGTH, colors,
};

/// Cut `s` to at most `max` characters, marking the cut with "..."
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Draw the list: optional load error, the table, and the pagination line
pub fn draw_url_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.focus == Focus::Table {
        colors::PRIMARY
    } else {
        Color::White
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(LIST_TITLE)
        .title_style(Style::default().fg(colors::PRIMARY).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let load_error_height = u16::from(app.controller.load_error().is_some());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(load_error_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    if let Some(error) = app.controller.load_error() {
        let line = Paragraph::new(error).style(Style::default().fg(colors::ERROR).bold());
        frame.render_widget(line, chunks[0]);
    }

    let header = Row::new(vec![
        Span::styled(
            FULL_URL_HEADER,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            SHORT_URL_HEADER,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ])
    .bottom_margin(1);

    let widths = [Constraint::Percentage(60), Constraint::Percentage(40)];

    if app.controller.visible_urls().is_empty() {
        let table = Table::new(Vec::<Row>::new(), widths).header(header);
        frame.render_widget(table, chunks[1]);

        let body = Rect {
            y: chunks[1].y + 2,
            height: chunks[1].height.saturating_sub(2),
            ..chunks[1]
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            EMPTY_LIST,
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, body);
    } else {
        let rows: Vec<Row> = app
            .controller
            .visible_urls()
            .iter()
            .map(|url| {
                Row::new(vec![
                    Span::raw(truncate(&url.full_url, URL_TRUNCATE_LENGTH)),
                    Span::styled(url.short_url.clone(), Style::default().fg(colors::LINK)),
                ])
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().bg(colors::MUTED).fg(Color::White))
            .highlight_symbol("▶ ")
            .column_spacing(1);

        app.sync_table_state();
        frame.render_stateful_widget(table, chunks[1], &mut app.table_state);
    }

    draw_pagination(frame, app, chunks[2]);
}

/// "Rows per page: 10 | 1-10 of 23 | Page 1/3"
fn draw_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.controller.urls().len();
    let pagination = app.controller.pagination();
    let range = pagination.range(total);
    let shown = if range.is_empty() {
        format!("0 of {}", total)
    } else {
        format!("{}-{} of {}", range.start + 1, range.end, total)
    };

    let line = Line::from(vec![
        Span::styled("Rows per page: ", Style::default().fg(colors::MUTED)),
        Span::styled(
            pagination.rows_per_page().to_string(),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled(" | ", Style::default().fg(colors::MUTED)),
        Span::styled(shown, Style::default().fg(Color::White)),
        Span::styled(" | ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!("Page {}/{}", pagination.page() + 1, app.controller.page_count()),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}
