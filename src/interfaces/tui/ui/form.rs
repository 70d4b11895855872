use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::controller::constants::ALIAS_HINT;
use crate::interfaces::tui::app::{App, Focus};
use crate::interfaces::tui::constants::{FORM_TITLE, SUBMIT_LABEL, colors};
use crate::interfaces::tui::ui::widgets::InputField;

/// Draw the "shorten a new URL" form
pub fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(FORM_TITLE)
        .title_style(Style::default().fg(colors::PRIMARY).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = app.controller.form();
    let url_field = InputField::new("URL", &form.url)
        .required()
        .active(app.focus == Focus::Url)
        .error(form.url_error.as_deref());
    let alias_field = InputField::new("Alias", &form.alias)
        .active(app.focus == Focus::Alias)
        .error(form.alias_error.as_deref())
        .hint(ALIAS_HINT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(url_field.height()),
            Constraint::Length(alias_field.height()),
            Constraint::Length(1),
        ])
        .split(inner);

    url_field.render(frame, chunks[0]);
    alias_field.render(frame, chunks[1]);

    // 按钮：未就绪时置灰
    let ready = app.controller.is_ready_for_submit();
    let focused = app.focus == Focus::Submit;
    let style = match (ready, focused) {
        (true, true) => Style::default()
            .fg(colors::HIGHLIGHT_FG)
            .bg(colors::SUCCESS)
            .bold(),
        (true, false) => Style::default().fg(colors::SUCCESS).bold(),
        (false, true) => Style::default().fg(Color::Black).bg(colors::MUTED),
        (false, false) => Style::default().fg(colors::MUTED),
    };
    let button = Paragraph::new(format!("[ {} ]", SUBMIT_LABEL))
        .style(style)
        .alignment(Alignment::Right);
    frame.render_widget(button, chunks[2]);
}
