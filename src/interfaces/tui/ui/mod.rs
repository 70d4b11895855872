// UI submodules
mod common;
mod form;
mod notifications;
mod url_table;
pub mod widgets;

pub use common::{draw_footer, draw_title_bar};
pub use form::draw_form;
pub use notifications::draw_notifications;
pub use url_table::draw_url_table;

use super::app::App;
use super::constants::FORM_HEIGHT;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Length(FORM_HEIGHT), // Form
            Constraint::Min(6),              // List
            Constraint::Length(1),           // Footer
        ])
        .split(area);

    draw_title_bar(frame, app, main_chunks[0]);
    draw_form(frame, app, main_chunks[1]);
    draw_url_table(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);

    // Overlays last so they sit on top
    draw_notifications(frame, app, area);
}
