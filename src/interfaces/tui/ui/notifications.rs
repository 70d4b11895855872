use ratatui::{Frame, layout::Rect};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, toast};
use crate::interfaces::tui::ui::widgets::{Anchor, Toast};

/// Draw the error notification (top right) and the copy confirmation (bottom)
///
/// Both can be visible at the same time.
pub fn draw_notifications(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = app.controller.error_notification() {
        Toast::new(message, toast::ERROR, Anchor::TopRight)
            .title("Error")
            .theme_color(colors::ERROR)
            .render(frame, area);
    }

    if let Some(message) = app.controller.copied_notification() {
        Toast::new(message, toast::COPIED, Anchor::BottomCenter)
            .theme_color(colors::SUCCESS)
            .render(frame, area);
    }
}
