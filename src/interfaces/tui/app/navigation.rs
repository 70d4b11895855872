//! Focus and selection navigation

use super::{App, Focus};

impl App {
    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Move focus; leaving a text field blurs it
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        self.blur_current();
        self.focus = focus;
        self.sync_table_state();
    }

    /// Blur the focused text field without moving focus
    pub fn blur_current(&mut self) {
        match self.focus {
            Focus::Url => self.controller.blur_url(),
            Focus::Alias => self.controller.blur_alias(),
            Focus::Submit | Focus::Table => {}
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.sync_table_state();
    }

    pub fn move_selection_down(&mut self) {
        let len = self.controller.visible_urls().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
        self.sync_table_state();
    }

    pub fn next_page(&mut self) {
        if self.controller.next_page() {
            self.selected = 0;
        }
        self.clamp_selection();
    }

    pub fn prev_page(&mut self) {
        if self.controller.prev_page() {
            self.selected = 0;
        }
        self.clamp_selection();
    }

    pub fn cycle_rows_per_page(&mut self, forward: bool) {
        self.controller.cycle_rows_per_page(forward);
        self.selected = 0;
        self.clamp_selection();
    }
}
