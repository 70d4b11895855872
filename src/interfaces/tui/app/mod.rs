//! TUI application state
//!
//! 包装 [`Controller`]，只增加终端特有的状态：焦点、行选择、退出标志

mod navigation;
mod operations;

use ratatui::widgets::TableState;

use crate::client::ShortenedUrl;
use crate::controller::Controller;

/// 当前焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Url,
    Alias,
    Submit,
    Table,
}

impl Focus {
    /// Tab 顺序
    pub fn next(self) -> Self {
        match self {
            Self::Url => Self::Alias,
            Self::Alias => Self::Submit,
            Self::Submit => Self::Table,
            Self::Table => Self::Url,
        }
    }

    /// Shift-Tab 顺序
    pub fn prev(self) -> Self {
        match self {
            Self::Url => Self::Table,
            Self::Alias => Self::Url,
            Self::Submit => Self::Alias,
            Self::Table => Self::Submit,
        }
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, Self::Url | Self::Alias)
    }
}

pub struct App {
    pub controller: Controller,
    pub focus: Focus,
    /// Selected row, relative to the current page
    pub selected: usize,
    pub table_state: TableState,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            focus: Focus::Url,
            selected: 0,
            table_state: TableState::default(),
            should_quit: false,
        }
    }

    pub fn selected_url(&self) -> Option<&ShortenedUrl> {
        self.controller.visible_urls().get(self.selected)
    }

    /// Keep the selection on an existing row after the page content changed
    pub fn clamp_selection(&mut self) {
        let len = self.controller.visible_urls().len();
        self.selected = self.selected.min(len.saturating_sub(1));
        self.sync_table_state();
    }

    pub fn sync_table_state(&mut self) {
        let has_rows = !self.controller.visible_urls().is_empty();
        let show = has_rows && self.focus == Focus::Table;
        self.table_state.select(show.then_some(self.selected));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_round_trip() {
        let mut focus = Focus::Url;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Url);
        assert_eq!(Focus::Url.prev(), Focus::Table);
        assert_eq!(Focus::Submit.prev(), Focus::Alias);
    }

    #[test]
    fn test_text_fields() {
        assert!(Focus::Url.is_text_field());
        assert!(Focus::Alias.is_text_field());
        assert!(!Focus::Submit.is_text_field());
        assert!(!Focus::Table.is_text_field());
    }
}
