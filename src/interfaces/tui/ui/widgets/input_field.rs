//! 通用输入框组件
//!
//! 用于表单中的文本输入，支持：
//! - 焦点高亮
//! - 验证错误显示（优先于提示文字）
//! - 提示文字

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// 使用 Builder 模式配置各种选项
///
/// # 示例
///
/// ```rust,ignore
/// InputField::new("Alias", &form.alias)
///     .active(true)
///     .error(form.alias_error.as_deref())
///     .hint("Leave blank for a random alias")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    /// 字段标题
    title: &'a str,
    /// 输入值
    value: &'a str,
    /// 是否拥有焦点
    is_active: bool,
    /// 验证错误信息
    error: Option<&'a str>,
    /// 无错误时显示在输入框下方的提示
    hint: Option<&'a str>,
    /// 是否必填
    required: bool,
}

impl<'a> InputField<'a> {
    /// 创建新的输入框
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            hint: None,
            required: false,
        }
    }

    /// 设置焦点状态
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置验证错误
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// 设置提示文字
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// 设置为必填字段
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 所需高度：输入框 3 行 + 提示/错误 1 行
    pub fn height(&self) -> u16 {
        4
    }

    fn display_title(&self) -> String {
        if self.required {
            format!("{} *", self.title)
        } else {
            self.title.to_string()
        }
    }

    fn border_style(&self) -> Style {
        if self.error.is_some() {
            Style::default().fg(colors::ERROR)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 输入内容，焦点所在时带光标
    fn display_value(&self) -> String {
        if self.is_active {
            format!("{}▏", self.value)
        } else {
            self.value.to_string()
        }
    }

    /// 渲染输入框
    ///
    /// `area` 高度应为 [`InputField::height`]
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(self.display_value()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        let below = match (self.error, self.hint) {
            (Some(error), _) => Some(Paragraph::new(error).style(Style::default().fg(colors::ERROR))),
            (None, Some(hint)) => Some(Paragraph::new(hint).style(Style::default().fg(colors::MUTED))),
            (None, None) => None,
        };
        if let Some(text) = below {
            frame.render_widget(text, chunks[1]);
        }
    }
}
