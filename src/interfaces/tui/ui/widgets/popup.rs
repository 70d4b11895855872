//! 浮动通知容器
//!
//! 在内容之上绘制一个清空背景的小框，用于错误通知和复制提示

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::interfaces::tui::constants::ToastSize;

/// 通知位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopRight,
    BottomCenter,
}

/// 浮动通知
pub struct Toast<'a> {
    /// 通知标题
    title: &'a str,
    /// 通知内容
    message: &'a str,
    /// 主题颜色
    color: Color,
    /// 尺寸配置
    size: ToastSize,
    anchor: Anchor,
}

impl<'a> Toast<'a> {
    pub fn new(message: &'a str, size: ToastSize, anchor: Anchor) -> Self {
        Self {
            title: "",
            message,
            color: Color::Cyan,
            size,
            anchor,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn theme_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = anchored_rect(self.size, self.message, self.anchor, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title)
            .title_style(Style::default().fg(self.color).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.color));

        let text = Paragraph::new(self.message)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(text, popup_area);
    }
}

/// 根据内容长度和锚点计算通知区域，不超出 `r`
pub fn anchored_rect(size: ToastSize, message: &str, anchor: Anchor, r: Rect) -> Rect {
    let wanted = message.chars().count() as u16 + 4;
    let width = wanted.min(size.max_width).min(r.width);
    let height = size.height.min(r.height);

    let (x, y) = match anchor {
        Anchor::TopRight => (r.x + r.width - width, r.y),
        Anchor::BottomCenter => (
            r.x + (r.width - width) / 2,
            r.y + r.height - height,
        ),
    };
    Rect::new(x, y, width, height)
}
