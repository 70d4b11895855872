//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 表单标题
pub const FORM_TITLE: &str = "Shorten a new URL";
/// 列表标题
pub const LIST_TITLE: &str = "Shortened URLs";
/// 表头：原始链接
pub const FULL_URL_HEADER: &str = "Full URL";
/// 表头：短链接
pub const SHORT_URL_HEADER: &str = "Shortened URL";
/// 提交按钮文字
pub const SUBMIT_LABEL: &str = "Shorten";

/// 表单区域高度：边框 2 行 + 两个输入框各 4 行 + 按钮 1 行
pub const FORM_HEIGHT: u16 = 11;

/// 长链接列的最大显示宽度
pub const URL_TRUNCATE_LENGTH: usize = 60;

/// 通知尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct ToastSize {
    /// 最大宽度（列）
    pub max_width: u16,
    /// 高度（行，含边框）
    pub height: u16,
}

impl ToastSize {
    pub const fn new(max_width: u16, height: u16) -> Self {
        Self { max_width, height }
    }
}

pub mod toast {
    use super::ToastSize;

    /// 右上角错误通知
    pub const ERROR: ToastSize = ToastSize::new(60, 3);
    /// 底部 "URL copied" 提示
    pub const COPIED: ToastSize = ToastSize::new(30, 3);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 链接色
    pub const LINK: Color = Color::Blue;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}
