use std::fmt;

use crate::client::ClientError;

#[derive(Debug, Clone)]
pub enum ShortenerError {
    Config(String),
    Client(String),
    Clipboard(String),
    Browser(String),
    Terminal(String),
    Serialization(String),
    Validation(String),
}

impl ShortenerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortenerError::Config(_) => "E001",
            ShortenerError::Client(_) => "E002",
            ShortenerError::Clipboard(_) => "E003",
            ShortenerError::Browser(_) => "E004",
            ShortenerError::Terminal(_) => "E005",
            ShortenerError::Serialization(_) => "E006",
            ShortenerError::Validation(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortenerError::Config(_) => "Configuration Error",
            ShortenerError::Client(_) => "Backend Request Error",
            ShortenerError::Clipboard(_) => "Clipboard Error",
            ShortenerError::Browser(_) => "Browser Launch Error",
            ShortenerError::Terminal(_) => "Terminal Error",
            ShortenerError::Serialization(_) => "Serialization Error",
            ShortenerError::Validation(_) => "Validation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortenerError::Config(msg) => msg,
            ShortenerError::Client(msg) => msg,
            ShortenerError::Clipboard(msg) => msg,
            ShortenerError::Browser(msg) => msg,
            ShortenerError::Terminal(msg) => msg,
            ShortenerError::Serialization(msg) => msg,
            ShortenerError::Validation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortenerError {}

// 便捷的构造函数
impl ShortenerError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Config(msg.into())
    }

    pub fn client<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Client(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Clipboard(msg.into())
    }

    pub fn browser<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Browser(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Terminal(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Validation(msg.into())
    }
}

impl From<std::io::Error> for ShortenerError {
    fn from(err: std::io::Error) -> Self {
        ShortenerError::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for ShortenerError {
    fn from(err: serde_json::Error) -> Self {
        ShortenerError::Serialization(err.to_string())
    }
}

impl From<ClientError> for ShortenerError {
    fn from(err: ClientError) -> Self {
        ShortenerError::Client(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortenerError>;
