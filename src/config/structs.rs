use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ShortenerError;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "shortener.toml";

/// 环境变量前缀，例如 SHORTENER__API__BASE_URL
pub const ENV_PREFIX: &str = "SHORTENER";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - api: 后端地址与请求超时
/// - ui: 分页与通知显示时长
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// 加载失败时打印错误并回退到默认值
    pub fn load(path: Option<&str>) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                Self::default()
            }
        }
    }

    /// 加载配置，显式指定的文件不存在时报错
    pub fn try_load(path: Option<&str>) -> Result<Self, ShortenerError> {
        Self::build(path, ENV_PREFIX)
    }

    pub(crate) fn build(path: Option<&str>, env_prefix: &str) -> Result<Self, ShortenerError> {
        use config::{Config, Environment, File};

        let (file_path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let settings = Config::builder()
            // 1. 从 TOML 文件加载
            .add_source(File::from(std::path::Path::new(file_path)).required(required))
            // 2. 从环境变量覆盖，分隔符 __
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ShortenerError::config(format!("Failed to build config: {}", e)))?;

        let config: StaticConfig = settings
            .try_deserialize()
            .map_err(|e| ShortenerError::config(format!("Failed to deserialize config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// 检查取值范围
    pub fn validate(&self) -> Result<(), ShortenerError> {
        if self.ui.rows_per_page_options.is_empty() {
            return Err(ShortenerError::config(
                "ui.rows_per_page_options must not be empty",
            ));
        }
        if self.ui.rows_per_page_options.contains(&0) {
            return Err(ShortenerError::config(
                "ui.rows_per_page_options must only contain positive values",
            ));
        }
        if !self.ui.rows_per_page_options.contains(&self.ui.rows_per_page) {
            return Err(ShortenerError::config(format!(
                "ui.rows_per_page ({}) must be one of {:?}",
                self.ui.rows_per_page, self.ui.rows_per_page_options
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ShortenerError::config("ui.tick_rate_ms must be positive"));
        }
        Ok(())
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ShortenerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShortenerError::serialization(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| ShortenerError::config(format!("{}: {}", parent.display(), e)))?;
        }

        std::fs::write(path.as_ref(), content)
            .map_err(|e| ShortenerError::config(format!("{}: {}", path.as_ref().display(), e)))
    }
}

/// 后端配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 请求超时（秒），0 表示不限制
    #[serde(default)]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// 界面配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
    #[serde(default = "default_rows_per_page_options")]
    pub rows_per_page_options: Vec<usize>,
    #[serde(default = "default_error_notification_ms")]
    pub error_notification_ms: u64,
    #[serde(default = "default_copy_notification_ms")]
    pub copy_notification_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_rows_per_page() -> usize {
    10
}

fn default_rows_per_page_options() -> Vec<usize> {
    vec![10, 25, 50, 100]
}

fn default_error_notification_ms() -> u64 {
    5000
}

fn default_copy_notification_ms() -> u64 {
    1000
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            rows_per_page: default_rows_per_page(),
            rows_per_page_options: default_rows_per_page_options(),
            error_notification_ms: default_error_notification_ms(),
            copy_notification_ms: default_copy_notification_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            enable_rotation: false,
            max_backups: default_max_backups(),
        }
    }
}
