use std::fmt::Write;
use std::path::PathBuf;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 数据目录（其下有 classes/ 与 rooms/）
    pub data_dir: PathBuf,
    /// 座位表输出目录
    pub output_dir: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 未指定考试日期时使用的日期格式（chrono strftime）
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            verbose_logging: false,
            date_format: "%dth %b %Y".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            data_dir: std::env::var("SEATING_DATA_DIR").map(PathBuf::from).unwrap_or(default.data_dir),
            output_dir: std::env::var("SEATING_OUTPUT_DIR").map(PathBuf::from).unwrap_or(default.output_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            date_format: std::env::var("SEATING_DATE_FORMAT").unwrap_or(default.date_format),
        }
    }

    /// 今天的日期标签
    ///
    /// 日期格式非法时退回默认格式。
    pub fn today_label(&self) -> String {
        let now = chrono::Local::now();
        let mut label = String::new();
        if write!(label, "{}", now.format(&self.date_format)).is_err() {
            tracing::warn!("日期格式非法: {}，使用默认格式", self.date_format);
            label = now.format(&Self::default().date_format).to_string();
        }
        label
    }
}
