use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 程序配置
///
/// 默认值即固定的输入/输出路径，不设置任何环境变量时按默认值运行。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 三张数据表所在目录
    pub data_dir: PathBuf,
    /// 课本表文件名
    pub textbooks_file: String,
    /// 背诵篇目表文件名
    pub pieces_file: String,
    /// 高考考查表文件名
    pub exams_file: String,
    /// 文档输出目录
    pub output_dir: PathBuf,
    /// 按年份排序的文档文件名
    pub by_year_file: String,
    /// 按篇目排序的文档文件名
    pub by_piece_file: String,
    /// 总览文档文件名
    pub summary_file: String,
    /// 高频篇目排行榜长度
    pub top_n: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            textbooks_file: "官方课本.csv".to_string(),
            pieces_file: "背诵篇目.csv".to_string(),
            exams_file: "高考考查.csv".to_string(),
            output_dir: PathBuf::from("docs"),
            by_year_file: "questions_by_year.md".to_string(),
            by_piece_file: "questions_by_piece.md".to_string(),
            summary_file: "README.md".to_string(),
            top_n: 10,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量构建配置
    ///
    /// 若设置了 `GAOKAO_CONFIG`，先读取该 TOML 文件作为基础值，
    /// 再用其余环境变量覆盖；无法解析的值保持原样。
    pub fn from_env() -> AppResult<Self> {
        let base = match std::env::var("GAOKAO_CONFIG") {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };

        Ok(Self {
            data_dir: std::env::var("GAOKAO_DATA_DIR").map(PathBuf::from).unwrap_or(base.data_dir),
            output_dir: std::env::var("GAOKAO_OUTPUT_DIR").map(PathBuf::from).unwrap_or(base.output_dir),
            top_n: std::env::var("GAOKAO_TOP_N").ok().and_then(|v| v.parse().ok()).unwrap_or(base.top_n),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(base.verbose_logging),
            ..base
        })
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::file_not_found(path));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| AppError::file_read_failed(path, e))?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, path: &Path) -> AppResult<Self> {
        toml::from_str(content).map_err(|source| {
            AppError::Config(ConfigError::TomlParseFailed {
                path: path.to_path_buf(),
                source,
            })
        })
    }

    /// 以指定数据目录和输出目录构建配置，其余保持默认
    pub fn with_dirs(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn textbooks_path(&self) -> PathBuf {
        self.data_dir.join(&self.textbooks_file)
    }

    pub fn pieces_path(&self) -> PathBuf {
        self.data_dir.join(&self.pieces_file)
    }

    pub fn exams_path(&self) -> PathBuf {
        self.data_dir.join(&self.exams_file)
    }
}
