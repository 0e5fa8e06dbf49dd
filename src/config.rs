use crate::services::scorer::ScoringWeights;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 章节数据目录（存放 chapter_<n>_characters.json）
    pub data_dir: String,
    /// 重新分组后的章节数量
    pub chapter_count: i64,
    /// 统计报告文件名（位于数据目录下）
    pub report_file: String,
    /// 备份目录前缀（后接时间戳）
    pub backup_prefix: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 运行日志文件
    pub output_log_file: String,
    /// 优先级权重
    pub weights: ScoringWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            chapter_count: 10,
            report_file: "ranking_report.json".to_string(),
            backup_prefix: "backup_before_ranking".to_string(),
            verbose_logging: false,
            output_log_file: "ranking_log.txt".to_string(),
            weights: ScoringWeights::default(),
        }
    }
}

impl Config {
    /// 只从环境变量读取（未设置的项使用默认值）
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，再用环境变量覆盖
    ///
    /// `path` 为空时等价于 [`Config::from_env`]。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::from_toml_file(path)?.with_env_overrides()),
            None => Ok(Self::from_env()),
        }
    }

    /// 解析 TOML 配置文件
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))
    }

    fn with_env_overrides(self) -> Self {
        let base = self;
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or(base.data_dir),
            chapter_count: std::env::var("CHAPTER_COUNT").ok().and_then(|v| v.parse().ok()).unwrap_or(base.chapter_count),
            report_file: std::env::var("REPORT_FILE").unwrap_or(base.report_file),
            backup_prefix: std::env::var("BACKUP_PREFIX").unwrap_or(base.backup_prefix),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(base.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(base.output_log_file),
            weights: base.weights,
        }
    }

    /// 数据目录路径
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// 报告文件完整路径
    pub fn report_path(&self) -> PathBuf {
        self.data_path().join(&self.report_file)
    }
}
