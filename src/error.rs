use std::path::PathBuf;
use thiserror::Error;

/// 排序流程错误类型
///
/// 错误分类：
/// - `InvalidArgument` / `InvalidRecord`：输入参数或单条记录不合法
/// - `MissingInput`：章节文件不存在或无法解析（批量流程中只记录、不中断）
/// - `Backup`：备份失败，必须中止本次运行
/// - `Write`：写回章节或报告失败
#[derive(Debug, Error)]
pub enum RankError {
    /// 参数不合法（例如章节数 <= 0）
    #[error("参数错误: {message}")]
    InvalidArgument { message: String },

    /// 单条记录不合法（缺少 `char` 字段等），该记录被排除
    #[error("记录无效 (第 {index} 条): {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// 章节文件缺失或解析失败
    #[error("章节文件不可用 ({}): {reason}", path.display())]
    MissingInput { path: PathBuf, reason: String },

    /// 备份失败
    #[error("备份失败 ({}): {source}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 序列化 / 反序列化失败
    #[error("JSON处理失败: {0}")]
    Json(#[from] serde_json::Error),

    /// 其他 IO 错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

// ========== 便捷构造函数 ==========

impl RankError {
    /// 创建参数错误
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RankError::InvalidArgument {
            message: message.into(),
        }
    }

    /// 创建记录无效错误
    pub fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        RankError::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }

    /// 创建输入缺失错误
    pub fn missing_input(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RankError::MissingInput {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 排序流程结果类型
pub type Result<T> = std::result::Result<T, RankError>;
