//! 备份服务 - 业务能力层
//!
//! 在覆盖章节文件之前，把每个现有文件逐字节复制到带时间戳的备份目录。
//! 任何一个文件复制失败都返回错误，调用方不得继续写入。
//! 备份目录总是新建的，已有的备份不会被覆盖。

use crate::error::{RankError, Result};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// 同名目录已存在时最多尝试的后缀数
const MAX_DIR_ATTEMPTS: usize = 100;

/// 备份服务
pub struct BackupWriter {
    backup_dir: PathBuf,
}

impl BackupWriter {
    /// 备份目录：`<data_dir>/<prefix>_<YYYYmmdd_HHMMSS>`
    pub fn new(data_dir: &Path, prefix: &str) -> Self {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        Self::with_dir(data_dir.join(format!("{}_{}", prefix, timestamp)))
    }

    /// 使用指定的备份目录
    pub fn with_dir(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// 备份全部文件，返回备份后的路径
    ///
    /// 没有文件需要备份时不创建目录。目录名已被占用（例如同一秒内
    /// 运行两次）时依次尝试 `_1`、`_2` ... 后缀，`backup_dir()` 随之更新。
    pub async fn backup_all(&mut self, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        self.backup_dir = self.create_fresh_dir().await?;
        info!("创建备份目录: {}", self.backup_dir.display());

        let mut copied = Vec::with_capacity(files.len());
        for src in files {
            let dst = self.target_for(src);
            fs::copy(src, &dst)
                .await
                .map_err(|source| RankError::Backup {
                    path: src.clone(),
                    source,
                })?;
            debug!("  备份: {} -> {}", src.display(), dst.display());
            copied.push(dst);
        }

        Ok(copied)
    }

    async fn create_fresh_dir(&self) -> Result<PathBuf> {
        let backup_err = |path: &Path, source: io::Error| RankError::Backup {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = self.backup_dir.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| backup_err(parent, e))?;
        }

        for attempt in 0..MAX_DIR_ATTEMPTS {
            let candidate = match attempt {
                0 => self.backup_dir.clone(),
                n => with_suffix(&self.backup_dir, n),
            };
            match fs::create_dir(&candidate).await {
                Ok(()) => return Ok(candidate),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(backup_err(&candidate, e)),
            }
        }

        Err(backup_err(
            &self.backup_dir,
            io::Error::new(io::ErrorKind::AlreadyExists, "备份目录已存在"),
        ))
    }

    /// `<file_name>.backup`
    fn target_for(&self, src: &Path) -> PathBuf {
        let name = src
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "chapter".to_string());
        self.backup_dir.join(format!("{}.backup", name))
    }
}

/// `<dir>_<n>`
fn with_suffix(dir: &Path, n: usize) -> PathBuf {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    dir.with_file_name(format!("{}_{}", name, n))
}
