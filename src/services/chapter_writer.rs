//! 章节写入服务 - 业务能力层
//!
//! 每个文件先写入同目录下的临时文件，再原子替换。

use crate::error::{RankError, Result};
use crate::models::Chapter;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// 以 2 空格缩进的 JSON 原子写入文件（非 ASCII 字符原样保留）
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let write_err = |source: std::io::Error| RankError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');

    let mut temp_file = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp_file.write_all(json.as_bytes()).map_err(write_err)?;
    temp_file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// 把全部章节写入数据目录，返回写入的路径
pub fn write_chapters(data_dir: &Path, chapters: &[Chapter]) -> Result<Vec<PathBuf>> {
    chapters
        .iter()
        .map(|chapter| {
            let path = data_dir.join(chapter.file_name());
            write_json_atomic(&path, &chapter.records)?;
            tracing::info!("  第{}章: {}个汉字", chapter.number, chapter.len());
            Ok(path)
        })
        .collect()
}

/// 删除编号大于新章节数的旧章节文件（已备份）
pub fn remove_stale_chapters(stale: &[PathBuf]) -> Result<()> {
    for path in stale {
        std::fs::remove_file(path).map_err(|source| RankError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!("  删除旧章节文件: {}", path.display());
    }
    Ok(())
}
