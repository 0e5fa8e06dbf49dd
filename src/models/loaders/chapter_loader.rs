use crate::error::RankError;
use crate::models::record::CharacterRecord;
use anyhow::{Context, Result};
use futures::future::join_all;
use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 单个章节文件的加载结果
#[derive(Debug)]
pub struct ChapterFile {
    /// 文件名中的章节编号
    pub number: usize,
    pub path: PathBuf,
    /// 成功解析的记录（保持文件中的顺序）
    pub records: Vec<CharacterRecord>,
    /// 被排除的记录（缺少 char 等）
    pub rejected: Vec<RankError>,
}

/// 数据目录中全部章节文件的加载结果
#[derive(Debug, Default)]
pub struct ChapterSet {
    /// 找到的全部章节文件（按章节编号排序），包括解析失败的
    pub discovered: Vec<PathBuf>,
    /// 成功加载的章节（按章节编号排序）
    pub chapters: Vec<ChapterFile>,
    /// 读取或解析失败的文件
    pub failed: Vec<RankError>,
}

impl ChapterSet {
    /// 按章节顺序拼接所有记录，作为排序的原始输入顺序
    pub fn into_records(self) -> Vec<CharacterRecord> {
        self.chapters
            .into_iter()
            .flat_map(|chapter| chapter.records)
            .collect()
    }

    pub fn record_count(&self) -> usize {
        self.chapters.iter().map(|c| c.records.len()).sum()
    }

    pub fn rejected_count(&self) -> usize {
        self.chapters.iter().map(|c| c.rejected.len()).sum()
    }
}

/// 扫描数据目录，返回 `(章节编号, 路径)`，按编号升序
pub async fn discover_chapter_files(folder: &Path) -> Result<Vec<(usize, PathBuf)>> {
    if !folder.exists() {
        anyhow::bail!("数据目录不存在: {}", folder.display());
    }

    let re = Regex::new(r"^chapter_(\d+)_characters\.json$")?;
    let mut files = Vec::new();
    let mut entries = fs::read_dir(folder)
        .await
        .with_context(|| format!("无法读取数据目录: {}", folder.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Some(number) = re
            .captures(name)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse::<usize>().ok())
        {
            files.push((number, path));
        }
    }

    files.sort_by_key(|(number, _)| *number);
    Ok(files)
}

/// 加载单个章节文件
///
/// 文件不存在、不是 JSON 数组时返回 `MissingInput`；
/// 数组中的无效记录不会导致整个文件失败，而是放入 `rejected`。
pub async fn load_chapter_file(number: usize, path: &Path) -> Result<ChapterFile, RankError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| RankError::missing_input(path, e))?;

    let value: Value =
        serde_json::from_str(&content).map_err(|e| RankError::missing_input(path, e))?;

    let Value::Array(items) = value else {
        return Err(RankError::missing_input(path, "文件内容不是 JSON 数组"));
    };

    let mut records = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match CharacterRecord::from_value(index + 1, item) {
            Ok(record) => records.push(record),
            Err(e) => rejected.push(e),
        }
    }

    Ok(ChapterFile {
        number,
        path: path.to_path_buf(),
        records,
        rejected,
    })
}

/// 加载数据目录中的全部章节文件
///
/// 单个文件失败只记录警告，继续加载其余章节。
pub async fn load_all_chapter_files(folder: &Path) -> Result<ChapterSet> {
    let files = discover_chapter_files(folder).await?;

    if files.is_empty() {
        tracing::warn!("在目录 {} 中没有找到章节文件", folder.display());
        return Ok(ChapterSet::default());
    }

    let results = join_all(
        files
            .iter()
            .map(|(number, path)| load_chapter_file(*number, path)),
    )
    .await;

    let mut set = ChapterSet {
        discovered: files.iter().map(|(_, path)| path.clone()).collect(),
        ..Default::default()
    };

    for result in results {
        match result {
            Ok(chapter) => {
                tracing::info!(
                    "  第{}章: 加载了{}个汉字",
                    chapter.number,
                    chapter.records.len()
                );
                for rejected in &chapter.rejected {
                    tracing::warn!("  第{}章: 跳过 {}", chapter.number, rejected);
                }
                set.chapters.push(chapter);
            }
            Err(e) => {
                tracing::warn!("加载文件失败: {}", e);
                set.failed.push(e);
            }
        }
    }

    Ok(set)
}
