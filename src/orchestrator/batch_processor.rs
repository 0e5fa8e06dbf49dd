//! 章节批处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整的"读取 → 排序 → 备份 → 写回"。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志文件、构造排序上下文
//! 2. **批量加载**：并发读取数据目录中的全部章节文件
//! 3. **备份**：写回之前先把原文件复制到带时间戳的目录，任何失败都中止
//! 4. **写回**：按新顺序写入章节文件，删除多余的旧章节，写出统计报告
//! 5. **全局统计**：汇总并打印本次运行的结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理排序细节，委托 `RankingFlow`
//! - **先校验后 IO**：章节数不合法时不写日志、不读取、不备份、不写入

use crate::config::Config;
use crate::models::{load_all_chapter_files, RankingReport};
use crate::services::chapter_writer::{remove_stale_chapters, write_chapters, write_json_atomic};
use crate::services::{BackupWriter, ChapterPartitioner, DataValidator, ValidationReport};
use crate::utils::logging::{
    append_log_line, init_log_file, log_chapters_loaded, log_report_summary, log_startup,
    log_validation_report, print_final_stats,
};
use crate::workflow::{RankingCtx, RankingFlow};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// 一次排序运行的结果
#[derive(Debug, Clone, Default)]
pub struct RankSummary {
    /// 参与排序的汉字数
    pub total_characters: usize,
    /// 各章节的汉字数
    pub chapter_sizes: Vec<usize>,
    /// 使用估算频率的汉字数
    pub estimated_count: usize,
    /// 被排除的无效记录数
    pub rejected_records: usize,
    /// 加载失败的章节文件数
    pub failed_files: usize,
    /// 备份目录（演练模式或未写入时为空）
    pub backup_dir: Option<PathBuf>,
    /// 写入的章节文件
    pub written: Vec<PathBuf>,
    /// 删除的旧章节文件
    pub removed: Vec<PathBuf>,
    /// 统计报告（没有任何汉字时为空）
    pub report: Option<RankingReport>,
}

/// 应用主结构
pub struct App {
    config: Config,
    ctx: RankingCtx,
}

impl App {
    /// 初始化应用
    ///
    /// 章节数不合法时直接返回错误，不创建日志文件。
    pub fn initialize(config: Config) -> Result<Self> {
        ChapterPartitioner::new(config.chapter_count)?;

        init_log_file(&config.output_log_file, "汉字字频排序日志")?;

        log_startup(&config);

        let ctx = RankingCtx::new(config.weights);
        info!("排序上下文: {}", ctx);

        Ok(Self { config, ctx })
    }

    /// 重新排序全部章节
    ///
    /// `dry_run` 为 true 时只计算并打印报告，不写任何文件。
    pub async fn run_rank(&self, dry_run: bool) -> Result<RankSummary> {
        let flow = RankingFlow::new(&self.ctx, self.config.chapter_count)?;
        let data_dir = self.config.data_path();

        info!("📂 扫描数据目录: {}", data_dir.display());
        let set = load_all_chapter_files(&data_dir).await?;
        log_chapters_loaded(&set);

        let mut summary = RankSummary {
            rejected_records: set.rejected_count(),
            failed_files: set.failed.len(),
            ..RankSummary::default()
        };

        if set.record_count() == 0 {
            warn!("⚠️ 没有找到任何汉字数据，程序结束");
            return Ok(summary);
        }

        let discovered = set.discovered.clone();
        let outcome = flow.run(set.into_records());
        log_report_summary(&outcome.report);

        summary.total_characters = outcome.report.total_characters;
        summary.chapter_sizes = outcome.chapters.iter().map(|c| c.len()).collect();
        summary.estimated_count = outcome.estimated_count;

        if dry_run {
            info!("💡 演练模式：不备份、不写入");
            print_final_stats(
                summary.total_characters,
                summary.chapter_sizes.len(),
                None,
                &self.config.output_log_file,
            );
            summary.report = Some(outcome.report);
            return Ok(summary);
        }

        info!("💾 备份原始章节文件...");
        let mut backup = BackupWriter::new(&data_dir, &self.config.backup_prefix);
        let copied = backup
            .backup_all(&discovered)
            .await
            .context("备份失败，已中止写入")?;
        info!("✓ 已备份 {} 个文件", copied.len());
        summary.backup_dir = Some(backup.backup_dir().to_path_buf());

        info!("📝 写入 {} 个章节文件...", outcome.chapters.len());
        summary.written = write_chapters(&data_dir, &outcome.chapters)?;

        let stale: Vec<PathBuf> = discovered
            .into_iter()
            .filter(|path| !summary.written.contains(path))
            .collect();
        if !stale.is_empty() {
            remove_stale_chapters(&stale)?;
        }
        summary.removed = stale;

        let report_path = self.config.report_path();
        write_json_atomic(&report_path, &outcome.report)?;
        info!("📄 统计报告已保存到: {}", report_path.display());

        append_log_line(
            &self.config.output_log_file,
            &format!(
                "排序完成: {} 个汉字, {} 个章节, 备份目录 {}",
                summary.total_characters,
                summary.chapter_sizes.len(),
                backup.backup_dir().display()
            ),
        )?;
        print_final_stats(
            summary.total_characters,
            summary.chapter_sizes.len(),
            summary.backup_dir.as_deref(),
            &self.config.output_log_file,
        );

        summary.report = Some(outcome.report);
        Ok(summary)
    }

    /// 验证全部章节文件的数据质量
    pub async fn run_validate(&self) -> Result<ValidationReport> {
        let data_dir = self.config.data_path();
        info!("🔍 开始验证数据: {}", data_dir.display());

        let set = load_all_chapter_files(&data_dir).await?;
        log_chapters_loaded(&set);

        let validator = DataValidator::new()?;
        let report = validator.validate(&set);
        log_validation_report(&report);

        append_log_line(
            &self.config.output_log_file,
            &format!(
                "验证完成: {} 个错误, {} 个警告",
                report.errors.len(),
                report.warnings.len()
            ),
        )?;

        Ok(report)
    }
}
