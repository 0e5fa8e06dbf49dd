use crate::config::Config;
use crate::models::{ChapterSet, RankingReport};
use crate::services::ValidationReport;
use anyhow::Result;
/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::{info, warn};

/// 终端打印时首尾各列出的汉字数
const PREVIEW_LEN: usize = 20;

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
/// - `title`: 标题（例如 "汉字排序日志"）
pub fn init_log_file(log_file_path: &str, title: &str) -> Result<()> {
    let log_header = format!(
        "{}\n{} - {}\n{}\n\n",
        "=".repeat(60),
        title,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 向日志文件追加一行
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(
        file,
        "[{}] {}",
        chrono::Local::now().format("%H:%M:%S"),
        line
    )?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 汉字字频排序");
    info!("📁 数据目录: {}", config.data_dir);
    info!("📊 章节数: {}", config.chapter_count);
    info!("{}", "=".repeat(60));
}

/// 记录章节加载信息
pub fn log_chapters_loaded(set: &ChapterSet) {
    info!(
        "✓ 找到 {} 个章节文件, 成功加载 {} 个",
        set.discovered.len(),
        set.chapters.len()
    );
    info!("📋 总共收集到 {} 个汉字", set.record_count());
    if set.rejected_count() > 0 {
        warn!("⚠️ {} 条记录无效，已排除", set.rejected_count());
    }
    if !set.failed.is_empty() {
        warn!("⚠️ {} 个章节文件加载失败", set.failed.len());
    }
}

/// 打印排序统计报告摘要
pub fn log_report_summary(report: &RankingReport) {
    let dist = &report.frequency_distribution;

    info!("\n=== 字频排序统计报告 ===");
    info!("总汉字数: {}", report.total_characters);

    info!("\n频率分布:");
    info!("  非常高频率 (>50000): {} 字", dist.very_high);
    info!("  高频率 (10000-50000): {} 字", dist.high);
    info!("  中频率 (1000-10000): {} 字", dist.medium);
    info!("  低频率 (100-1000): {} 字", dist.low);
    info!("  非常低频率 (<100): {} 字", dist.very_low);

    info!("\n章节分布:");
    for summary in &report.chapters_summary {
        match (&summary.first, &summary.last) {
            (Some(first), Some(last)) => info!(
                "  第{}章: {}个汉字, {} (排名 {}) ~ {} (排名 {})",
                summary.chapter,
                summary.character_count,
                first.character,
                first.frequency_rank,
                last.character,
                last.frequency_rank
            ),
            _ => info!("  第{}章: 0个汉字", summary.chapter),
        }
    }

    info!("\n前{}个最常用汉字:", PREVIEW_LEN);
    for entry in report.top_chars.iter().take(PREVIEW_LEN) {
        info!(
            "  {:4}. {} ({}) - 频率: {}",
            entry.frequency_rank, entry.character, entry.jyutping, entry.estimated_frequency
        );
    }

    info!("\n最后{}个汉字:", PREVIEW_LEN);
    let skip = report.bottom_chars.len().saturating_sub(PREVIEW_LEN);
    for entry in report.bottom_chars.iter().skip(skip) {
        info!(
            "  {:4}. {} ({}) - 频率: {}",
            entry.frequency_rank, entry.character, entry.jyutping, entry.estimated_frequency
        );
    }
}

/// 打印验证报告
pub fn log_validation_report(report: &ValidationReport) {
    info!("\n{}", "=".repeat(60));
    info!("验证报告");
    info!("{}", "=".repeat(60));

    info!("\n错误数: {}", report.errors.len());
    info!("警告数: {}", report.warnings.len());

    if !report.errors.is_empty() {
        info!("\n错误列表:");
        for (i, error) in report.errors.iter().enumerate() {
            info!("  {}. {}", i + 1, error);
        }
    }

    if !report.warnings.is_empty() {
        info!("\n警告列表:");
        for (i, warning) in report.warnings.iter().enumerate() {
            info!("  {}. {}", i + 1, warning);
        }
    }

    let stats = &report.stats;
    info!("\n统计信息:");
    info!("  章节数量: {}", stats.chapter_count);
    for (chapter, size) in &stats.chapter_sizes {
        info!("  章节 {}: {} 个字符", chapter, size);
    }
    info!("  总字符数: {}", stats.total_records);
    info!("  缺失粤拼: {}", stats.missing_jyutping);
    info!("  重复字符: {}", stats.duplicate_characters);

    info!("\n{}", "=".repeat(60));
    if report.is_ok() {
        info!("✅ 数据质量验证通过！");
    } else {
        info!("❌ 数据质量验证失败，请修复错误");
    }
    if !report.warnings.is_empty() {
        info!("⚠️  发现 {} 个警告，建议检查", report.warnings.len());
    }
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `total`: 排序的汉字总数
/// - `chapters`: 写入的章节数
/// - `backup_dir`: 备份目录（演练模式下为空）
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(
    total: usize,
    chapters: usize,
    backup_dir: Option<&std::path::Path>,
    log_file_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 排序完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 汉字总数: {}", total);
    info!("📚 章节数: {}", chapters);
    match backup_dir {
        Some(dir) => info!("💾 原始数据已备份到: {}", dir.display()),
        None => info!("💡 演练模式，未写入任何文件"),
    }
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}
