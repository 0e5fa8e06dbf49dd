//! 排序流程 - 流程层
//!
//! 核心职责：定义"一次排序"的完整流程（纯计算，不做 IO）
//!
//! 流程顺序：
//! 1. 计算每条记录的优先级
//! 2. 按优先级降序稳定排序，重新分配全局排名
//! 3. 切分章节
//! 4. 生成统计报告

use crate::error::Result;
use crate::models::{Chapter, CharacterRecord, RankingReport};
use crate::services::{ChapterPartitioner, ReportGenerator};
use crate::workflow::ranking_ctx::RankingCtx;
use tracing::info;

/// 一次排序的结果
#[derive(Debug, Clone)]
pub struct RankingOutcome {
    pub chapters: Vec<Chapter>,
    pub report: RankingReport,
    /// 使用估算频率的记录数
    pub estimated_count: usize,
}

/// 排序流程
///
/// - 不持有任何文件资源
/// - 只依赖业务能力（services）
pub struct RankingFlow<'a> {
    ctx: &'a RankingCtx,
    partitioner: ChapterPartitioner,
}

impl<'a> RankingFlow<'a> {
    /// 章节数 <= 0 时返回 `InvalidArgument`
    pub fn new(ctx: &'a RankingCtx, chapter_count: i64) -> Result<Self> {
        Ok(Self {
            ctx,
            partitioner: ChapterPartitioner::new(chapter_count)?,
        })
    }

    pub fn run(&self, records: Vec<CharacterRecord>) -> RankingOutcome {
        let estimated_count = records
            .iter()
            .filter(|r| !self.ctx.frequency.is_curated(r.character))
            .count();
        if estimated_count > 0 {
            info!("📐 {} 个汉字没有语料库字频，使用笔画数估算", estimated_count);
        }

        info!("计算汉字优先级并排序...");
        let scorer = self.ctx.scorer();
        let chapters = self.partitioner.partition(records, &scorer);

        info!("生成统计报告...");
        let report = ReportGenerator::new(&self.ctx.frequency).summarize(&chapters);

        RankingOutcome {
            chapters,
            report,
            estimated_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RankError;

    #[test]
    fn test_run_is_deterministic() {
        let ctx = RankingCtx::default();
        let flow = RankingFlow::new(&ctx, 3).unwrap();
        let records: Vec<CharacterRecord> = "水火山石人口手心龘的"
            .chars()
            .map(|c| CharacterRecord::new(c, Some("aa1")))
            .collect();

        let first = flow.run(records.clone());
        let second = flow.run(records);

        assert_eq!(first.chapters, second.chapters);
        assert_eq!(first.report, second.report);
        assert_eq!(first.report.total_characters, 10);
        // 龘 不在字频表中
        assert_eq!(first.estimated_count, 1);
    }

    #[test]
    fn test_zero_chapters_rejected() {
        let ctx = RankingCtx::default();
        let err = RankingFlow::new(&ctx, 0).err().unwrap();
        assert!(matches!(err, RankError::InvalidArgument { .. }));
    }
}
