//! 统计报告 - 业务能力层
//!
//! 只做汇总，不修改输入。

use crate::models::{
    Chapter, ChapterSummary, CharacterRecord, FrequencyDistribution, RankedEntry, RankingReport,
};
use crate::services::frequency::FrequencyTable;

/// 报告中首尾列出的汉字数量
pub const REPORT_SLICE_LEN: usize = 100;

/// 报告生成器
#[derive(Debug, Clone, Copy)]
pub struct ReportGenerator<'a> {
    frequency: &'a FrequencyTable,
    slice_len: usize,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(frequency: &'a FrequencyTable) -> Self {
        Self {
            frequency,
            slice_len: REPORT_SLICE_LEN,
        }
    }

    /// 自定义首尾列表长度
    pub fn with_slice_len(mut self, slice_len: usize) -> Self {
        self.slice_len = slice_len;
        self
    }

    /// 汇总已划分好的章节
    pub fn summarize(&self, chapters: &[Chapter]) -> RankingReport {
        let ranked: Vec<&CharacterRecord> =
            chapters.iter().flat_map(|c| c.records.iter()).collect();
        let total = ranked.len();

        let top_chars = ranked
            .iter()
            .take(self.slice_len)
            .map(|r| self.entry(r))
            .collect();
        let bottom_chars = ranked
            .iter()
            .skip(total.saturating_sub(self.slice_len))
            .map(|r| self.entry(r))
            .collect();

        let chapters_summary = chapters
            .iter()
            .map(|chapter| ChapterSummary {
                chapter: chapter.number,
                character_count: chapter.len(),
                first: chapter.records.first().map(|r| self.entry(r)),
                last: chapter.records.last().map(|r| self.entry(r)),
            })
            .collect();

        let mut frequency_distribution = FrequencyDistribution::default();
        for record in &ranked {
            bucket(&mut frequency_distribution, self.frequency.lookup(record.character));
        }

        RankingReport {
            total_characters: total,
            top_chars,
            bottom_chars,
            chapters_summary,
            frequency_distribution,
        }
    }

    fn entry(&self, record: &CharacterRecord) -> RankedEntry {
        RankedEntry {
            character: record.character,
            jyutping: record.romanization.clone().unwrap_or_default(),
            frequency_rank: record.frequency_rank,
            estimated_frequency: self.frequency.lookup(record.character),
        }
    }
}

fn bucket(distribution: &mut FrequencyDistribution, weight: f64) {
    if weight > 50000.0 {
        distribution.very_high += 1;
    } else if weight > 10000.0 {
        distribution.high += 1;
    } else if weight > 1000.0 {
        distribution.medium += 1;
    } else if weight > 100.0 {
        distribution.low += 1;
    } else {
        distribution.very_low += 1;
    }
}
