//! 章节划分 - 业务能力层
//!
//! 按优先级降序稳定排序，重新分配全局排名，再切分为 N 个连续章节。
//! 余数分给靠前的章节，任意两章数量相差不超过 1。

use crate::error::{RankError, Result};
use crate::models::{Chapter, CharacterRecord};
use crate::services::scorer::PriorityScorer;
use tracing::debug;

/// 章节划分器
#[derive(Debug, Clone, Copy)]
pub struct ChapterPartitioner {
    chapter_count: usize,
}

impl ChapterPartitioner {
    /// 创建划分器，章节数必须为正数
    pub fn new(chapter_count: i64) -> Result<Self> {
        if chapter_count <= 0 {
            return Err(RankError::invalid_argument(format!(
                "章节数必须为正数, 实际为 {}",
                chapter_count
            )));
        }
        let chapter_count = usize::try_from(chapter_count)
            .map_err(|_| RankError::invalid_argument(format!("章节数过大: {}", chapter_count)))?;
        Ok(Self { chapter_count })
    }

    /// 排序、排名并切分
    pub fn partition(
        &self,
        records: Vec<CharacterRecord>,
        scorer: &PriorityScorer<'_>,
    ) -> Vec<Chapter> {
        let ranked = rank_records(records, scorer);
        self.split(ranked)
    }

    /// 把已排好序的记录按章节大小切分
    pub fn split(&self, ranked: Vec<CharacterRecord>) -> Vec<Chapter> {
        let sizes = chapter_sizes(ranked.len(), self.chapter_count);
        let mut remaining = ranked.into_iter();

        sizes
            .into_iter()
            .enumerate()
            .map(|(idx, size)| Chapter {
                number: idx + 1,
                records: remaining.by_ref().take(size).collect(),
            })
            .collect()
    }
}

/// 计算优先级，按降序稳定排序，并把排名写回 `frequency_rank`（从 1 开始）
pub fn rank_records(
    records: Vec<CharacterRecord>,
    scorer: &PriorityScorer<'_>,
) -> Vec<CharacterRecord> {
    let mut scored: Vec<(f64, CharacterRecord)> = records
        .into_iter()
        .map(|record| (scorer.score(&record), record))
        .collect();

    // sort_by 是稳定排序，分值相同时保持输入顺序
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (score, mut record))| {
            record.frequency_rank = (idx + 1) as u32;
            debug!("排名 {:>5}: {} 优先级 {:.2}", idx + 1, record.character, score);
            record
        })
        .collect()
}

/// 各章节大小：前 `total % count` 章多一个
///
/// `count` 为 0 时返回空列表。
pub fn chapter_sizes(total: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let base = total / count;
    let remainder = total % count;
    (0..count)
        .map(|idx| if idx < remainder { base + 1 } else { base })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::frequency::FrequencyTable;
    use crate::services::scorer::ScoringWeights;
    use crate::services::strokes::StrokeEstimator;

    fn sample_records(chars: &str) -> Vec<CharacterRecord> {
        chars.chars().map(|c| CharacterRecord::new(c, None)).collect()
    }

    #[test]
    fn test_ten_records_three_chapters() {
        assert_eq!(chapter_sizes(10, 3), vec![4, 3, 3]);

        let frequency = FrequencyTable::builtin();
        let strokes = StrokeEstimator::new();
        let scorer = PriorityScorer::new(&frequency, &strokes, ScoringWeights::default());
        let partitioner = ChapterPartitioner::new(3).unwrap();

        let chapters = partitioner.partition(sample_records("的一是在不了有和人这"), &scorer);
        let sizes: Vec<usize> = chapters.iter().map(Chapter::len).collect();
        assert_eq!(sizes, vec![4, 3, 3]);
        assert_eq!(chapters[0].records[0].character, '的');
        assert_eq!(chapters[0].records[0].frequency_rank, 1);
        assert_eq!(chapters[2].records[2].frequency_rank, 10);
    }

    #[test]
    fn test_sizes_balanced_and_total_preserved() {
        for total in 0..40 {
            for count in 1..12 {
                let sizes = chapter_sizes(total, count);
                assert_eq!(sizes.len(), count);
                assert_eq!(sizes.iter().sum::<usize>(), total);
                let max = *sizes.iter().max().unwrap();
                let min = *sizes.iter().min().unwrap();
                assert!(max - min <= 1);
                // 多出来的分给前面的章节
                assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }

    #[test]
    fn test_fewer_records_than_chapters() {
        let partitioner = ChapterPartitioner::new(5).unwrap();
        let chapters = partitioner.split(sample_records("一二"));
        assert_eq!(chapters.len(), 5);
        assert_eq!(chapters[0].len(), 1);
        assert_eq!(chapters[1].len(), 1);
        assert!(chapters[2..].iter().all(Chapter::is_empty));
        assert_eq!(chapters[4].number, 5);
    }

    #[test]
    fn test_non_positive_chapter_count() {
        let err = ChapterPartitioner::new(0).unwrap_err();
        assert!(matches!(err, RankError::InvalidArgument { .. }));
        assert!(ChapterPartitioner::new(-3).is_err());
    }

    #[test]
    fn test_ties_keep_input_order_and_duplicates() {
        let frequency = FrequencyTable::from_entries(Vec::<(char, f64)>::new());
        let strokes = StrokeEstimator::new();
        let scorer = PriorityScorer::new(&frequency, &strokes, ScoringWeights::default());

        // 同码位段、同领域、无拼音 -> 分值相同
        let mut records = sample_records("乎乏乐乐");
        records[2].romanization = Some("lok6".to_string());
        records[3].romanization = Some("ngok6".to_string());
        let mut tied = sample_records("乎乏");
        tied.extend(records.drain(2..));

        let ranked = rank_records(tied.clone(), &scorer);
        let again = rank_records(tied, &scorer);
        assert_eq!(ranked, again);

        // 两个 乐 都保留
        assert_eq!(ranked.iter().filter(|r| r.character == '乐').count(), 2);
        // 有拼音的在前，其余保持输入顺序
        let order: String = ranked.iter().map(|r| r.character).collect();
        assert_eq!(order, "乐乐乎乏");
        assert_eq!(ranked[0].romanization.as_deref(), Some("lok6"));
    }

    #[test]
    fn test_most_frequent_always_first() {
        let frequency = FrequencyTable::builtin();
        let strokes = StrokeEstimator::new();
        let scorer = PriorityScorer::new(&frequency, &strokes, ScoringWeights::default());

        for count in 1..6 {
            let mut records = vec![CharacterRecord::new('龘', None)];
            records.push(CharacterRecord::new('的', Some("dik1")));
            let chapters = ChapterPartitioner::new(count).unwrap().partition(records, &scorer);
            assert_eq!(chapters[0].records[0].character, '的');
            assert_eq!(chapters[0].records[0].frequency_rank, 1);
        }
    }
}
