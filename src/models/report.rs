use serde::Serialize;

/// 排序统计报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub total_characters: usize,
    /// 排名最靠前的汉字
    pub top_chars: Vec<RankedEntry>,
    /// 排名最靠后的汉字
    pub bottom_chars: Vec<RankedEntry>,
    pub chapters_summary: Vec<ChapterSummary>,
    pub frequency_distribution: FrequencyDistribution,
}

/// 报告中的单个汉字
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    #[serde(rename = "char")]
    pub character: char,
    pub jyutping: String,
    pub frequency_rank: u32,
    /// 频率权重（语料库数据或估算值）
    pub estimated_frequency: f64,
}

/// 单章统计，空章节没有首尾字
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterSummary {
    pub chapter: usize,
    pub character_count: usize,
    pub first: Option<RankedEntry>,
    pub last: Option<RankedEntry>,
}

/// 频率分布（五档）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyDistribution {
    /// > 50000
    pub very_high: usize,
    /// 10000 - 50000
    pub high: usize,
    /// 1000 - 10000
    pub medium: usize,
    /// 100 - 1000
    pub low: usize,
    /// <= 100
    pub very_low: usize,
}

impl FrequencyDistribution {
    /// 各档合计
    pub fn total(&self) -> usize {
        self.very_high + self.high + self.medium + self.low + self.very_low
    }
}
