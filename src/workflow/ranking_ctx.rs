//! 排序上下文
//!
//! 封装一次排序运行所需的只读数据：字频表、笔画估算器、权重

use crate::services::{FrequencyTable, PriorityScorer, ScoringWeights, StrokeEstimator};
use std::fmt::Display;

/// 排序上下文
///
/// 运行开始时构造一次，之后只读；测试中可以直接构造自定义字频表。
#[derive(Debug, Clone)]
pub struct RankingCtx {
    pub frequency: FrequencyTable,
    pub strokes: StrokeEstimator,
    pub weights: ScoringWeights,
}

impl RankingCtx {
    /// 使用内置字频表
    pub fn new(weights: ScoringWeights) -> Self {
        Self::with_frequency(FrequencyTable::builtin(), weights)
    }

    pub fn with_frequency(frequency: FrequencyTable, weights: ScoringWeights) -> Self {
        Self {
            frequency,
            strokes: StrokeEstimator::new(),
            weights,
        }
    }

    /// 基于本上下文的优先级计算器
    pub fn scorer(&self) -> PriorityScorer<'_> {
        PriorityScorer::new(&self.frequency, &self.strokes, self.weights)
    }
}

impl Default for RankingCtx {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl Display for RankingCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[字频表 {} 字 | 权重 频率{:.2} 笔画{:.2} 拼音{:.2} 语义{:.2}]",
            self.frequency.len(),
            self.weights.frequency,
            self.weights.stroke,
            self.weights.romanization,
            self.weights.semantic
        )
    }
}
