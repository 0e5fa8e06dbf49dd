//! 汉字优先级计算 - 业务能力层
//!
//! 优先级 = 频率 * 0.70 + 笔画调整 * 0.20 + 拼音常见度 * 0.05 + 语义领域 * 0.05
//!
//! 分值只用于排序，绝对值没有含义。

use crate::models::CharacterRecord;
use crate::services::frequency::FrequencyTable;
use crate::services::strokes::StrokeEstimator;
use phf::phf_set;
use serde::{Deserialize, Serialize};

/// 常见声母
pub const COMMON_ONSETS: [&str; 23] = [
    "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "zh", "ch", "sh", "r",
    "z", "c", "s", "y", "w",
];

/// 常见韵母（按此顺序匹配，命中第一个即停止）
pub const COMMON_RHYMES: [&str; 24] = [
    "a", "o", "e", "i", "u", "ü", "ai", "ei", "ui", "ao", "ou", "iu", "ie", "üe", "er", "an", "en",
    "in", "un", "ün", "ang", "eng", "ing", "ong",
];

/// 日常生活用字
static DAILY_LIFE_CHARS: phf::Set<char> = phf_set! {
    '吃', '喝', '睡', '醒', '走', '跑', '跳', '坐', '站', '看',
    '听', '说', '读', '写', '买', '卖', '给', '拿', '放', '开',
    '关', '进', '出', '上', '下', '来', '去', '回', '到', '有',
    '没', '是', '不', '好', '坏', '大', '小', '多', '少', '长',
    '短', '高', '低', '胖', '瘦', '快', '慢', '热', '冷', '新',
    '旧', '美', '丑', '红', '黄', '蓝', '绿', '白', '黑',
};

/// 亲属称谓用字
static KINSHIP_CHARS: phf::Set<char> = phf_set! {
    '爸', '妈', '爷', '奶', '姥', '婆', '公', '岳', '丈', '婿',
    '媳', '妇', '郎', '娘', '姑', '姨', '舅', '叔', '伯', '侄',
    '甥', '孙', '玄', '曾', '高', '太', '祖', '父', '母', '兄',
    '弟', '姐', '妹', '夫', '妻', '儿', '女', '子',
};

/// 身体部位用字
static BODY_PART_CHARS: phf::Set<char> = phf_set! {
    '头', '脑', '脸', '面', '眉', '眼', '睛', '嘴', '唇', '齿',
    '鼻', '耳', '舌', '喉', '颈', '肩', '背', '胸', '腹', '腰',
    '手', '臂', '肘', '腕', '掌', '指', '腿', '膝', '脚', '足',
    '心', '肝', '肺', '胃', '肠', '肾', '血', '骨', '肉', '皮',
};

/// 自然现象与动植物用字
static NATURE_CHARS: phf::Set<char> = phf_set! {
    '天', '地', '日', '月', '星', '辰', '云', '雨', '雪', '风',
    '雷', '电', '雾', '露', '霜', '冰', '火', '水', '山', '石',
    '土', '沙', '泥', '金', '木', '花', '草', '树', '林', '森',
    '鸟', '兽', '虫', '鱼', '鸡', '狗', '猫', '牛', '羊', '马',
    '猪',
};

/// 语义领域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticCategory {
    DailyLife,
    Kinship,
    BodyPart,
    Nature,
    Other,
}

impl SemanticCategory {
    /// 按优先级顺序判断：日常 > 亲属 > 身体 > 自然
    pub fn of(character: char) -> Self {
        if DAILY_LIFE_CHARS.contains(&character) {
            SemanticCategory::DailyLife
        } else if KINSHIP_CHARS.contains(&character) {
            SemanticCategory::Kinship
        } else if BODY_PART_CHARS.contains(&character) {
            SemanticCategory::BodyPart
        } else if NATURE_CHARS.contains(&character) {
            SemanticCategory::Nature
        } else {
            SemanticCategory::Other
        }
    }

    pub fn score(self) -> f64 {
        match self {
            SemanticCategory::DailyLife => 2000.0,
            SemanticCategory::Kinship => 1500.0,
            SemanticCategory::BodyPart => 1200.0,
            SemanticCategory::Nature => 1000.0,
            SemanticCategory::Other => 500.0,
        }
    }
}

/// 各项权重
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub frequency: f64,
    pub stroke: f64,
    pub romanization: f64,
    pub semantic: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            frequency: 0.70,
            stroke: 0.20,
            romanization: 0.05,
            semantic: 0.05,
        }
    }
}

/// 优先级计算器
///
/// 只读引用字频表和笔画估算器，纯函数，无副作用。
#[derive(Debug, Clone, Copy)]
pub struct PriorityScorer<'a> {
    frequency: &'a FrequencyTable,
    strokes: &'a StrokeEstimator,
    weights: ScoringWeights,
}

impl<'a> PriorityScorer<'a> {
    pub fn new(
        frequency: &'a FrequencyTable,
        strokes: &'a StrokeEstimator,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            frequency,
            strokes,
            weights,
        }
    }

    /// 计算单条记录的优先级
    pub fn score(&self, record: &CharacterRecord) -> f64 {
        let character = record.character;
        let frequency_weight = self.frequency.lookup(character);
        let stroke_adjustment = stroke_adjustment(self.strokes.estimate(character));

        frequency_weight * self.weights.frequency
            + stroke_adjustment * self.weights.stroke
            + romanization_score(record.jyutping()) * self.weights.romanization
            + semantic_score(character) * self.weights.semantic
    }
}

/// 笔画越少调整值越高：max(0, 5000 - 笔画 * 500)
pub fn stroke_adjustment(stroke_count: u32) -> f64 {
    (5000.0 - stroke_count as f64 * 500.0).max(0.0)
}

/// 拼音常见度
///
/// 空拼音为 0；否则基础 1000，常见声母开头 +500，包含常见韵母 +300。
pub fn romanization_score(romanization: Option<&str>) -> f64 {
    let Some(romanization) = romanization.filter(|s| !s.is_empty()) else {
        return 0.0;
    };

    let mut score = 1000.0;
    if COMMON_ONSETS.iter().any(|onset| romanization.starts_with(onset)) {
        score += 500.0;
    }
    if COMMON_RHYMES.iter().any(|rhyme| romanization.contains(rhyme)) {
        score += 300.0;
    }
    score
}

/// 语义领域得分
pub fn semantic_score(character: char) -> f64 {
    SemanticCategory::of(character).score()
}
