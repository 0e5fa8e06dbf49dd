//! 笔画数估算 - 业务能力层
//!
//! 常用字查表，其余按 Unicode 码位在 CJK 统一汉字区块中的位置估算。
//! 估算值只是一个随码位单调分段的近似，并不是真实笔画数。

use phf::phf_map;

/// CJK 统一汉字基本区块
pub const CJK_UNIFIED_START: u32 = 0x4E00;
pub const CJK_UNIFIED_END: u32 = 0x9FFF;

/// 区块外或区块末段的默认笔画数
pub const DEFAULT_STROKES: u32 = 8;

/// 常用字笔画表
static COMMON_STROKES: phf::Map<char, u32> = phf_map! {
    '一' => 1, '乙' => 1,
    '二' => 2, '十' => 2, '丁' => 2, '厂' => 2, '七' => 2, '卜' => 2, '八' => 2,
    '人' => 2, '入' => 2, '儿' => 2, '匕' => 2, '几' => 2, '九' => 2, '刁' => 2,
    '了' => 2, '刀' => 2, '力' => 2, '乃' => 2, '又' => 2,
    '三' => 3, '千' => 3, '川' => 3, '个' => 3, '勺' => 3, '久' => 3, '凡' => 3,
    '及' => 3, '亡' => 3, '门' => 3, '义' => 3, '之' => 3, '尸' => 3, '己' => 3,
    '已' => 3, '子' => 3, '卫' => 3, '也' => 3, '女' => 3, '飞' => 3, '刃' => 3,
    '习' => 3, '马' => 3, '乡' => 3,
    '丰' => 4, '王' => 4, '井' => 4, '开' => 4, '夫' => 4, '天' => 4, '元' => 4,
    '无' => 4, '云' => 4, '专' => 4, '丐' => 4, '廿' => 4, '五' => 4, '不' => 4,
    '丑' => 4, '中' => 4, '为' => 4,
    '主' => 5, '市' => 5, '立' => 5, '冯' => 5, '玄' => 5, '玉' => 5, '瓜' => 5,
    '瓦' => 5, '甘' => 5, '生' => 5, '用' => 5, '田' => 5, '由' => 5, '甲' => 5,
    '申' => 5, '电' => 5, '白' => 5, '皮' => 5, '皿' => 5, '目' => 5, '矛' => 5,
    '矢' => 5, '石' => 5, '示' => 5,
};

/// 笔画数估算器
///
/// 不持有状态，查表数据是静态的。
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeEstimator;

impl StrokeEstimator {
    pub fn new() -> Self {
        Self
    }

    /// 估算笔画数（总是 >= 1）
    pub fn estimate(&self, character: char) -> u32 {
        match COMMON_STROKES.get(&character) {
            Some(strokes) => *strokes,
            None => estimate_by_code_point(character),
        }
    }
}

/// 按码位分段估算
///
/// | 码位 | 笔画 |
/// |---|---|
/// | U+4E00..U+4EFF | 3 |
/// | U+4F00..U+5FFF | 6 |
/// | U+6000..U+6FFF | 9 |
/// | U+7000..U+7FFF | 12 |
/// | U+8000..U+8FFF | 15 |
/// | U+9000..U+9FFF 及区块外 | 8 |
pub fn estimate_by_code_point(character: char) -> u32 {
    let code_point = character as u32;
    if !(CJK_UNIFIED_START..=CJK_UNIFIED_END).contains(&code_point) {
        return DEFAULT_STROKES;
    }
    match code_point {
        0x4E00..=0x4EFF => 3,
        0x4F00..=0x5FFF => 6,
        0x6000..=0x6FFF => 9,
        0x7000..=0x7FFF => 12,
        0x8000..=0x8FFF => 15,
        _ => DEFAULT_STROKES,
    }
}
