//! 字频数据 - 业务能力层
//!
//! 语料库字频表 + 基于笔画数的估算兜底。
//!
//! 估算策略（分段函数，笔画越少估算频率越高）：
//!
//! | 笔画数 | 估算频率 |
//! |---|---|
//! | <= 3 | 5000 |
//! | <= 6 | 1000 |
//! | <= 9 | 500 |
//! | <= 12 | 200 |
//! | 其余 | 50 |

use crate::services::strokes::StrokeEstimator;
use std::collections::HashMap;

/// 现代汉语语料库字频（同一个字出现多次时以后出现的为准）
const CORPUS_FREQUENCIES: &[(char, f64)] = &[
    // 前100个最常用汉字
    ('的', 1000000.0), ('一', 800000.0), ('是', 750000.0), ('在', 700000.0), ('不', 680000.0),
    ('了', 650000.0), ('有', 620000.0), ('和', 600000.0), ('人', 580000.0), ('这', 560000.0),
    ('中', 540000.0), ('大', 520000.0), ('为', 500000.0), ('上', 480000.0), ('个', 460000.0),
    ('国', 440000.0), ('我', 420000.0), ('以', 400000.0), ('要', 380000.0), ('他', 360000.0),
    ('时', 340000.0), ('来', 320000.0), ('用', 300000.0), ('们', 280000.0), ('生', 260000.0),
    ('到', 240000.0), ('作', 220000.0), ('地', 200000.0), ('于', 180000.0), ('出', 160000.0),
    ('就', 140000.0), ('分', 120000.0), ('对', 100000.0), ('成', 98000.0), ('会', 96000.0),
    ('可', 94000.0), ('主', 92000.0), ('发', 90000.0), ('年', 88000.0), ('动', 86000.0),
    ('同', 84000.0), ('工', 82000.0), ('也', 80000.0), ('能', 78000.0), ('下', 76000.0),
    ('过', 74000.0), ('子', 72000.0), ('说', 70000.0), ('产', 68000.0), ('种', 66000.0),
    ('面', 64000.0), ('而', 62000.0), ('方', 60000.0), ('后', 58000.0), ('多', 56000.0),
    ('定', 54000.0), ('行', 52000.0), ('学', 50000.0), ('法', 48000.0), ('所', 46000.0),
    ('民', 44000.0), ('得', 42000.0), ('经', 40000.0), ('十', 38000.0), ('三', 36000.0),
    ('之', 34000.0), ('进', 32000.0), ('着', 30000.0), ('等', 28000.0), ('部', 26000.0),
    ('度', 24000.0), ('家', 22000.0), ('电', 20000.0), ('力', 18000.0), ('里', 16000.0),
    ('如', 14000.0), ('水', 12000.0), ('化', 10000.0), ('高', 9800.0), ('自', 9600.0),
    ('二', 9400.0), ('理', 9200.0), ('起', 9000.0), ('小', 8800.0), ('物', 8600.0),
    ('现', 8400.0), ('实', 8200.0), ('加', 8000.0), ('量', 7800.0), ('都', 7600.0),
    ('两', 7400.0), ('体', 7200.0), ('制', 7000.0), ('机', 6800.0), ('当', 6600.0),
    ('使', 6400.0), ('点', 6200.0), ('从', 6000.0), ('业', 5800.0), ('本', 5600.0),
    ('去', 5400.0), ('把', 5200.0), ('性', 5000.0), ('好', 4800.0), ('应', 4600.0),
    ('开', 4400.0), ('它', 4200.0), ('合', 4000.0), ('还', 3800.0), ('因', 3600.0),
    // 常用姓氏
    ('王', 35000.0), ('李', 34000.0), ('张', 33000.0), ('刘', 32000.0), ('陈', 31000.0),
    ('杨', 30000.0), ('赵', 29000.0), ('黄', 28000.0), ('周', 27000.0), ('吴', 26000.0),
    ('徐', 25000.0), ('孙', 24000.0), ('胡', 23000.0), ('朱', 22000.0), ('高', 21000.0),
    ('林', 20000.0), ('何', 19000.0), ('郭', 18000.0), ('马', 17000.0), ('罗', 16000.0),
    ('梁', 15000.0), ('宋', 14000.0), ('郑', 13000.0), ('谢', 12000.0), ('韩', 11000.0),
    ('唐', 10000.0), ('冯', 9000.0), ('于', 8000.0), ('董', 7000.0), ('萧', 6000.0),
    ('程', 5000.0), ('曹', 4000.0), ('袁', 3000.0), ('邓', 2000.0), ('许', 1000.0),
    // 常用动词
    ('做', 45000.0), ('看', 44000.0), ('听', 43000.0), ('吃', 42000.0), ('喝', 41000.0),
    ('走', 40000.0), ('跑', 39000.0), ('跳', 38000.0), ('坐', 37000.0), ('站', 36000.0),
    ('睡', 35000.0), ('醒', 34000.0), ('想', 33000.0), ('念', 32000.0), ('写', 31000.0),
    ('读', 30000.0), ('画', 29000.0), ('唱', 28000.0), ('跳', 27000.0), ('玩', 26000.0),
    ('买', 25000.0), ('卖', 24000.0), ('给', 23000.0), ('拿', 22000.0), ('放', 21000.0),
    ('开', 20000.0), ('关', 19000.0), ('进', 18000.0), ('出', 17000.0), ('上', 16000.0),
    ('下', 15000.0), ('来', 14000.0), ('去', 13000.0), ('回', 12000.0), ('到', 11000.0),
    // 常用形容词
    ('好', 50000.0), ('坏', 49000.0), ('大', 48000.0), ('小', 47000.0), ('多', 46000.0),
    ('少', 45000.0), ('长', 44000.0), ('短', 43000.0), ('高', 42000.0), ('低', 41000.0),
    ('胖', 40000.0), ('瘦', 39000.0), ('快', 38000.0), ('慢', 37000.0), ('热', 36000.0),
    ('冷', 35000.0), ('新', 34000.0), ('旧', 33000.0), ('美', 32000.0), ('丑', 31000.0),
    ('红', 30000.0), ('黄', 29000.0), ('蓝', 28000.0), ('绿', 27000.0), ('白', 26000.0),
    ('黑', 25000.0), ('亮', 24000.0), ('暗', 23000.0), ('强', 22000.0), ('弱', 21000.0),
    // 常用名词
    ('天', 40000.0), ('地', 39000.0), ('人', 38000.0), ('山', 37000.0), ('水', 36000.0),
    ('火', 35000.0), ('风', 34000.0), ('雨', 33000.0), ('云', 32000.0), ('雪', 31000.0),
    ('花', 30000.0), ('草', 29000.0), ('树', 28000.0), ('木', 27000.0), ('石', 26000.0),
    ('金', 25000.0), ('银', 24000.0), ('铜', 23000.0), ('铁', 22000.0), ('钢', 21000.0),
    ('钱', 20000.0), ('财', 19000.0), ('宝', 18000.0), ('玉', 17000.0), ('珠', 16000.0),
    ('书', 15000.0), ('纸', 14000.0), ('笔', 13000.0), ('墨', 12000.0), ('砚', 11000.0),
    ('车', 10000.0), ('船', 9000.0), ('马', 8000.0), ('牛', 7000.0), ('羊', 6000.0),
    ('鸡', 5000.0), ('狗', 4000.0), ('猫', 3000.0), ('鱼', 2000.0), ('鸟', 1000.0),
    // 数词和量词
    ('一', 100000.0), ('二', 90000.0), ('三', 80000.0), ('四', 70000.0), ('五', 60000.0),
    ('六', 50000.0), ('七', 40000.0), ('八', 30000.0), ('九', 20000.0), ('十', 10000.0),
    ('百', 9000.0), ('千', 8000.0), ('万', 7000.0), ('亿', 6000.0), ('兆', 5000.0),
    ('个', 40000.0), ('只', 30000.0), ('条', 20000.0), ('张', 10000.0), ('本', 9000.0),
    ('件', 8000.0), ('套', 7000.0), ('双', 6000.0), ('对', 5000.0), ('组', 4000.0),
    // 方位词和时间词
    ('上', 30000.0), ('下', 29000.0), ('左', 28000.0), ('右', 27000.0), ('前', 26000.0),
    ('后', 25000.0), ('里', 24000.0), ('外', 23000.0), ('中', 22000.0), ('间', 21000.0),
    ('东', 20000.0), ('西', 19000.0), ('南', 18000.0), ('北', 17000.0), ('春', 16000.0),
    ('夏', 15000.0), ('秋', 14000.0), ('冬', 13000.0), ('年', 12000.0), ('月', 11000.0),
    ('日', 10000.0), ('时', 9000.0), ('分', 8000.0), ('秒', 7000.0), ('周', 6000.0),
    ('期', 5000.0), ('星', 4000.0), ('辰', 3000.0), ('刻', 2000.0), ('代', 1000.0),
    // 连接词和助词
    ('和', 50000.0), ('与', 49000.0), ('及', 48000.0), ('或', 47000.0), ('但', 46000.0),
    ('而', 45000.0), ('且', 44000.0), ('因', 43000.0), ('为', 42000.0), ('以', 41000.0),
    ('的', 1000000.0), ('地', 90000.0), ('得', 80000.0), ('了', 70000.0), ('着', 60000.0),
    ('过', 50000.0), ('啊', 40000.0), ('吗', 30000.0), ('呢', 20000.0), ('吧', 10000.0),
    // 身体
    ('心', 35000.0), ('手', 34000.0), ('足', 33000.0), ('口', 32000.0), ('目', 31000.0),
    ('耳', 30000.0), ('鼻', 29000.0), ('舌', 28000.0), ('身', 27000.0), ('体', 26000.0),
    ('头', 25000.0), ('脑', 24000.0), ('脸', 23000.0), ('面', 22000.0), ('眉', 21000.0),
    ('眼', 20000.0), ('睛', 19000.0), ('嘴', 18000.0), ('唇', 17000.0), ('齿', 16000.0),
    ('发', 15000.0), ('须', 14000.0), ('毛', 13000.0), ('皮', 12000.0), ('肤', 11000.0),
    ('骨', 10000.0), ('肉', 9000.0), ('血', 8000.0), ('脉', 7000.0), ('筋', 6000.0),
    // 情感与亲属
    ('爱', 25000.0), ('情', 24000.0), ('友', 23000.0), ('谊', 22000.0), ('亲', 21000.0),
    ('戚', 20000.0), ('家', 19000.0), ('庭', 18000.0), ('族', 17000.0), ('宗', 16000.0),
    ('祖', 15000.0), ('先', 14000.0), ('辈', 13000.0), ('子', 12000.0), ('孙', 11000.0),
    ('儿', 10000.0), ('女', 9000.0), ('父', 8000.0), ('母', 7000.0), ('兄', 6000.0),
    ('弟', 5000.0), ('姐', 4000.0), ('妹', 3000.0), ('夫', 2000.0), ('妻', 1000.0),
    ('爷', 900.0), ('奶', 800.0), ('姥', 700.0), ('爷', 600.0), ('婆', 500.0),
    ('公', 400.0), ('婆', 300.0), ('岳', 200.0), ('丈', 100.0), ('婿', 90.0),
    ('媳', 80.0), ('妇', 70.0), ('郎', 60.0), ('娘', 50.0), ('姑', 40.0),
    ('姨', 30.0), ('舅', 20.0), ('叔', 10.0), ('伯', 9.0), ('侄', 8.0),
    ('甥', 7.0), ('孙', 6.0), ('玄', 5.0), ('曾', 4.0), ('高', 3.0),
    ('太', 2.0), ('祖', 1.0),
];

/// 字频来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightSource {
    /// 语料库数据
    Corpus,
    /// 按笔画数估算
    Estimated,
}

/// 字频表
///
/// 运行开始时构造一次，之后只读。
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    curated: HashMap<char, f64>,
    strokes: StrokeEstimator,
}

impl FrequencyTable {
    /// 内置语料库字频表
    pub fn builtin() -> Self {
        Self::from_entries(CORPUS_FREQUENCIES.iter().copied())
    }

    /// 从任意条目构造，重复的字以后出现的为准
    ///
    /// 负数或非有限值按 0 处理，保证查询结果非负。
    pub fn from_entries(entries: impl IntoIterator<Item = (char, f64)>) -> Self {
        let curated = entries
            .into_iter()
            .map(|(c, w)| (c, if w.is_finite() && w > 0.0 { w } else { 0.0 }))
            .collect();
        Self {
            curated,
            strokes: StrokeEstimator::new(),
        }
    }

    /// 查询频率权重（总是 >= 0）
    pub fn lookup(&self, character: char) -> f64 {
        self.resolve(character).0
    }

    /// 查询频率权重及其来源
    pub fn resolve(&self, character: char) -> (f64, WeightSource) {
        match self.curated.get(&character) {
            Some(weight) => (*weight, WeightSource::Corpus),
            None => (
                estimate_from_strokes(self.strokes.estimate(character)),
                WeightSource::Estimated,
            ),
        }
    }

    /// 是否有语料库数据
    pub fn is_curated(&self, character: char) -> bool {
        self.curated.contains_key(&character)
    }

    /// 语料库条目数
    pub fn len(&self) -> usize {
        self.curated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curated.is_empty()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 笔画数 -> 估算频率
pub fn estimate_from_strokes(stroke_count: u32) -> f64 {
    match stroke_count {
        0..=3 => 5000.0,
        4..=6 => 1000.0,
        7..=9 => 500.0,
        10..=12 => 200.0,
        _ => 50.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_later_entries_win() {
        let table = FrequencyTable::builtin();
        assert_eq!(table.lookup('的'), 1000000.0);
        // 数词部分覆盖了前100字中的值
        assert_eq!(table.lookup('一'), 100000.0);
        // 亲属部分最后出现的值
        assert_eq!(table.lookup('高'), 3.0);
        assert_eq!(table.lookup('祖'), 1.0);
        assert!(table.is_curated('猫'));
    }

    #[test]
    fn test_fallback_uses_stroke_steps() {
        let table = FrequencyTable::builtin();
        // U+9F98 不在表中，码位估算 8 画
        assert_eq!(table.resolve('龘'), (500.0, WeightSource::Estimated));
        // U+4E2B 丫，码位估算 3 画
        assert_eq!(table.lookup('丫'), 5000.0);
        // 非汉字同样有定义
        assert_eq!(table.lookup('A'), 500.0);
    }

    #[test]
    fn test_step_breakpoints() {
        assert_eq!(estimate_from_strokes(1), 5000.0);
        assert_eq!(estimate_from_strokes(3), 5000.0);
        assert_eq!(estimate_from_strokes(4), 1000.0);
        assert_eq!(estimate_from_strokes(6), 1000.0);
        assert_eq!(estimate_from_strokes(9), 500.0);
        assert_eq!(estimate_from_strokes(12), 200.0);
        assert_eq!(estimate_from_strokes(13), 50.0);
        assert_eq!(estimate_from_strokes(30), 50.0);
    }

    #[test]
    fn test_weights_never_negative() {
        let table = FrequencyTable::from_entries([('甲', -5.0), ('乙', f64::NAN)]);
        assert_eq!(table.lookup('甲'), 0.0);
        assert_eq!(table.lookup('乙'), 0.0);
        for c in ['的', '龘', 'x', '\u{20000}'] {
            assert!(FrequencyTable::builtin().lookup(c) >= 0.0);
        }
    }
}
