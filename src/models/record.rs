use crate::error::{RankError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// 缺省声调
pub const DEFAULT_TONE: u8 = 1;
/// 缺省字频排名
pub const DEFAULT_FREQUENCY_RANK: u32 = 9999;

/// 单个汉字记录
///
/// 同一个汉字可能在不同章节出现多次（多音字的不同读音），
/// 这里不做去重。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterRecord {
    /// 汉字本身
    #[serde(rename = "char")]
    pub character: char,

    /// 粤拼（声母 + 韵母 + 声调），未知时为空
    #[serde(rename = "jyutping", skip_serializing_if = "Option::is_none")]
    pub romanization: Option<String>,

    /// 声调 (1-6)
    pub tone: u8,

    /// 全局字频排名，由排序流程重新分配
    pub frequency_rank: u32,

    /// 其余字段（level / onset / final 等）原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// 读取时缺失或无法解析、改用缺省值的字段（不写回）
    #[serde(skip)]
    pub missing_fields: Vec<&'static str>,
}

impl CharacterRecord {
    /// 创建只含汉字和粤拼的记录
    pub fn new(character: char, romanization: Option<&str>) -> Self {
        Self {
            character,
            romanization: romanization.map(str::to_string),
            tone: DEFAULT_TONE,
            frequency_rank: DEFAULT_FREQUENCY_RANK,
            extra: Map::new(),
            missing_fields: Vec::new(),
        }
    }

    /// 从 JSON 对象构造记录
    ///
    /// 规则：
    /// - `char`（或 `character`）必须存在且恰好是一个字符，否则返回 `InvalidRecord`
    /// - `jyutping`（或 `romanization`）缺失或为 null 时视为未知
    /// - `tone` 缺失时取 1，`frequency_rank`（或 `frequencyRank`）缺失时取 9999
    /// - 缺失或无效而取缺省值的字段记入 `missing_fields`
    /// - 其余字段放入 `extra`
    pub fn from_value(index: usize, value: Value) -> Result<Self> {
        let Value::Object(mut map) = value else {
            return Err(RankError::invalid_record(index, "记录不是 JSON 对象"));
        };

        let character = match take_first(&mut map, &["char", "character"]) {
            Some(Value::String(s)) => single_char(&s)
                .ok_or_else(|| RankError::invalid_record(index, format!("'{}' 不是单个字符", s)))?,
            Some(other) => {
                return Err(RankError::invalid_record(
                    index,
                    format!("char 字段类型错误: {}", other),
                ))
            }
            None => return Err(RankError::invalid_record(index, "缺少 char 字段")),
        };

        let mut missing_fields = Vec::new();

        let romanization = match take_first(&mut map, &["jyutping", "romanization"]) {
            Some(Value::String(s)) => Some(s),
            Some(Value::Null) => None,
            Some(other) => Some(other.to_string()),
            None => {
                missing_fields.push("jyutping");
                None
            }
        };

        let tone = match take_first(&mut map, &["tone"])
            .and_then(|v| as_u64(&v))
            .and_then(|t| u8::try_from(t).ok())
        {
            Some(tone) => tone,
            None => {
                missing_fields.push("tone");
                DEFAULT_TONE
            }
        };

        let frequency_rank = match take_first(&mut map, &["frequency_rank", "frequencyRank"])
            .and_then(|v| as_u64(&v))
            .and_then(|r| u32::try_from(r).ok())
        {
            Some(rank) => rank,
            None => {
                missing_fields.push("frequency_rank");
                DEFAULT_FREQUENCY_RANK
            }
        };

        Ok(Self {
            character,
            romanization,
            tone,
            frequency_rank,
            extra: map,
            missing_fields,
        })
    }

    /// 有效粤拼（空字符串视为未知）
    pub fn jyutping(&self) -> Option<&str> {
        self.romanization.as_deref().filter(|s| !s.is_empty())
    }
}

/// 取出第一个存在的键，其余别名也一并移除，避免写回时重复
fn take_first(map: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    let mut found = None;
    for key in keys {
        if let Some(value) = map.remove(*key) {
            if found.is_none() {
                found = Some(value);
            }
        }
    }
    found
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// 数字或数字字符串（例如 "3"、3、3.0）
fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
