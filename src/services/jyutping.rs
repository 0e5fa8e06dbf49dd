//! 粤拼解析
//!
//! 把 `ho2` 这样的音节拆成声母 / 韵母 / 声调，韵母按最长匹配。

use regex::Regex;

/// LSHK 粤拼韵母
pub const FINALS: &[&str] = &[
    "aa", "aai", "aau", "aam", "aan", "aang", "aap", "aat", "aak",
    "ai", "au", "am", "an", "ang", "ap", "at", "ak",
    "e", "ei", "eu", "em", "en", "eng", "ep", "et", "ek",
    "i", "iu", "im", "in", "ing", "ip", "it", "ik",
    "o", "oi", "ou", "on", "ong", "ot", "ok",
    "u", "ui", "un", "ung", "ut", "uk",
    "oe", "oeng", "oet", "oek",
    "eo", "eoi", "eon", "eot",
    "yu", "yun", "yut",
    "m", "ng",
];

/// 解析后的音节
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub onset: String,
    /// 没有匹配到已知韵母时为 None
    pub rhyme: Option<String>,
    pub tone: u8,
}

/// 粤拼解析器
#[derive(Debug, Clone)]
pub struct JyutpingParser {
    /// 小写字母 + 声调数字 1-6
    pattern: Regex,
    /// 按长度降序，用于最长匹配
    finals: Vec<&'static str>,
}

impl JyutpingParser {
    pub fn new() -> Result<Self, regex::Error> {
        let mut finals = FINALS.to_vec();
        finals.sort_by_key(|f| std::cmp::Reverse(f.len()));
        Ok(Self {
            pattern: Regex::new(r"^([a-z]+)([1-6])$")?,
            finals,
        })
    }

    /// 解析粤拼，格式不合法时返回 None
    pub fn parse(&self, jyutping: &str) -> Option<Syllable> {
        let caps = self.pattern.captures(jyutping)?;
        let body = caps.get(1)?.as_str();
        let tone = caps.get(2)?.as_str().parse().ok()?;

        Some(match self.finals.iter().find(|f| body.ends_with(**f)) {
            Some(rhyme) => Syllable {
                onset: body[..body.len() - rhyme.len()].to_string(),
                rhyme: Some((*rhyme).to_string()),
                tone,
            },
            None => Syllable {
                onset: body.to_string(),
                rhyme: None,
                tone,
            },
        })
    }
}
