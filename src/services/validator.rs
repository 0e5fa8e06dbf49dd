//! 数据质量验证 - 业务能力层
//!
//! 检查章节数据：汉字是否在 CJK 区块、粤拼格式、声调范围、重复字等。
//! 错误（error）表示数据不可用，警告（warning）只提示检查。

use crate::models::{ChapterSet, CharacterRecord};
use crate::services::jyutping::JyutpingParser;
use serde::Serialize;
use std::collections::HashMap;

/// 有效汉字 Unicode 区间
pub const VALID_UNICODE_RANGES: [(u32, u32); 8] = [
    (0x4E00, 0x9FFF),   // 基本汉字
    (0x3400, 0x4DBF),   // 扩展A
    (0x20000, 0x2A6DF), // 扩展B
    (0x2A700, 0x2B73F), // 扩展C
    (0x2B740, 0x2B81F), // 扩展D
    (0x2B820, 0x2CEAF), // 扩展E
    (0xF900, 0xFAFF),   // 兼容汉字
    (0x2F800, 0x2FA1F), // 兼容补充
];

/// 是否为有效汉字
pub fn is_valid_chinese_char(character: char) -> bool {
    let code = character as u32;
    VALID_UNICODE_RANGES
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&code))
}

/// 验证统计
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationStats {
    pub chapter_count: usize,
    /// (章节编号, 字数)
    pub chapter_sizes: Vec<(usize, usize)>,
    pub total_records: usize,
    pub missing_jyutping: usize,
    pub duplicate_characters: usize,
}

/// 验证结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 数据验证器
pub struct DataValidator {
    parser: JyutpingParser,
}

impl DataValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            parser: JyutpingParser::new()?,
        })
    }

    /// 验证全部章节
    pub fn validate(&self, set: &ChapterSet) -> ValidationReport {
        let mut report = ValidationReport::default();

        for failed in &set.failed {
            report.errors.push(failed.to_string());
        }

        let mut occurrences: HashMap<char, usize> = HashMap::new();

        for chapter in &set.chapters {
            report
                .stats
                .chapter_sizes
                .push((chapter.number, chapter.records.len()));
            report.stats.total_records += chapter.records.len();

            for rejected in &chapter.rejected {
                report
                    .errors
                    .push(format!("章节 {}: {}", chapter.number, rejected));
            }

            for (idx, record) in chapter.records.iter().enumerate() {
                *occurrences.entry(record.character).or_default() += 1;
                self.check_record(chapter.number, idx + 1, record, &mut report);
            }
        }

        report.stats.chapter_count = set.chapters.len();

        let duplicates = occurrences.values().filter(|n| **n > 1).count();
        report.stats.duplicate_characters = duplicates;
        if duplicates > 0 {
            report
                .warnings
                .push(format!("发现 {} 个重复字符（可能是多音字）", duplicates));
        }

        report
    }

    fn check_record(
        &self,
        chapter: usize,
        position: usize,
        record: &CharacterRecord,
        report: &mut ValidationReport,
    ) {
        let location = format!("章节 {} 第 {} 个字符 '{}'", chapter, position, record.character);

        for field in &record.missing_fields {
            report
                .errors
                .push(format!("{}: 缺少字段 {}", location, field));
        }

        if !is_valid_chinese_char(record.character) {
            report
                .errors
                .push(format!("{}: 不是有效的中文字符", location));
        }

        if !(1..=6).contains(&record.tone) {
            report
                .errors
                .push(format!("{}: 无效声调 {}", location, record.tone));
        }

        let jyutping = match record.jyutping() {
            Some(jp) if jp != "nan" => jp,
            _ => {
                report.stats.missing_jyutping += 1;
                if !record.missing_fields.contains(&"jyutping") {
                    report.warnings.push(format!("{}: 缺失粤拼", location));
                }
                return;
            }
        };

        match self.parser.parse(jyutping) {
            None => report
                .warnings
                .push(format!("{}: 粤拼格式可能不正确 '{}'", location, jyutping)),
            Some(syllable) => {
                if syllable.rhyme.is_none() {
                    report
                        .warnings
                        .push(format!("{}: 无法识别韵母 '{}'", location, jyutping));
                }
                if syllable.tone != record.tone {
                    report.warnings.push(format!(
                        "{}: 粤拼声调 {} 与 tone 字段 {} 不一致",
                        location, syllable.tone, record.tone
                    ));
                }
            }
        }
    }
}
