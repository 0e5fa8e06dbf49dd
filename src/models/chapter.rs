use crate::models::record::CharacterRecord;

/// 章节：全局排序结果中连续的一段
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    /// 章节编号（从 1 开始）
    pub number: usize,
    pub records: Vec<CharacterRecord>,
}

impl Chapter {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 输出文件名
    pub fn file_name(&self) -> String {
        chapter_file_name(self.number)
    }
}

/// `chapter_<n>_characters.json`
pub fn chapter_file_name(number: usize) -> String {
    format!("chapter_{}_characters.json", number)
}
