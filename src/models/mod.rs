pub mod chapter;
pub mod loaders;
pub mod record;
pub mod report;

pub use chapter::Chapter;
pub use loaders::{
    discover_chapter_files, load_all_chapter_files, load_chapter_file, ChapterFile, ChapterSet,
};
pub use record::CharacterRecord;
pub use report::{ChapterSummary, FrequencyDistribution, RankedEntry, RankingReport};
