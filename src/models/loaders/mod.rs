pub mod chapter_loader;

pub use chapter_loader::{
    discover_chapter_files, load_all_chapter_files, load_chapter_file, ChapterFile, ChapterSet,
};
