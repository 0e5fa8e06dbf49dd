pub mod backup;
pub mod chapter_writer;
pub mod frequency;
pub mod jyutping;
pub mod partitioner;
pub mod report;
pub mod scorer;
pub mod strokes;
pub mod validator;

pub use backup::BackupWriter;
pub use frequency::{FrequencyTable, WeightSource};
pub use jyutping::JyutpingParser;
pub use partitioner::ChapterPartitioner;
pub use report::ReportGenerator;
pub use scorer::{PriorityScorer, ScoringWeights, SemanticCategory};
pub use strokes::StrokeEstimator;
pub use validator::{DataValidator, ValidationReport};
