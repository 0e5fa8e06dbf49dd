//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责文件 IO 和流程调度，是整个系统的"指挥中心"。
//!
//! ### `batch_processor` - 章节批处理器
//! - 管理应用生命周期（初始化、运行）
//! - 加载全部章节文件（`ChapterSet`）
//! - 备份、写回章节文件和统计报告
//! - 输出全局统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (读写章节文件)
//!     ↓
//! workflow::RankingFlow (一次排序，纯计算)
//!     ↓
//! services (能力层：frequency / scorer / partitioner / report)
//! ```
//!
//! 只有编排层接触文件系统，workflow 和打分服务不做 IO。

pub mod batch_processor;

pub use batch_processor::{App, RankSummary};
