//! # Jyutping Chapters
//!
//! 粤语学习网站的汉字排序工具：按常用程度给全部汉字重新排序，再均匀切分成章节
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 汉字记录、章节、统计报告
//! - `loaders/` - 扫描并并发读取 `chapter_<n>_characters.json`
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - `FrequencyTable` / `StrokeEstimator` - 字频与笔画估算
//! - `PriorityScorer` - 综合优先级打分
//! - `ChapterPartitioner` - 排序并切分章节
//! - `ReportGenerator` - 统计报告
//! - `BackupWriter` / `chapter_writer` - 备份与原子写入
//! - `DataValidator` - 数据质量检查
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次排序"的完整流程（纯计算）
//! - `RankingCtx` - 上下文封装（字频表 + 权重）
//! - `RankingFlow` - 流程编排（打分 → 排序 → 切分 → 报告）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 读取、备份、写回，管理整个运行
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{RankError, Result};
pub use models::{Chapter, CharacterRecord, RankingReport};
pub use orchestrator::{App, RankSummary};
pub use workflow::{RankingCtx, RankingFlow, RankingOutcome};
