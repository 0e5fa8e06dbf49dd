pub mod ranking_ctx;
pub mod ranking_flow;

pub use ranking_ctx::RankingCtx;
pub use ranking_flow::{RankingFlow, RankingOutcome};
