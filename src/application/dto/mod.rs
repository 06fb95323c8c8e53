//! # Data Transfer Objects
//!
//! - **PipelineConfig**: ユースケースに渡す読み取り専用の設定
//! - **ReadinessPolicy**: バケット準備完了のポーリング設定
//! - **StepOutcome / RunReport**: ステップごとの結果

pub mod pipeline_config;
pub mod readiness_policy;
pub mod step_outcome;
