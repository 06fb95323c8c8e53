//! Adapter Layer
//!
//! 外部システム（S3, Glue, Athena, API-Football）との統合

pub mod aws;
pub mod config;
pub mod http;
