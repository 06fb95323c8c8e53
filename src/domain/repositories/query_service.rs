//! # Query Service Trait
//!
//! クエリサービス（Athena）の操作を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// クエリサービス
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QueryService: Send + Sync {
    /// クエリの実行を開始する
    ///
    /// # Returns
    ///
    /// クエリ実行ID
    async fn start_query(&self, query: &str, database: &str, output_location: &str) -> Result<String>;
}
