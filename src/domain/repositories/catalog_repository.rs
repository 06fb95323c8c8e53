//! # Catalog Repository Trait
//!
//! メタデータカタログ（Glue）の操作を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::table_schema::TableDefinition;

/// カタログリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// データベースを作成する
    async fn create_database(&self, name: &str, description: &str) -> Result<()>;

    /// テーブルを作成する
    async fn create_table(&self, database: &str, table: &TableDefinition) -> Result<()>;
}
