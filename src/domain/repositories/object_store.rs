//! # Object Store Trait
//!
//! オブジェクトストレージ（S3）の操作を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// オブジェクトストア
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// バケットを作成する
    ///
    /// # Errors
    ///
    /// 既に存在する場合は `AlreadyExists` を含むエラーを返す
    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()>;

    /// バケットが参照可能かどうかを確認する
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// オブジェクトを書き込む（既存の内容は置き換えられる）
    async fn put_object(&self, bucket: &str, key: &str, body: String) -> Result<()>;
}
